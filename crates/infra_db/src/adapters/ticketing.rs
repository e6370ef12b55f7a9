//! PostgreSQL ticketing adapter
//!
//! The internal (database) adapter for the ticketing domain ports. It
//! bridges the domain port traits to the repositories:
//!
//! - translates repository calls into the port vocabulary
//! - converts stored rows back into domain models
//! - translates `DatabaseError` into `PortError`, in particular mapping
//!   unique-constraint violations to `PortError::Conflict` so record
//!   creation can reissue its code

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use std::str::FromStr;

use core_kernel::{
    AdapterHealth, Currency, DomainPort, HealthCheckResult, HealthCheckable, IssuedCode, Money,
    PortError, ReportId, ReservationId, VisitId,
};
use domain_pricing::{Category, PaymentComputation, PriceList, PriceSource};
use domain_registration::{RegistrationStore, Reservation, WalkInVisit};
use domain_reporting::{ReportStore, WeeklyReport};

use crate::error::DatabaseError;
use crate::repositories::{PriceRepository, RegistrationRepository, ReportRepository};

/// PostgreSQL-backed implementation of the ticketing domain ports
///
/// One adapter serves all three domains; each port is scoped to its own
/// tables, so walk-in, reservation, and report codes stay in separate
/// collections.
#[derive(Debug, Clone)]
pub struct PgTicketingAdapter {
    prices: PriceRepository,
    registrations: RegistrationRepository,
    reports: ReportRepository,
    pool: PgPool,
}

impl PgTicketingAdapter {
    /// Creates a new adapter over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            prices: PriceRepository::new(pool.clone()),
            registrations: RegistrationRepository::new(pool.clone()),
            reports: ReportRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns the price repository for administrative operations
    pub fn prices(&self) -> &PriceRepository {
        &self.prices
    }

    /// Returns the registration repository for read queries
    pub fn registrations(&self) -> &RegistrationRepository {
        &self.registrations
    }

    /// Returns the report repository for read queries
    pub fn reports(&self) -> &ReportRepository {
        &self.reports
    }
}

/// Translates database errors into the port vocabulary
///
/// Callers that expect a not-found case map it themselves before calling
/// this, so a stray NotFound here is an internal inconsistency.
fn translate(err: DatabaseError) -> PortError {
    match err {
        DatabaseError::DuplicateEntry(message) => PortError::conflict(message),
        DatabaseError::ConnectionFailed(message) => PortError::connection(message),
        other => PortError::internal(other.to_string()),
    }
}

impl DomainPort for PgTicketingAdapter {}

#[async_trait]
impl PriceSource for PgTicketingAdapter {
    async fn price_list(&self) -> Result<PriceList, PortError> {
        let rows = self.prices.get_all().await.map_err(translate)?;

        let currency = rows
            .first()
            .map(|row| Currency::from_str(&row.currency))
            .transpose()
            .map_err(|e| PortError::internal(e.to_string()))?
            .unwrap_or(Currency::IDR);

        let mut list = PriceList::new(currency);
        for row in rows {
            let category = Category::from_str(&row.category)
                .map_err(|e| PortError::internal(format!("corrupt price row: {e}")))?;
            let row_currency = Currency::from_str(&row.currency)
                .map_err(|e| PortError::internal(format!("corrupt price row: {e}")))?;
            list.set_price(category, Money::new(row.amount, row_currency))
                .map_err(|e| PortError::internal(format!("corrupt price row: {e}")))?;
        }
        Ok(list)
    }
}

#[async_trait]
impl RegistrationStore for PgTicketingAdapter {
    async fn visit_code_taken(&self, code: &str) -> Result<bool, PortError> {
        self.registrations
            .visit_code_exists(code)
            .await
            .map_err(translate)
    }

    async fn reservation_code_taken(&self, code: &str) -> Result<bool, PortError> {
        self.registrations
            .reservation_code_exists(code)
            .await
            .map_err(translate)
    }

    async fn insert_visit(&self, visit: &WalkInVisit) -> Result<(), PortError> {
        self.registrations
            .insert_visit(visit)
            .await
            .map_err(translate)
    }

    async fn insert_reservation(&self, reservation: &Reservation) -> Result<(), PortError> {
        self.registrations
            .insert_reservation(reservation)
            .await
            .map_err(translate)
    }

    async fn get_visit(&self, id: VisitId) -> Result<WalkInVisit, PortError> {
        self.registrations
            .get_visit(*id.as_uuid())
            .await
            .map_err(|e| match e {
                DatabaseError::NotFound(_) => PortError::not_found("WalkInVisit", id),
                other => translate(other),
            })
    }

    async fn get_reservation(&self, id: ReservationId) -> Result<Reservation, PortError> {
        self.registrations
            .get_reservation(*id.as_uuid())
            .await
            .map_err(|e| match e {
                DatabaseError::NotFound(_) => PortError::not_found("Reservation", id),
                other => translate(other),
            })
    }

    async fn find_reservation_by_code(
        &self,
        code: &IssuedCode,
    ) -> Result<Reservation, PortError> {
        self.registrations
            .find_reservation_by_code(code.as_str())
            .await
            .map_err(|e| match e {
                DatabaseError::NotFound(_) => PortError::not_found("Reservation", code),
                other => translate(other),
            })
    }

    async fn update_reservation(&self, reservation: &Reservation) -> Result<(), PortError> {
        self.registrations
            .update_reservation(reservation)
            .await
            .map_err(|e| match e {
                DatabaseError::NotFound(_) => {
                    PortError::not_found("Reservation", reservation.id)
                }
                other => translate(other),
            })
    }
}

#[async_trait]
impl ReportStore for PgTicketingAdapter {
    async fn report_code_taken(&self, code: &str) -> Result<bool, PortError> {
        self.reports
            .report_code_exists(code)
            .await
            .map_err(translate)
    }

    async fn insert_report(&self, report: &WeeklyReport) -> Result<(), PortError> {
        self.reports.insert_report(report).await.map_err(translate)
    }

    async fn get_report(&self, id: ReportId) -> Result<WeeklyReport, PortError> {
        self.reports
            .get_report(*id.as_uuid())
            .await
            .map_err(|e| match e {
                DatabaseError::NotFound(_) => PortError::not_found("WeeklyReport", id),
                other => translate(other),
            })
    }

    async fn computations_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PaymentComputation>, PortError> {
        self.reports
            .computations_between(from, to)
            .await
            .map_err(translate)
    }
}

#[async_trait]
impl HealthCheckable for PgTicketingAdapter {
    /// Verifies database connectivity with a trivial query
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;
        match result {
            Ok(_) => HealthCheckResult {
                adapter_id: "pg_ticketing".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms,
                message: None,
                checked_at: Utc::now(),
            },
            Err(e) => HealthCheckResult {
                adapter_id: "pg_ticketing".to_string(),
                status: AdapterHealth::Unhealthy,
                latency_ms,
                message: Some(e.to_string()),
                checked_at: Utc::now(),
            },
        }
    }
}
