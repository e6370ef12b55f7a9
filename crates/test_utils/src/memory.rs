//! In-memory port implementations
//!
//! A single mock adapter backing all three domains, mirroring the shape of
//! the PostgreSQL adapter so service-level tests run without a database.
//! Uniqueness is enforced on insert the way the storage constraint would,
//! reporting `PortError::Conflict` on a duplicate code.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;

use core_kernel::{DomainPort, IssuedCode, PortError, ReportId, ReservationId, VisitId};
use domain_pricing::{PaymentComputation, PriceList, PriceSource};
use domain_registration::{RegistrationStore, Reservation, WalkInVisit};
use domain_reporting::{ReportStore, WeeklyReport};

use crate::fixtures::PriceFixtures;

/// In-memory ticketing adapter for tests
///
/// Implements `PriceSource`, `RegistrationStore`, and `ReportStore` over
/// plain vectors behind mutexes.
pub struct MemoryTicketingAdapter {
    prices: Mutex<PriceList>,
    visits: Mutex<Vec<WalkInVisit>>,
    reservations: Mutex<Vec<Reservation>>,
    reports: Mutex<Vec<WeeklyReport>>,
}

impl Default for MemoryTicketingAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTicketingAdapter {
    /// Creates an adapter with the standard price list
    pub fn new() -> Self {
        Self::with_prices(PriceFixtures::standard())
    }

    /// Creates an adapter with a specific price list
    pub fn with_prices(prices: PriceList) -> Self {
        Self {
            prices: Mutex::new(prices),
            visits: Mutex::new(Vec::new()),
            reservations: Mutex::new(Vec::new()),
            reports: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the active price list
    pub fn set_prices(&self, prices: PriceList) {
        *self.prices.lock().unwrap() = prices;
    }

    /// Returns a copy of the stored visits
    pub fn visits(&self) -> Vec<WalkInVisit> {
        self.visits.lock().unwrap().clone()
    }

    /// Returns a copy of the stored reservations
    pub fn reservations(&self) -> Vec<Reservation> {
        self.reservations.lock().unwrap().clone()
    }

    /// Returns a copy of the stored reports
    pub fn reports(&self) -> Vec<WeeklyReport> {
        self.reports.lock().unwrap().clone()
    }
}

impl DomainPort for MemoryTicketingAdapter {}

#[async_trait]
impl PriceSource for MemoryTicketingAdapter {
    async fn price_list(&self) -> Result<PriceList, PortError> {
        Ok(self.prices.lock().unwrap().clone())
    }
}

#[async_trait]
impl RegistrationStore for MemoryTicketingAdapter {
    async fn visit_code_taken(&self, code: &str) -> Result<bool, PortError> {
        Ok(self
            .visits
            .lock()
            .unwrap()
            .iter()
            .any(|v| v.code.as_str() == code))
    }

    async fn reservation_code_taken(&self, code: &str) -> Result<bool, PortError> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.code.as_str() == code))
    }

    async fn insert_visit(&self, visit: &WalkInVisit) -> Result<(), PortError> {
        let mut visits = self.visits.lock().unwrap();
        if visits.iter().any(|v| v.code == visit.code) {
            return Err(PortError::conflict(format!(
                "duplicate code {}",
                visit.code
            )));
        }
        visits.push(visit.clone());
        Ok(())
    }

    async fn insert_reservation(&self, reservation: &Reservation) -> Result<(), PortError> {
        let mut reservations = self.reservations.lock().unwrap();
        if reservations.iter().any(|r| r.code == reservation.code) {
            return Err(PortError::conflict(format!(
                "duplicate code {}",
                reservation.code
            )));
        }
        reservations.push(reservation.clone());
        Ok(())
    }

    async fn get_visit(&self, id: VisitId) -> Result<WalkInVisit, PortError> {
        self.visits
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("WalkInVisit", id))
    }

    async fn get_reservation(&self, id: ReservationId) -> Result<Reservation, PortError> {
        self.reservations
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("Reservation", id))
    }

    async fn find_reservation_by_code(
        &self,
        code: &IssuedCode,
    ) -> Result<Reservation, PortError> {
        self.reservations
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.code == *code)
            .cloned()
            .ok_or_else(|| PortError::not_found("Reservation", code))
    }

    async fn update_reservation(&self, reservation: &Reservation) -> Result<(), PortError> {
        let mut reservations = self.reservations.lock().unwrap();
        let slot = reservations
            .iter_mut()
            .find(|r| r.id == reservation.id)
            .ok_or_else(|| PortError::not_found("Reservation", reservation.id))?;
        *slot = reservation.clone();
        Ok(())
    }
}

#[async_trait]
impl ReportStore for MemoryTicketingAdapter {
    async fn report_code_taken(&self, code: &str) -> Result<bool, PortError> {
        Ok(self
            .reports
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.code.as_str() == code))
    }

    async fn insert_report(&self, report: &WeeklyReport) -> Result<(), PortError> {
        let mut reports = self.reports.lock().unwrap();
        if reports.iter().any(|r| r.code == report.code) {
            return Err(PortError::conflict(format!(
                "duplicate code {}",
                report.code
            )));
        }
        reports.push(report.clone());
        Ok(())
    }

    async fn get_report(&self, id: ReportId) -> Result<WeeklyReport, PortError> {
        self.reports
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| PortError::not_found("WeeklyReport", id))
    }

    async fn computations_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PaymentComputation>, PortError> {
        Ok(self
            .reports
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.week_start >= from && r.week_start <= to)
            .map(|r| r.computation.clone())
            .collect())
    }
}
