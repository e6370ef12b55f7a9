//! Walk-in visit and reservation repository
//!
//! Records are stored as JSONB documents beside the denormalised columns
//! used for lookups. Both tables carry `UNIQUE` constraints on `code`; a
//! violation surfaces as `DuplicateEntry` so the caller can reissue.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use domain_registration::{Reservation, WalkInVisit};

use crate::error::DatabaseError;

/// Repository for walk-in visits and reservations
#[derive(Debug, Clone)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    /// Creates a new RegistrationRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns true if a walk-in record already holds `code`
    pub async fn visit_code_exists(&self, code: &str) -> Result<bool, DatabaseError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM walk_in_visits WHERE code = $1)",
        )
        .bind(code)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Returns true if a reservation already holds `code`
    pub async fn reservation_code_exists(&self, code: &str) -> Result<bool, DatabaseError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM reservations WHERE code = $1)",
        )
        .bind(code)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Persists a new walk-in record
    pub async fn insert_visit(&self, visit: &WalkInVisit) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO walk_in_visits (
                visit_id, code, visit_date, document,
                total_visitors, total_revenue, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(*visit.id.as_uuid())
        .bind(visit.code.as_str())
        .bind(visit.visit_date)
        .bind(serde_json::to_value(visit)?)
        .bind(visit.computation.total_visitors() as i64)
        .bind(visit.computation.total_revenue().amount())
        .bind(visit.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Loads a walk-in record by id
    pub async fn get_visit(&self, id: Uuid) -> Result<WalkInVisit, DatabaseError> {
        let document: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT document FROM walk_in_visits WHERE visit_id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let (document,) = document.ok_or_else(|| DatabaseError::not_found("WalkInVisit", id))?;
        Ok(serde_json::from_value(document)?)
    }

    /// Lists walk-in records for a visit date
    pub async fn list_visits_by_date(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<WalkInVisit>, DatabaseError> {
        let documents: Vec<(serde_json::Value,)> = sqlx::query_as(
            "SELECT document FROM walk_in_visits WHERE visit_date = $1 ORDER BY created_at",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        documents
            .into_iter()
            .map(|(doc,)| serde_json::from_value(doc).map_err(DatabaseError::from))
            .collect()
    }

    /// Persists a new reservation
    pub async fn insert_reservation(
        &self,
        reservation: &Reservation,
    ) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO reservations (
                reservation_id, code, scheduled_date, status, document,
                total_visitors, total_revenue, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(*reservation.id.as_uuid())
        .bind(reservation.code.as_str())
        .bind(reservation.scheduled_date)
        .bind(format!("{:?}", reservation.status))
        .bind(serde_json::to_value(reservation)?)
        .bind(reservation.computation.total_visitors() as i64)
        .bind(reservation.computation.total_revenue().amount())
        .bind(reservation.created_at)
        .bind(reservation.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Loads a reservation by id
    pub async fn get_reservation(&self, id: Uuid) -> Result<Reservation, DatabaseError> {
        let document: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT document FROM reservations WHERE reservation_id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let (document,) =
            document.ok_or_else(|| DatabaseError::not_found("Reservation", id))?;
        Ok(serde_json::from_value(document)?)
    }

    /// Loads a reservation by its public code
    pub async fn find_reservation_by_code(
        &self,
        code: &str,
    ) -> Result<Reservation, DatabaseError> {
        let document: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT document FROM reservations WHERE code = $1")
                .bind(code)
                .fetch_optional(&self.pool)
                .await?;

        let (document,) =
            document.ok_or_else(|| DatabaseError::not_found("Reservation", code))?;
        Ok(serde_json::from_value(document)?)
    }

    /// Lists reservations scheduled in a date range
    pub async fn list_reservations_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Reservation>, DatabaseError> {
        let documents: Vec<(serde_json::Value,)> = sqlx::query_as(
            r#"
            SELECT document FROM reservations
            WHERE scheduled_date BETWEEN $1 AND $2
            ORDER BY scheduled_date, created_at
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        documents
            .into_iter()
            .map(|(doc,)| serde_json::from_value(doc).map_err(DatabaseError::from))
            .collect()
    }

    /// Replaces the stored state of a reservation
    pub async fn update_reservation(
        &self,
        reservation: &Reservation,
    ) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE reservations
            SET status = $2, document = $3, updated_at = $4
            WHERE reservation_id = $1
            "#,
        )
        .bind(*reservation.id.as_uuid())
        .bind(format!("{:?}", reservation.status))
        .bind(serde_json::to_value(reservation)?)
        .bind(reservation.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Reservation", reservation.id));
        }
        Ok(())
    }
}
