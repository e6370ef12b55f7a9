//! Weekly report repository

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use domain_pricing::PaymentComputation;
use domain_reporting::WeeklyReport;

use crate::error::DatabaseError;

/// Repository for weekly sales reports
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Creates a new ReportRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns true if a report already holds `code`
    pub async fn report_code_exists(&self, code: &str) -> Result<bool, DatabaseError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM weekly_reports WHERE code = $1)",
        )
        .bind(code)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Persists a new weekly report
    pub async fn insert_report(&self, report: &WeeklyReport) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            INSERT INTO weekly_reports (
                report_id, code, week_start, document,
                total_visitors, total_revenue, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(*report.id.as_uuid())
        .bind(report.code.as_str())
        .bind(report.week_start)
        .bind(serde_json::to_value(report)?)
        .bind(report.computation.total_visitors() as i64)
        .bind(report.computation.total_revenue().amount())
        .bind(report.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Loads a report by id
    pub async fn get_report(&self, id: Uuid) -> Result<WeeklyReport, DatabaseError> {
        let document: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT document FROM weekly_reports WHERE report_id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let (document,) =
            document.ok_or_else(|| DatabaseError::not_found("WeeklyReport", id))?;
        Ok(serde_json::from_value(document)?)
    }

    /// Loads the computations of all reports whose week starts in `[from, to]`
    pub async fn computations_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PaymentComputation>, DatabaseError> {
        let documents: Vec<(serde_json::Value,)> = sqlx::query_as(
            r#"
            SELECT document -> 'computation' FROM weekly_reports
            WHERE week_start BETWEEN $1 AND $2
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
}
