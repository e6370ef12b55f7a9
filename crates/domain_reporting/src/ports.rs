//! Reporting domain ports

use async_trait::async_trait;
use chrono::NaiveDate;

use core_kernel::{DomainPort, PortError, ReportId};
use domain_pricing::PaymentComputation;
use domain_registration::CodeRegistry;

use crate::weekly::WeeklyReport;

/// Persistence operations for weekly reports
///
/// Report codes form their own collection; `insert_report` reports a
/// uniqueness violation as [`PortError::Conflict`].
#[async_trait]
pub trait ReportStore: DomainPort {
    /// Returns true if a report already holds `code`
    async fn report_code_taken(&self, code: &str) -> Result<bool, PortError>;

    /// Persists a new weekly report
    async fn insert_report(&self, report: &WeeklyReport) -> Result<(), PortError>;

    /// Loads a report by id
    async fn get_report(&self, id: ReportId) -> Result<WeeklyReport, PortError>;

    /// Loads the computations of all reports whose week starts in
    /// `[from, to]`, for period summaries
    async fn computations_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PaymentComputation>, PortError>;
}

/// Scopes a store's report collection as a [`CodeRegistry`]
pub struct ReportCodes<'a>(pub &'a dyn ReportStore);

#[async_trait]
impl CodeRegistry for ReportCodes<'_> {
    async fn is_taken(&self, code: &str) -> Result<bool, PortError> {
        self.0.report_code_taken(code).await
    }
}
