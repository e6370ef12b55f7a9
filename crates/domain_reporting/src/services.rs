//! Reporting domain services

use chrono::NaiveDate;
use std::sync::Arc;

use domain_pricing::{PriceSource, PricingEngine, VisitBreakdown};
use domain_registration::CodeIssuer;

use crate::error::ReportingError;
use crate::ports::{ReportCodes, ReportStore};
use crate::totals::ReportTotals;
use crate::weekly::WeeklyReport;

/// Issuance rounds allowed when persistence keeps reporting code conflicts
const CONFLICT_ROUNDS: u32 = 3;

/// Request to file a weekly sales report
#[derive(Debug, Clone)]
pub struct WeeklyReportRequest {
    /// Any date within the reported week
    pub week_of: NaiveDate,
    pub breakdown: VisitBreakdown,
    pub recorded_by: Option<String>,
}

/// Service for filing weekly reports and producing period summaries
pub struct ReportingService {
    prices: Arc<dyn PriceSource>,
    store: Arc<dyn ReportStore>,
    issuer: CodeIssuer,
}

impl ReportingService {
    /// Creates a new service over the given ports
    pub fn new(
        prices: Arc<dyn PriceSource>,
        store: Arc<dyn ReportStore>,
        issuer: CodeIssuer,
    ) -> Self {
        Self {
            prices,
            store,
            issuer,
        }
    }

    /// Files a weekly sales report
    ///
    /// Follows the same flow as record registration: prices, computation,
    /// code issuance, persist, with a storage conflict re-entering
    /// issuance.
    pub async fn file_weekly_report(
        &self,
        request: WeeklyReportRequest,
    ) -> Result<WeeklyReport, ReportingError> {
        let prices = self.prices.price_list().await?;
        let computation = PricingEngine::compute_breakdown(&request.breakdown, &prices);

        let mut rounds = 0;
        loop {
            let code = self.issuer.issue(&ReportCodes(self.store.as_ref())).await?;
            let mut report = WeeklyReport::new(
                code,
                request.week_of,
                request.breakdown.clone(),
                computation.clone(),
            );
            if let Some(staff) = &request.recorded_by {
                report = report.with_recorded_by(staff.clone());
            }

            match self.store.insert_report(&report).await {
                Ok(()) => {
                    tracing::info!(
                        code = %report.code,
                        week_start = %report.week_start,
                        revenue = %report.computation.total_revenue(),
                        "weekly report filed"
                    );
                    return Ok(report);
                }
                Err(e) if e.is_conflict() => {
                    rounds += 1;
                    if rounds >= CONFLICT_ROUNDS {
                        tracing::error!(
                            rounds,
                            "giving up after repeated report code conflicts"
                        );
                        return Err(ReportingError::ConflictExhausted { rounds });
                    }
                    tracing::warn!(round = rounds, "report code conflicted, reissuing");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Grand totals over all reports whose week starts in `[from, to]`
    ///
    /// Aggregation is elementwise and order-independent; the result does
    /// not depend on how storage orders the rows.
    pub async fn summary(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<ReportTotals, ReportingError> {
        let prices = self.prices.price_list().await?;
        let computations = self.store.computations_between(from, to).await?;
        Ok(ReportTotals::from_computations(
            prices.currency(),
            computations.iter(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use core_kernel::{Currency, DomainPort, Money, PortError, ReportId};
    use domain_pricing::{Category, PaymentComputation, PriceList};
    use domain_registration::SeededRandom;
    use std::sync::Mutex;

    fn idr(amount: i64) -> Money {
        Money::from_minor(amount, Currency::IDR)
    }

    struct FixedPrices;

    impl DomainPort for FixedPrices {}

    #[async_trait]
    impl PriceSource for FixedPrices {
        async fn price_list(&self) -> Result<PriceList, PortError> {
            Ok(PriceList::new(Currency::IDR)
                .with_price(Category::Student, idr(3000))
                .unwrap()
                .with_price(Category::Public, idr(5000))
                .unwrap())
        }
    }

    #[derive(Default)]
    struct MemoryReports {
        reports: Mutex<Vec<WeeklyReport>>,
    }

    impl DomainPort for MemoryReports {}

    #[async_trait]
    impl ReportStore for MemoryReports {
        async fn report_code_taken(&self, code: &str) -> Result<bool, PortError> {
            Ok(self
                .reports
                .lock()
                .unwrap()
                .iter()
                .any(|r| r.code.as_str() == code))
        }

        async fn insert_report(&self, report: &WeeklyReport) -> Result<(), PortError> {
            self.reports.lock().unwrap().push(report.clone());
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

    fn service(store: Arc<MemoryReports>) -> ReportingService {
        ReportingService::new(
            Arc::new(FixedPrices),
            store,
            CodeIssuer::new("MSM-").with_random_source(SeededRandom::new(17)),
        )
    }

    #[tokio::test]
    async fn test_file_report_and_summarise() {
        let store = Arc::new(MemoryReports::default());
        let svc = service(store.clone());

        // two weeks of reports
        svc.file_weekly_report(WeeklyReportRequest {
            week_of: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            breakdown: VisitBreakdown::from_counts([
                (Category::Student, 100),
                (Category::Public, 50),
            ])
            .unwrap(),
            recorded_by: Some("budi".to_string()),
        })
        .await
        .unwrap();

        svc.file_weekly_report(WeeklyReportRequest {
            week_of: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            breakdown: VisitBreakdown::from_counts([(Category::Student, 80)]).unwrap(),
            recorded_by: None,
        })
        .await
        .unwrap();

        let totals = svc
            .summary(
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(totals.total_visitors(), 230);
        assert_eq!(totals.for_category(Category::Student).ticket_count, 180);
        // 180 * 3000 + 50 * 5000
        assert_eq!(
            totals.total_revenue(),
            idr(790000)
        );
    }

    #[tokio::test]
    async fn test_summary_window_excludes_other_weeks() {
        let store = Arc::new(MemoryReports::default());
        let svc = service(store.clone());

        svc.file_weekly_report(WeeklyReportRequest {
            week_of: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
            breakdown: VisitBreakdown::from_counts([(Category::Public, 10)]).unwrap(),
            recorded_by: None,
        })
        .await
        .unwrap();

        let totals = svc
            .summary(
                NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(totals.total_visitors(), 0);
        assert!(totals.total_revenue().is_zero());
    }
}
