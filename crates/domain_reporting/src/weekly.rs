//! Weekly sales report records

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{IssuedCode, ReportId};
use domain_pricing::{PaymentComputation, VisitBreakdown};

/// Returns the Monday of the week containing `date`
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// A weekly sales report
///
/// Staff submit per-category counts for a week; the attached computation
/// carries the derived revenues. Reports are records in their own right and
/// carry an issued code, scoped to the report collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Unique identifier
    pub id: ReportId,
    /// Public-facing record code
    pub code: IssuedCode,
    /// Monday of the reported week
    pub week_start: NaiveDate,
    /// Per-category ticket counts for the week
    pub breakdown: VisitBreakdown,
    /// Derived revenues and totals
    pub computation: PaymentComputation,
    /// Staff member who filed the report
    pub recorded_by: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl WeeklyReport {
    /// Creates a report for the week containing `week_of`
    ///
    /// Any date within the week normalises to its Monday.
    pub fn new(
        code: IssuedCode,
        week_of: NaiveDate,
        breakdown: VisitBreakdown,
        computation: PaymentComputation,
    ) -> Self {
        Self {
            id: ReportId::new_v7(),
            code,
            week_start: week_start_of(week_of),
            breakdown,
            computation,
            recorded_by: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the filing staff member
    pub fn with_recorded_by(mut self, staff: impl Into<String>) -> Self {
        self.recorded_by = Some(staff.into());
        self
    }

    /// Sunday of the reported week
    pub fn week_end(&self) -> NaiveDate {
        self.week_start + Duration::days(6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{Currency, Money};
    use domain_pricing::{Category, PriceList, PricingEngine};

    #[test]
    fn test_week_start_of_normalises_to_monday() {
        // 2024-03-14 is a Thursday
        let thursday = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        let monday = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert_eq!(week_start_of(thursday), monday);
        assert_eq!(week_start_of(monday), monday);

        // Sunday belongs to the week that started the previous Monday
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        assert_eq!(week_start_of(sunday), monday);
    }

    #[test]
    fn test_report_normalises_and_spans_week() {
        let prices = PriceList::new(Currency::IDR)
            .with_price(Category::Public, Money::from_minor(5000, Currency::IDR))
            .unwrap();
        let breakdown = VisitBreakdown::from_counts([(Category::Public, 120)]).unwrap();
        let computation = PricingEngine::compute_breakdown(&breakdown, &prices);

        let report = WeeklyReport::new(
            IssuedCode::from_parts("MSM-", "DDDDDD"),
            NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            breakdown,
            computation,
        )
        .with_recorded_by("budi");

        assert_eq!(
            report.week_start,
            NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
        );
        assert_eq!(
            report.week_end(),
            NaiveDate::from_ymd_opt(2024, 3, 17).unwrap()
        );
        assert_eq!(report.recorded_by.as_deref(), Some("budi"));
        assert_eq!(report.computation.total_visitors(), 120);
    }
}
