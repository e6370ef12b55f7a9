//! Weekly report DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_pricing::Category;
use domain_reporting::{ReportTotals, WeeklyReport};

use super::visits::RevenueLineDto;
use super::CountEntry;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateReportRequest {
    /// Any date within the reported week; normalised to its Monday
    pub week_of: NaiveDate,
    #[validate(length(min = 1, max = 4))]
    pub counts: Vec<CountEntry>,
    #[validate(length(max = 64))]
    pub recorded_by: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub id: Uuid,
    pub code: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub lines: Vec<RevenueLineDto>,
    pub total_visitors: u64,
    pub total_revenue: Decimal,
    pub currency: String,
    pub recorded_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<WeeklyReport> for ReportResponse {
    fn from(report: WeeklyReport) -> Self {
        Self {
            id: *report.id.as_uuid(),
            code: report.code.to_string(),
            week_start: report.week_start,
            week_end: report.week_end(),
            lines: report.computation.lines().iter().map(Into::into).collect(),
            total_visitors: report.computation.total_visitors(),
            total_revenue: report.computation.total_revenue().amount(),
            currency: report.computation.currency().to_string(),
            recorded_by: report.recorded_by,
            created_at: report.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct CategoryTotalsDto {
    pub category: String,
    pub ticket_count: u64,
    pub revenue: Decimal,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub currency: String,
    pub per_category: Vec<CategoryTotalsDto>,
    pub total_visitors: u64,
    pub total_revenue: Decimal,
}

impl SummaryResponse {
    /// Builds the response from aggregated totals, listing every category
    /// so zero weeks render explicitly
    pub fn from_totals(from: NaiveDate, to: NaiveDate, totals: &ReportTotals) -> Self {
        let per_category = Category::ALL
            .iter()
            .map(|&category| {
                let t = totals.for_category(category);
                CategoryTotalsDto {
                    category: category.to_string(),
                    ticket_count: t.ticket_count,
                    revenue: t.revenue.amount(),
                }
            })
            .collect();

        Self {
            from,
            to,
            currency: totals.currency().to_string(),
            per_category,
            total_visitors: totals.total_visitors(),
            total_revenue: totals.total_revenue().amount(),
        }
    }
}
