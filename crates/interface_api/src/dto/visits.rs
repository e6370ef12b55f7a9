//! Walk-in visit DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_pricing::{PaymentStatus, RevenueLine};
use domain_registration::WalkInVisit;

use super::CountEntry;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateVisitRequest {
    pub visit_date: NaiveDate,
    #[validate(length(min = 1, max = 4))]
    pub counts: Vec<CountEntry>,
    /// Cash tendered at the desk
    pub tendered: Decimal,
    #[validate(length(max = 64))]
    pub recorded_by: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RevenueLineDto {
    pub category: String,
    pub ticket_count: u32,
    pub revenue: Decimal,
}

impl From<&RevenueLine> for RevenueLineDto {
    fn from(line: &RevenueLine) -> Self {
        Self {
            category: line.category.to_string(),
            ticket_count: line.ticket_count,
            revenue: line.revenue.amount(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VisitResponse {
    pub id: Uuid,
    pub code: String,
    pub visit_date: NaiveDate,
    pub lines: Vec<RevenueLineDto>,
    pub total_visitors: u64,
    pub total_revenue: Decimal,
    pub currency: String,
    pub tendered: Decimal,
    pub change_amount: Decimal,
    pub payment_status: PaymentStatus,
    pub recorded_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<WalkInVisit> for VisitResponse {
    fn from(visit: WalkInVisit) -> Self {
        Self {
            id: *visit.id.as_uuid(),
            code: visit.code.to_string(),
            visit_date: visit.visit_date,
            lines: visit.computation.lines().iter().map(Into::into).collect(),
            total_visitors: visit.computation.total_visitors(),
            total_revenue: visit.computation.total_revenue().amount(),
            currency: visit.computation.currency().to_string(),
            tendered: visit.tendered.amount(),
            change_amount: visit.settlement.change_amount.amount(),
            payment_status: visit.settlement.status,
            recorded_by: visit.recorded_by,
            created_at: visit.created_at,
        }
    }
}
