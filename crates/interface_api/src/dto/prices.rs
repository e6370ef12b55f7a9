//! Price administration DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use infra_db::repositories::PriceRow;

#[derive(Debug, Deserialize, Validate)]
pub struct UpsertPriceRequest {
    #[validate(length(min = 1, max = 32))]
    pub category: String,
    pub amount: Decimal,
    /// ISO 4217 code; defaults to IDR
    #[validate(length(min = 3, max = 3))]
    pub currency: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PriceResponse {
    pub category: String,
    pub amount: Decimal,
    pub currency: String,
    pub updated_at: DateTime<Utc>,
}

impl From<PriceRow> for PriceResponse {
    fn from(row: PriceRow) -> Self {
        Self {
            category: row.category,
            amount: row.amount,
            currency: row.currency,
            updated_at: row.updated_at,
        }
    }
}
