//! Request handlers
//!
//! Handlers validate input at the boundary, build the domain value objects,
//! and hand off to the domain services. Malformed counts, unknown
//! categories, and negative amounts are rejected here — validated input is
//! a precondition of the pricing engine, which itself never fails.

pub mod health;
pub mod prices;
pub mod visits;
pub mod reservations;
pub mod reports;

use rust_decimal::Decimal;
use std::str::FromStr;

use core_kernel::{Currency, Money};
use domain_pricing::{Category, VisitBreakdown};
use domain_registration::{CodeIssuer, RegistrationService};
use domain_reporting::ReportingService;

use crate::dto::CountEntry;
use crate::error::ApiError;
use crate::AppState;

/// Builds the registration service over the state's adapter
pub(crate) fn registration_service(state: &AppState) -> RegistrationService {
    RegistrationService::new(
        state.adapter.clone(),
        state.adapter.clone(),
        CodeIssuer::new(state.config.code_prefix.clone()),
    )
}

/// Builds the reporting service over the state's adapter
pub(crate) fn reporting_service(state: &AppState) -> ReportingService {
    ReportingService::new(
        state.adapter.clone(),
        state.adapter.clone(),
        CodeIssuer::new(state.config.code_prefix.clone()),
    )
}

/// Parses count lines into a breakdown, rejecting unknown and duplicate
/// categories
pub(crate) fn parse_breakdown(counts: &[CountEntry]) -> Result<VisitBreakdown, ApiError> {
    let mut pairs = Vec::with_capacity(counts.len());
    for entry in counts {
        let category = Category::from_str(&entry.category)
            .map_err(|e| ApiError::Validation(e.to_string()))?;
        pairs.push((category, entry.ticket_count));
    }
    VisitBreakdown::from_counts(pairs).map_err(|e| ApiError::Validation(e.to_string()))
}

/// Converts a client-supplied amount into rupiah, rejecting negatives
pub(crate) fn parse_amount(amount: Decimal, field: &str) -> Result<Money, ApiError> {
    if amount.is_sign_negative() {
        return Err(ApiError::Validation(format!("{field} must not be negative")));
    }
    Ok(Money::new(amount, Currency::IDR))
}
