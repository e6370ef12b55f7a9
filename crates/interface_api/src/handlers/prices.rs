//! Price administration handlers

use axum::{extract::State, http::StatusCode, Json};
use std::str::FromStr;
use validator::Validate;

use core_kernel::Currency;
use domain_pricing::Category;

use crate::dto::prices::{PriceResponse, UpsertPriceRequest};
use crate::error::ApiError;
use crate::AppState;

/// Lists the configured ticket prices
pub async fn list_prices(
    State(state): State<AppState>,
) -> Result<Json<Vec<PriceResponse>>, ApiError> {
    let rows = state.adapter.prices().get_all().await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Inserts or replaces the price for one category
pub async fn upsert_price(
    State(state): State<AppState>,
    Json(request): Json<UpsertPriceRequest>,
) -> Result<StatusCode, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let category = Category::from_str(&request.category)
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    if request.amount.is_sign_negative() {
        return Err(ApiError::Validation("amount must not be negative".to_string()));
    }
    let currency = match &request.currency {
        Some(code) => {
            Currency::from_str(code).map_err(|e| ApiError::Validation(e.to_string()))?
        }
        None => Currency::IDR,
    };

    state
        .adapter
        .prices()
        .upsert(category.name(), request.amount, currency.code())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
