//! Walk-in visit handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use core_kernel::VisitId;
use domain_registration::{RegistrationStore, WalkInRequest};

use crate::dto::visits::{CreateVisitRequest, VisitResponse};
use crate::error::ApiError;
use crate::handlers::{parse_amount, parse_breakdown, registration_service};
use crate::AppState;

/// Records a walk-in visit
pub async fn create_visit(
    State(state): State<AppState>,
    Json(request): Json<CreateVisitRequest>,
) -> Result<(StatusCode, Json<VisitResponse>), ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let breakdown = parse_breakdown(&request.counts)?;
    let tendered = parse_amount(request.tendered, "tendered")?;

    let visit = registration_service(&state)
        .register_walk_in(WalkInRequest {
            visit_date: request.visit_date,
            breakdown,
            tendered,
            recorded_by: request.recorded_by,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(visit.into())))
}

#[derive(Debug, Deserialize)]
pub struct VisitListQuery {
    pub date: NaiveDate,
}

/// Lists walk-in visits for a date
pub async fn list_visits(
    State(state): State<AppState>,
    Query(query): Query<VisitListQuery>,
) -> Result<Json<Vec<VisitResponse>>, ApiError> {
    let visits = state
        .adapter
        .registrations()
        .list_visits_by_date(query.date)
        .await?;
    Ok(Json(visits.into_iter().map(Into::into).collect()))
}

/// Gets a walk-in visit by ID
pub async fn get_visit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VisitResponse>, ApiError> {
    let visit = state.adapter.get_visit(VisitId::from(id)).await?;
    Ok(Json(visit.into()))
}
