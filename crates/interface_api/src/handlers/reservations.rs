//! Reservation handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use core_kernel::ReservationId;
use domain_registration::{RegistrationStore, ReservationKind, ReservationRequest};

use crate::dto::reservations::{
    CancelReservationRequest, CreateReservationRequest, RecordPaymentRequest,
    ReservationResponse,
};
use crate::error::ApiError;
use crate::handlers::{parse_amount, parse_breakdown, registration_service};
use crate::AppState;

fn parse_kind(kind: &str) -> Result<ReservationKind, ApiError> {
    match kind.to_ascii_lowercase().as_str() {
        "group" => Ok(ReservationKind::Group),
        "custom" => Ok(ReservationKind::Custom),
        other => Err(ApiError::Validation(format!(
            "unknown reservation kind: {other}"
        ))),
    }
}

/// Creates a group or custom reservation
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(request): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ReservationResponse>), ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let kind = parse_kind(&request.kind)?;
    let breakdown = parse_breakdown(&request.counts)?;
    let down_payment = parse_amount(request.down_payment, "down_payment")?;

    let reservation = registration_service(&state)
        .create_reservation(ReservationRequest {
            kind,
            group_name: request.group_name,
            contact_phone: request.contact_phone,
            scheduled_date: request.scheduled_date,
            breakdown,
            down_payment,
            notes: request.notes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(reservation.into())))
}

#[derive(Debug, Deserialize)]
pub struct ReservationListQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Lists reservations scheduled in a date range
pub async fn list_reservations(
    State(state): State<AppState>,
    Query(query): Query<ReservationListQuery>,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let reservations = state
        .adapter
        .registrations()
        .list_reservations_between(query.from, query.to)
        .await?;
    Ok(Json(reservations.into_iter().map(Into::into).collect()))
}

/// Gets a reservation by ID
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let reservation = state
        .adapter
        .get_reservation(ReservationId::from(id))
        .await?;
    Ok(Json(reservation.into()))
}

/// Records an additional down payment
pub async fn record_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<RecordPaymentRequest>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let amount = parse_amount(request.amount, "amount")?;
    let reservation = registration_service(&state)
        .record_reservation_payment(ReservationId::from(id), amount)
        .await?;
    Ok(Json(reservation.into()))
}

/// Confirms a pending reservation
pub async fn confirm_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReservationResponse>, ApiError> {
    let reservation = registration_service(&state)
        .confirm_reservation(ReservationId::from(id))
        .await?;
    Ok(Json(reservation.into()))
}

/// Cancels a reservation
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CancelReservationRequest>,
) -> Result<Json<ReservationResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let reservation = registration_service(&state)
        .cancel_reservation(ReservationId::from(id), &request.reason)
        .await?;
    Ok(Json(reservation.into()))
}
