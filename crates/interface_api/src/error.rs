//! API error handling
//!
//! Maps domain and persistence errors onto HTTP responses. The one rule
//! that matters: transient conditions (code exhaustion, issuance conflict
//! rounds) surface as retriable statuses with a "please try again" message,
//! never as permanent failures — and no partial record is ever visible.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use core_kernel::PortError;
use domain_registration::{CodeError, RegistrationError};
use domain_reporting::ReportingError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Temporarily unavailable: {0}")]
    Retriable(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Unauthorized".to_string(),
            ),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Retriable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "retry",
                "Could not complete registration, please retry".to_string(),
            ),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg.clone())
            }
            ApiError::Database(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "database_error", msg.clone())
            }
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg.clone())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match &err {
            PortError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            PortError::Validation { .. } => ApiError::Validation(err.to_string()),
            PortError::Conflict { .. } => ApiError::Conflict(err.to_string()),
            PortError::Connection { .. } => ApiError::Retriable(err.to_string()),
            PortError::Internal { .. } => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::Code(CodeError::Exhausted { .. })
            | RegistrationError::ConflictExhausted { .. } => {
                ApiError::Retriable(err.to_string())
            }
            RegistrationError::Code(CodeError::Registry(e)) => e.into(),
            RegistrationError::CurrencyMismatch { .. } => ApiError::BadRequest(err.to_string()),
            RegistrationError::InvalidStateTransition { .. } => {
                ApiError::Conflict(err.to_string())
            }
            RegistrationError::Port(e) => e.into(),
        }
    }
}

impl From<ReportingError> for ApiError {
    fn from(err: ReportingError) -> Self {
        match err {
            ReportingError::Code(CodeError::Exhausted { .. })
            | ReportingError::ConflictExhausted { .. } => ApiError::Retriable(err.to_string()),
            ReportingError::Code(CodeError::Registry(e)) => e.into(),
            ReportingError::Port(e) => e.into(),
        }
    }
}

impl From<infra_db::DatabaseError> for ApiError {
    fn from(err: infra_db::DatabaseError) -> Self {
        match &err {
            infra_db::DatabaseError::NotFound(_) => ApiError::NotFound(err.to_string()),
            infra_db::DatabaseError::DuplicateEntry(_) => ApiError::Conflict(err.to_string()),
            _ => ApiError::Database(err.to_string()),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Database(err.to_string())
    }
}
