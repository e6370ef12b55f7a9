//! HTTP API Layer
//!
//! This crate provides the REST API for the ticketing system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers per domain area
//! - **Middleware**: Authentication, audit logging, tracing
//! - **DTOs**: Request/Response data transfer objects with validation
//! - **Error Handling**: Consistent error responses; transient issuance
//!   failures surface as retriable statuses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(pool, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod auth;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use infra_db::PgTicketingAdapter;

use crate::config::ApiConfig;
use crate::handlers::{health, prices, reports, reservations, visits};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub adapter: Arc<PgTicketingAdapter>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(pool: PgPool, config: ApiConfig) -> Router {
    let state = AppState {
        adapter: Arc::new(PgTicketingAdapter::new(pool.clone())),
        pool,
        config,
    };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Price administration routes
    let price_routes = Router::new()
        .route("/", get(prices::list_prices))
        .route("/", put(prices::upsert_price));

    // Walk-in visit routes
    let visit_routes = Router::new()
        .route("/", post(visits::create_visit))
        .route("/", get(visits::list_visits))
        .route("/:id", get(visits::get_visit));

    // Reservation routes
    let reservation_routes = Router::new()
        .route("/", post(reservations::create_reservation))
        .route("/", get(reservations::list_reservations))
        .route("/:id", get(reservations::get_reservation))
        .route("/:id/payments", post(reservations::record_payment))
        .route("/:id/confirm", post(reservations::confirm_reservation))
        .route("/:id/cancel", post(reservations::cancel_reservation));

    // Weekly report routes
    let report_routes = Router::new()
        .route("/", post(reports::create_report))
        .route("/summary", get(reports::summary));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/prices", price_routes)
        .nest("/visits", visit_routes)
        .nest("/reservations", reservation_routes)
        .nest("/reports", report_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            audit_middleware,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
