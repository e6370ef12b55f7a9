//! Weekly report handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use domain_reporting::WeeklyReportRequest;

use crate::dto::reports::{CreateReportRequest, ReportResponse, SummaryQuery, SummaryResponse};
use crate::error::ApiError;
use crate::handlers::{parse_breakdown, reporting_service};
use crate::AppState;

/// Files a weekly sales report
pub async fn create_report(
    State(state): State<AppState>,
    Json(request): Json<CreateReportRequest>,
) -> Result<(StatusCode, Json<ReportResponse>), ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let breakdown = parse_breakdown(&request.counts)?;

    let report = reporting_service(&state)
        .file_weekly_report(WeeklyReportRequest {
            week_of: request.week_of,
            breakdown,
            recorded_by: request.recorded_by,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(report.into())))
}

/// Grand totals over the reports in a date window
pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<SummaryResponse>, ApiError> {
    if query.from > query.to {
        return Err(ApiError::Validation(
            "from must not be after to".to_string(),
        ));
    }

    let totals = reporting_service(&state)
        .summary(query.from, query.to)
        .await?;

    Ok(Json(SummaryResponse::from_totals(
        query.from, query.to, &totals,
    )))
}
