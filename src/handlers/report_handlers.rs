use axum::{
    extract::{Extension, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::handlers::{require_month, ErrorResponse};
use crate::middleware::auth_middleware::CurrentUser;
use crate::models::reports::{CategoryTotal, DailyPoint, MonthComparison, MonthlySummary};
use crate::services::transaction_service::TransactionService;

/// Query parameters selecting the month a report covers
#[derive(Debug, Deserialize, IntoParams)]
pub struct MonthParam {
    /// Month key in `MM-YYYY` form, e.g. `12-2024`
    pub month: Option<String>,
}

/// Handler for the month list
///
/// Returns the distinct `MM-YYYY` keys of the user's history, most recent
/// first. Drives the month selector.
#[utoipa::path(
    get,
    path = "/api/months",
    responses(
        (status = 200, description = "Distinct month keys, most recent first", body = Vec<String>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn months_handler(
    State(transaction_service): State<Arc<dyn TransactionService>>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<Vec<String>>, Response> {
    match transaction_service.months(current_user.user_id).await {
        Ok(months) => Ok(Json(months)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for the all-time summary
///
/// Income, expense and balance totals over the user's entire history.
#[utoipa::path(
    get,
    path = "/api/summary",
    responses(
        (status = 200, description = "All-time totals", body = MonthlySummary),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn summary_handler(
    State(transaction_service): State<Arc<dyn TransactionService>>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<MonthlySummary>, Response> {
    match transaction_service
        .all_time_summary(current_user.user_id)
        .await
    {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for the monthly summary
///
/// Income, expense and balance totals for one month. An unmatched month
/// yields zeros, never an error.
#[utoipa::path(
    get,
    path = "/api/reports/monthly",
    params(MonthParam),
    responses(
        (status = 200, description = "The month's totals", body = MonthlySummary),
        (status = 400, description = "Missing or malformed month", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn monthly_summary_handler(
    State(transaction_service): State<Arc<dyn TransactionService>>,
    Extension(current_user): Extension<CurrentUser>,
    Query(params): Query<MonthParam>,
) -> Result<Json<MonthlySummary>, Response> {
    let month = require_month(params.month.as_deref())?;

    match transaction_service
        .month_summary(current_user.user_id, month)
        .await
    {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for the daily chart series
///
/// Per-day income/expense sums for one month at the fixed chart cadence,
/// zero-filled for days without transactions.
#[utoipa::path(
    get,
    path = "/api/reports/daily",
    params(MonthParam),
    responses(
        (status = 200, description = "Fixed-cadence daily series", body = Vec<DailyPoint>),
        (status = 400, description = "Missing or malformed month", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn daily_report_handler(
    State(transaction_service): State<Arc<dyn TransactionService>>,
    Extension(current_user): Extension<CurrentUser>,
    Query(params): Query<MonthParam>,
) -> Result<Json<Vec<DailyPoint>>, Response> {
    let month = require_month(params.month.as_deref())?;

    match transaction_service
        .daily_report(current_user.user_id, month)
        .await
    {
        Ok(series) => Ok(Json(series)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for the category breakdown
///
/// Expense totals per category for one month, largest first. A month without
/// expenses yields an empty list.
#[utoipa::path(
    get,
    path = "/api/reports/categories",
    params(MonthParam),
    responses(
        (status = 200, description = "Expense totals per category", body = Vec<CategoryTotal>),
        (status = 400, description = "Missing or malformed month", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn category_report_handler(
    State(transaction_service): State<Arc<dyn TransactionService>>,
    Extension(current_user): Extension<CurrentUser>,
    Query(params): Query<MonthParam>,
) -> Result<Json<Vec<CategoryTotal>>, Response> {
    let month = require_month(params.month.as_deref())?;

    match transaction_service
        .category_report(current_user.user_id, month)
        .await
    {
        Ok(breakdown) => Ok(Json(breakdown)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for the cross-month comparison
///
/// Income/expense totals for the trailing months, oldest first. An empty
/// history yields a single zero-valued placeholder entry.
#[utoipa::path(
    get,
    path = "/api/reports/comparison",
    responses(
        (status = 200, description = "Trailing monthly totals", body = Vec<MonthComparison>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "reports"
)]
pub async fn comparison_handler(
    State(transaction_service): State<Arc<dyn TransactionService>>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Json<Vec<MonthComparison>>, Response> {
    match transaction_service
        .comparison_report(current_user.user_id)
        .await
    {
        Ok(comparison) => Ok(Json(comparison)),
        Err(e) => Err(e.into_response()),
    }
}
