use axum::{
    extract::FromRef,
    middleware,
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::handlers::auth_handlers::{login_handler, register_handler};
use crate::handlers::category_handlers::{create_category_handler, list_categories_handler};
use crate::handlers::report_handlers::{
    category_report_handler, comparison_handler, daily_report_handler, monthly_summary_handler,
    months_handler, summary_handler,
};
use crate::handlers::transaction_handlers::{
    create_transaction_handler, delete_transaction_handler, list_transactions_handler,
    update_transaction_handler,
};
use crate::middleware::auth_middleware::require_auth;
use crate::services::auth_service::AuthService;
use crate::services::category_service::CategoryService;
use crate::services::transaction_service::TransactionService;

/// Shared application state. Handlers extract the sub-service they need.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub category_service: Arc<dyn CategoryService>,
    pub transaction_service: Arc<dyn TransactionService>,
}

/// Assembles the full application router: public auth routes plus the
/// bearer-token-protected transaction, category and report routes.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/api/transactions",
            get(list_transactions_handler).post(create_transaction_handler),
        )
        .route(
            "/api/transactions/:id",
            patch(update_transaction_handler).delete(delete_transaction_handler),
        )
        .route(
            "/api/categories",
            get(list_categories_handler).post(create_category_handler),
        )
        .route("/api/months", get(months_handler))
        .route("/api/summary", get(summary_handler))
        .route("/api/reports/monthly", get(monthly_summary_handler))
        .route("/api/reports/daily", get(daily_report_handler))
        .route("/api/reports/categories", get(category_report_handler))
        .route("/api/reports/comparison", get(comparison_handler))
        .route_layer(middleware::from_fn_with_state(
            state.auth_service.clone(),
            require_auth,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/auth/register", post(register_handler))
        .route("/api/auth/login", post(login_handler))
        .merge(protected)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
