use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::handlers::{require_month, validation_rejection, ErrorResponse};
use crate::middleware::auth_middleware::CurrentUser;
use crate::models::transaction::{
    CreateTransactionRequest, TransactionType, TransactionView, UpdateTransactionRequest,
};
use crate::services::transaction_service::{TransactionError, TransactionService};

/// Convert TransactionError to HTTP response
impl IntoResponse for TransactionError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            TransactionError::EntryNotFound => (
                StatusCode::NOT_FOUND,
                "transaction_not_found",
                "Transaction not found",
            ),
            TransactionError::MissingBank => (
                StatusCode::BAD_REQUEST,
                "missing_bank",
                "Bank name is required when payment type is bank",
            ),
            TransactionError::DatabaseError(ref msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                msg.as_str(),
            ),
        };

        let error_response = ErrorResponse::new(error_type, message);
        (status, Json(error_response)).into_response()
    }
}

/// Query parameters for listing transactions
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTransactionsParams {
    /// Month key in `MM-YYYY` form, e.g. `12-2024`
    pub month: Option<String>,
    /// Restrict to one transaction type
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
}

/// Handler for listing one month's transactions
///
/// Returns the authenticated user's transactions for the given month, most
/// recent day first.
#[utoipa::path(
    get,
    path = "/api/transactions",
    params(ListTransactionsParams),
    responses(
        (status = 200, description = "The month's transactions", body = Vec<TransactionView>),
        (status = 400, description = "Missing or malformed month", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "transactions"
)]
pub async fn list_transactions_handler(
    State(transaction_service): State<Arc<dyn TransactionService>>,
    Extension(current_user): Extension<CurrentUser>,
    Query(params): Query<ListTransactionsParams>,
) -> Result<Json<Vec<TransactionView>>, Response> {
    let month = require_month(params.month.as_deref())?;

    match transaction_service
        .list_month(current_user.user_id, month, params.kind)
        .await
    {
        Ok(transactions) => Ok(Json(transactions)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for recording a transaction
///
/// Creates a transaction for the authenticated user, get-or-creating the
/// named category under the transaction's type.
#[utoipa::path(
    post,
    path = "/api/transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Transaction successfully recorded", body = TransactionView),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "transactions"
)]
pub async fn create_transaction_handler(
    State(transaction_service): State<Arc<dyn TransactionService>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionView>), Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_rejection(validation_errors));
    }

    match transaction_service
        .create(current_user.user_id, request)
        .await
    {
        Ok(transaction) => Ok((StatusCode::CREATED, Json(transaction))),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for updating a transaction
///
/// Applies a partial update to one of the authenticated user's transactions.
#[utoipa::path(
    patch,
    path = "/api/transactions/{id}",
    params(
        ("id" = Uuid, Path, description = "Transaction ID")
    ),
    request_body = UpdateTransactionRequest,
    responses(
        (status = 200, description = "Transaction successfully updated", body = TransactionView),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Transaction not owned by the caller", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "transactions"
)]
pub async fn update_transaction_handler(
    State(transaction_service): State<Arc<dyn TransactionService>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(transaction_id): Path<Uuid>,
    Json(request): Json<UpdateTransactionRequest>,
) -> Result<Json<TransactionView>, Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_rejection(validation_errors));
    }

    match transaction_service
        .update(current_user.user_id, transaction_id, request)
        .await
    {
        Ok(transaction) => Ok(Json(transaction)),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for deleting a transaction
///
/// Deletes one of the authenticated user's transactions.
#[utoipa::path(
    delete,
    path = "/api/transactions/{id}",
    params(
        ("id" = Uuid, Path, description = "Transaction ID")
    ),
    responses(
        (status = 204, description = "Transaction successfully deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Transaction not owned by the caller", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "transactions"
)]
pub async fn delete_transaction_handler(
    State(transaction_service): State<Arc<dyn TransactionService>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(transaction_id): Path<Uuid>,
) -> Result<StatusCode, Response> {
    match transaction_service
        .delete(current_user.user_id, transaction_id)
        .await
    {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(e.into_response()),
    }
}
