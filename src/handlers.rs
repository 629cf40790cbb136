pub mod auth_handlers;
pub mod category_handlers;
pub mod report_handlers;
pub mod transaction_handlers;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::analytics::month_key::MonthKey;

/// Error response structure shared by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub(crate) fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

/// Flattens validator output into a single 400 response
pub(crate) fn validation_rejection(validation_errors: ValidationErrors) -> Response {
    let error_message = validation_errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages: Vec<String> = errors
                .iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .collect();
            format!("{}: {}", field, messages.join(", "))
        })
        .collect::<Vec<_>>()
        .join("; ");

    let error_response = ErrorResponse::new("validation_error", &error_message);
    (StatusCode::BAD_REQUEST, Json(error_response)).into_response()
}

/// Parses the required `month` query parameter (`MM-YYYY`), rejecting with a
/// 400 when it is missing or malformed.
pub(crate) fn require_month(month: Option<&str>) -> Result<MonthKey, Response> {
    let raw = month.ok_or_else(|| {
        let error_response =
            ErrorResponse::new("invalid_month", "month query parameter is required (MM-YYYY)");
        (StatusCode::BAD_REQUEST, Json(error_response)).into_response()
    })?;

    MonthKey::parse(raw).ok_or_else(|| {
        let error_response = ErrorResponse::new(
            "invalid_month",
            &format!("'{}' is not a valid MM-YYYY month key", raw),
        );
        (StatusCode::BAD_REQUEST, Json(error_response)).into_response()
    })
}
