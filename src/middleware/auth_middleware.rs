use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::services::auth_service::AuthService;

/// The authenticated owner of the request, injected into request extensions.
/// Every handler and service call downstream is scoped by this explicit
/// user id; nothing reads identity from ambient state.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub user_id: Uuid,
}

/// Middleware validating the bearer token and resolving the current owner
pub async fn require_auth(
    State(auth_service): State<Arc<dyn AuthService>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthRejection> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthRejection::MissingToken)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthRejection::InvalidTokenFormat)?;

    let user_id = auth_service
        .validate_token(token)
        .await
        .map_err(|e| match e {
            crate::services::auth_service::AuthError::TokenExpired => AuthRejection::TokenExpired,
            _ => AuthRejection::InvalidToken,
        })?;

    request.extensions_mut().insert(CurrentUser { user_id });

    Ok(next.run(request).await)
}

/// Auth middleware rejections
#[derive(Debug)]
pub enum AuthRejection {
    MissingToken,
    InvalidTokenFormat,
    InvalidToken,
    TokenExpired,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let message = match self {
            AuthRejection::MissingToken => "Missing authorization token",
            AuthRejection::InvalidTokenFormat => {
                "Invalid authorization header format. Expected: Bearer <token>"
            }
            AuthRejection::InvalidToken => "Invalid or malformed token",
            AuthRejection::TokenExpired => "Token has expired",
        };

        let body = Json(json!({
            "error": message,
        }));

        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
