use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use validator::Validate;

use crate::handlers::{validation_rejection, ErrorResponse};
use crate::middleware::auth_middleware::CurrentUser;
use crate::models::category::{Category, CreateCategoryRequest};
use crate::models::transaction::TransactionType;
use crate::services::category_service::{CategoryError, CategoryService};

/// Convert CategoryError to HTTP response
impl IntoResponse for CategoryError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            CategoryError::CategoryNotFound => (
                StatusCode::NOT_FOUND,
                "category_not_found",
                "Category not found",
            ),
            CategoryError::DatabaseError(ref msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                msg.as_str(),
            ),
        };

        let error_response = ErrorResponse::new(error_type, message);
        (status, Json(error_response)).into_response()
    }
}

/// Query parameters for listing categories
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListCategoriesParams {
    /// Restrict to categories of one transaction type
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
}

/// Handler for listing category names
///
/// Returns the authenticated user's category names, ascending by name.
#[utoipa::path(
    get,
    path = "/api/categories",
    params(ListCategoriesParams),
    responses(
        (status = 200, description = "Category names", body = Vec<String>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "categories"
)]
pub async fn list_categories_handler(
    State(category_service): State<Arc<dyn CategoryService>>,
    Extension(current_user): Extension<CurrentUser>,
    Query(params): Query<ListCategoriesParams>,
) -> Result<Json<Vec<String>>, Response> {
    match category_service
        .get_categories(current_user.user_id, params.kind)
        .await
    {
        Ok(categories) => Ok(Json(
            categories.into_iter().map(|c| c.name).collect::<Vec<_>>(),
        )),
        Err(e) => Err(e.into_response()),
    }
}

/// Handler for creating a category
///
/// Get-or-creates a category for the authenticated user; posting an existing
/// `(name, type)` pair returns the existing category.
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created or already present", body = Category),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "categories"
)]
pub async fn create_category_handler(
    State(category_service): State<Arc<dyn CategoryService>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), Response> {
    if let Err(validation_errors) = request.validate() {
        return Err(validation_rejection(validation_errors));
    }

    match category_service
        .get_or_create(current_user.user_id, &request.name, request.kind)
        .await
    {
        Ok(category) => Ok((StatusCode::CREATED, Json(category))),
        Err(e) => Err(e.into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    use crate::services::category_service::tests::MockCategoryRepository;
    use crate::services::category_service::CategoryServiceImpl;

    fn category_service() -> Arc<dyn CategoryService> {
        Arc::new(CategoryServiceImpl::new(Arc::new(
            MockCategoryRepository::new(),
        )))
    }

    fn current_user() -> CurrentUser {
        CurrentUser {
            user_id: Uuid::new_v4(),
        }
    }

    #[tokio::test]
    async fn create_then_list_returns_the_name() {
        let service = category_service();
        let user = current_user();

        let (status, Json(category)) = create_category_handler(
            State(service.clone()),
            Extension(user.clone()),
            Json(CreateCategoryRequest {
                name: "Alimentación".to_string(),
                kind: TransactionType::Expense,
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(category.name, "Alimentación");

        let Json(names) = list_categories_handler(
            State(service),
            Extension(user),
            Query(ListCategoriesParams {
                kind: Some(TransactionType::Expense),
            }),
        )
        .await
        .unwrap();
        assert_eq!(names, ["Alimentación"]);
    }

    #[tokio::test]
    async fn creating_twice_returns_the_same_category() {
        let service = category_service();
        let user = current_user();

        let request = CreateCategoryRequest {
            name: "Vivienda".to_string(),
            kind: TransactionType::Expense,
        };

        let (_, Json(first)) = create_category_handler(
            State(service.clone()),
            Extension(user.clone()),
            Json(request.clone()),
        )
        .await
        .unwrap();
        let (_, Json(second)) =
            create_category_handler(State(service), Extension(user), Json(request))
                .await
                .unwrap();

        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn empty_names_are_rejected() {
        let result = create_category_handler(
            State(category_service()),
            Extension(current_user()),
            Json(CreateCategoryRequest {
                name: "".to_string(),
                kind: TransactionType::Income,
            }),
        )
        .await;

        let response = result.err().unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn listing_without_filter_spans_both_kinds() {
        let service = category_service();
        let user = current_user();

        for (name, kind) in [
            ("Salario", TransactionType::Income),
            ("Alimentación", TransactionType::Expense),
        ] {
            create_category_handler(
                State(service.clone()),
                Extension(user.clone()),
                Json(CreateCategoryRequest {
                    name: name.to_string(),
                    kind,
                }),
            )
            .await
            .unwrap();
        }

        let Json(names) = list_categories_handler(
            State(service),
            Extension(user),
            Query(ListCategoriesParams { kind: None }),
        )
        .await
        .unwrap();

        assert_eq!(names, ["Alimentación", "Salario"]);
    }
}
