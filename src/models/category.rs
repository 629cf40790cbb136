use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::transaction::TransactionType;

/// Category entity classifying a transaction. Names are free text and unique
/// per `(user, name, kind)`, so the same name may exist independently under
/// income and expense.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub created_at: DateTime<Utc>,
}

/// Request payload for explicitly creating a category.
///
/// Creation is get-or-create: posting an existing `(name, type)` pair returns
/// the existing row instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "name": "Alimentación",
    "type": "expense"
}))]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Category name must not be empty"))]
    pub name: String,

    #[serde(rename = "type")]
    pub kind: TransactionType,
}
