use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::{validate_non_negative_amount, validate_payment_fields};

/// Direction of a transaction. The stored amount is always a non-negative
/// magnitude; the sign is implied by this kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash, Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// How a transaction was paid. `Bank` carries the bank name on the
/// transaction itself; `Cash` must not.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Cash,
    Bank,
}

impl Default for PaymentType {
    fn default() -> Self {
        PaymentType::Cash
    }
}

/// Transaction entity as persisted. Dates are stored at day precision in ISO
/// form; edits replace the row wholesale (last write wins).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category_id: Uuid,
    pub payment_type: PaymentType,
    pub bank: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A transaction row joined with its category name. The join can come back
/// without a matching category row; the adapter normalizes that to a single
/// display name before anything downstream sees it.
#[derive(Debug, Clone, FromRow)]
pub struct TransactionWithCategory {
    #[sqlx(flatten)]
    pub transaction: Transaction,
    pub category_name: Option<String>,
}

/// Transaction as served to clients and consumed by the reporting engine:
/// the date is rewritten to `DD/MM/YYYY` display form and the category is a
/// bare name.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": "550e8400-e29b-41d4-a716-446655440000",
    "date": "02/12/2024",
    "description": "Supermercado",
    "amount": 280.0,
    "type": "expense",
    "category": "Alimentación",
    "payment_type": "cash",
    "bank": null
}))]
pub struct TransactionView {
    pub id: Uuid,
    pub date: String,
    pub description: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub payment_type: PaymentType,
    pub bank: Option<String>,
}

/// Request payload for recording a transaction
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_payment_fields"))]
#[schema(example = json!({
    "date": "2024-12-02",
    "description": "Supermercado",
    "amount": 280.0,
    "type": "expense",
    "category": "Alimentación",
    "payment_type": "cash"
}))]
pub struct CreateTransactionRequest {
    #[schema(format = "date", example = "2024-12-02")]
    pub date: NaiveDate,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,

    #[validate(custom(function = "validate_non_negative_amount"))]
    #[schema(value_type = f64, minimum = 0.0, example = 280.0)]
    pub amount: Decimal,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: String,

    #[schema(default = "cash")]
    pub payment_type: Option<PaymentType>,

    pub bank: Option<String>,
}

/// Request payload for partially updating a transaction. A new category
/// name is resolved under the effective type, since the same name may exist
/// under either kind.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[schema(example = json!({
    "amount": 300.0,
    "category": "Alimentación",
    "type": "expense"
}))]
pub struct UpdateTransactionRequest {
    #[schema(format = "date", example = "2024-12-03")]
    pub date: Option<NaiveDate>,

    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_non_negative_amount"))]
    #[schema(value_type = f64, minimum = 0.0)]
    pub amount: Option<Decimal>,

    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,

    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: Option<String>,

    pub payment_type: Option<PaymentType>,

    pub bank: Option<String>,
}
