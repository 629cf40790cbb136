use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::transaction::{PaymentType, TransactionType, TransactionView};

pub fn transaction(
    date: &str,
    amount: impl Into<Decimal>,
    kind: TransactionType,
    category: &str,
) -> TransactionView {
    TransactionView {
        id: Uuid::new_v4(),
        date: date.to_string(),
        description: category.to_string(),
        amount: amount.into(),
        kind,
        category: category.to_string(),
        payment_type: PaymentType::Cash,
        bank: None,
    }
}

pub fn income(date: &str, amount: impl Into<Decimal>, category: &str) -> TransactionView {
    transaction(date, amount, TransactionType::Income, category)
}

pub fn expense(date: &str, amount: impl Into<Decimal>, category: &str) -> TransactionView {
    transaction(date, amount, TransactionType::Expense, category)
}
