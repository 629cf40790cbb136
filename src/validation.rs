use rust_decimal::Decimal;
use validator::ValidationError;

use crate::models::transaction::{CreateTransactionRequest, PaymentType};

/// Validates that a monetary amount is a non-negative magnitude. The sign of
/// a transaction is carried by its type, never by the stored amount.
pub fn validate_non_negative_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount < Decimal::ZERO {
        let mut error = ValidationError::new("invalid_amount");
        error.message = Some("Amount must not be negative".into());
        return Err(error);
    }
    Ok(())
}

/// Validates the payment-method pairing: a bank name is required when paying
/// by bank and must be absent when paying cash.
pub fn validate_payment_fields(request: &CreateTransactionRequest) -> Result<(), ValidationError> {
    let payment_type = request.payment_type.unwrap_or_default();
    let has_bank = request
        .bank
        .as_deref()
        .map(|b| !b.trim().is_empty())
        .unwrap_or(false);

    match payment_type {
        PaymentType::Bank if !has_bank => {
            let mut error = ValidationError::new("missing_bank");
            error.message = Some("Bank name is required when payment type is bank".into());
            Err(error)
        }
        PaymentType::Cash if request.bank.is_some() => {
            let mut error = ValidationError::new("unexpected_bank");
            error.message = Some("Bank name must be absent when payment type is cash".into());
            Err(error)
        }
        _ => Ok(()),
    }
}
