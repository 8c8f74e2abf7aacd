use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount tagged with the reference of the invoice it settles.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub amount: Decimal,
    pub reference: String,
}

impl Payment {
    pub fn new(amount: Decimal, reference: impl Into<String>) -> Self {
        Self {
            amount,
            reference: reference.into(),
        }
    }

    /// Builds a payment from untrusted input, rejecting negative amounts and blank references.
    pub fn parse(amount: Decimal, reference: impl Into<String>) -> Result<Self, PaymentError> {
        let reference = reference.into();
        validate_reference(&reference)?;
        validate_amount(amount)?;
        Ok(Self { amount, reference })
    }
}

pub(crate) fn validate_reference(reference: &str) -> Result<(), PaymentError> {
    if reference.trim().is_empty() {
        return Err(PaymentError::ValidationError(
            "Reference must not be empty".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_amount(amount: Decimal) -> Result<(), PaymentError> {
    if amount < Decimal::ZERO {
        return Err(PaymentError::ValidationError(
            "Amount must not be negative".to_string(),
        ));
    }
    Ok(())
}
