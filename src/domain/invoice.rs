use super::payment::{Payment, validate_amount, validate_reference};
use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Paid state of an invoice, derived from its payment history.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Unpaid,
    PartiallyPaid,
    FullyPaid,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InvoiceStatus::Unpaid => "unpaid",
            InvoiceStatus::PartiallyPaid => "partially_paid",
            InvoiceStatus::FullyPaid => "fully_paid",
        };
        f.write_str(label)
    }
}

/// A bill with the total amount due and the payments applied to it so far.
///
/// The amount already paid is never stored; it is summed from `payments`
/// whenever it is needed so the two cannot drift apart.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Invoice {
    /// Total amount due.
    pub amount: Decimal,
    /// Unique key the invoice is stored under.
    pub reference: String,
    /// Applied payments, oldest first.
    pub payments: Vec<Payment>,
}

impl Invoice {
    pub fn new(amount: Decimal, reference: impl Into<String>) -> Self {
        Self::with_payments(amount, reference, Vec::new())
    }

    pub fn with_payments(
        amount: Decimal,
        reference: impl Into<String>,
        payments: Vec<Payment>,
    ) -> Self {
        Self {
            amount,
            reference: reference.into(),
            payments,
        }
    }

    /// Builds an invoice from untrusted input, rejecting negative amounts and blank references.
    pub fn parse(amount: Decimal, reference: impl Into<String>) -> Result<Self, PaymentError> {
        let reference = reference.into();
        validate_reference(&reference)?;
        validate_amount(amount)?;
        Ok(Self::new(amount, reference))
    }

    /// Sum of every applied payment.
    pub fn amount_paid(&self) -> Decimal {
        self.payments.iter().map(|payment| payment.amount).sum()
    }

    /// Amount still due.
    pub fn remaining(&self) -> Decimal {
        self.amount - self.amount_paid()
    }

    pub fn status(&self) -> InvoiceStatus {
        let paid = self.amount_paid();
        if paid >= self.amount {
            InvoiceStatus::FullyPaid
        } else if paid > Decimal::ZERO {
            InvoiceStatus::PartiallyPaid
        } else {
            InvoiceStatus::Unpaid
        }
    }

    /// Appends an accepted payment to the history.
    pub fn apply(&mut self, payment: Payment) {
        self.payments.push(payment);
    }
}
