use std::fmt;

/// Result of applying a payment to an existing invoice.
///
/// A missing invoice is not an outcome; it surfaces as
/// [`PaymentError::InvoiceNotFound`](crate::error::PaymentError::InvoiceNotFound).
/// Everything else, accepted or rejected, is reported through this type and its
/// `Display` renders the status message.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PaymentOutcome {
    /// Zero-amount invoice with no payments.
    NoPaymentNeeded,
    /// Invoice is already closed; nothing was applied.
    AlreadyFullyPaid,
    /// Payment exceeds what is left after earlier partial payments.
    ExceedsRemaining,
    /// Payment exceeds the invoice amount on an unpaid invoice.
    ExceedsInvoiceAmount,
    /// Payment settled the remaining balance after earlier partial payments.
    FinalPartialPayment,
    /// Payment added to earlier partial payments without settling the invoice.
    AnotherPartialPayment,
    /// First payment settled the whole invoice.
    FullyPaid,
    /// First payment covered part of the invoice.
    PartiallyPaid,
}

impl PaymentOutcome {
    /// Whether the payment was appended to the invoice.
    pub fn is_accepted(&self) -> bool {
        matches!(
            self,
            PaymentOutcome::FinalPartialPayment
                | PaymentOutcome::AnotherPartialPayment
                | PaymentOutcome::FullyPaid
                | PaymentOutcome::PartiallyPaid
        )
    }

    pub fn message(&self) -> &'static str {
        match self {
            PaymentOutcome::NoPaymentNeeded => "no payment needed",
            PaymentOutcome::AlreadyFullyPaid => "invoice was already fully paid",
            PaymentOutcome::ExceedsRemaining => {
                "the payment is greater than the partial amount remaining"
            }
            PaymentOutcome::ExceedsInvoiceAmount => {
                "the payment is greater than the invoice amount"
            }
            PaymentOutcome::FinalPartialPayment => {
                "final partial payment received, invoice is now fully paid"
            }
            PaymentOutcome::AnotherPartialPayment => {
                "another partial payment received, still not fully paid"
            }
            PaymentOutcome::FullyPaid => "invoice is now fully paid",
            PaymentOutcome::PartiallyPaid => "invoice is now partially paid",
        }
    }
}

impl fmt::Display for PaymentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
