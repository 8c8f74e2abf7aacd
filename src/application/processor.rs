use crate::domain::invoice::Invoice;
use crate::domain::outcome::PaymentOutcome;
use crate::domain::payment::Payment;
use crate::domain::ports::InvoiceStoreBox;
use crate::error::{PaymentError, Result};
use log::debug;
use rust_decimal::Decimal;
use tokio::sync::Mutex;

/// Validates incoming payments against their invoices and records the accepted ones.
///
/// `PaymentProcessor` owns the invoice store it is given. Each payment is handled as a
/// single lookup, decide, write-back step; the steps of two payments never interleave.
pub struct PaymentProcessor {
    store: InvoiceStoreBox,
    apply_lock: Mutex<()>,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor` over `store`.
    pub fn new(store: InvoiceStoreBox) -> Self {
        Self {
            store,
            apply_lock: Mutex::new(()),
        }
    }

    /// Adds an invoice to the underlying store.
    pub async fn add_invoice(&self, invoice: Invoice) -> Result<()> {
        self.store.add(invoice).await
    }

    /// Looks up an invoice without touching it.
    pub async fn invoice(&self, reference: &str) -> Result<Option<Invoice>> {
        self.store.get(reference).await
    }

    /// Applies `payment` to the invoice with the same reference.
    ///
    /// Returns [`PaymentError::InvoiceNotFound`] when no such invoice exists. Any other
    /// outcome, including a rejected payment, is returned as a [`PaymentOutcome`]. Accepted
    /// payments are appended to the invoice history and written back to the store.
    pub async fn process_payment(&self, payment: Payment) -> Result<PaymentOutcome> {
        let _guard = self.apply_lock.lock().await;

        let mut invoice = self
            .store
            .get(&payment.reference)
            .await?
            .ok_or(PaymentError::InvoiceNotFound)?;

        let outcome = decide(&invoice, &payment);
        debug!(
            "payment of {} against invoice {}: {}",
            payment.amount, invoice.reference, outcome
        );

        if outcome.is_accepted() {
            invoice.apply(payment);
            self.store.update(invoice).await?;
        }
        Ok(outcome)
    }

    /// Consumes the processor and returns every invoice, ordered by reference.
    pub async fn into_invoices(self) -> Result<Vec<Invoice>> {
        let mut invoices = self.store.all_invoices().await?;
        invoices.sort_by(|a, b| a.reference.cmp(&b.reference));
        Ok(invoices)
    }
}

/// Decides what happens to `payment` given the current state of `invoice`.
pub fn decide(invoice: &Invoice, payment: &Payment) -> PaymentOutcome {
    let amount_paid = invoice.amount_paid();

    if invoice.amount == Decimal::ZERO {
        // A zero-amount invoice carrying payments is an invalid state.
        if invoice.payments.is_empty() {
            PaymentOutcome::NoPaymentNeeded
        } else {
            PaymentOutcome::AlreadyFullyPaid
        }
    } else if amount_paid > Decimal::ZERO {
        let remaining = invoice.amount - amount_paid;
        if amount_paid == invoice.amount {
            PaymentOutcome::AlreadyFullyPaid
        } else if payment.amount > remaining {
            PaymentOutcome::ExceedsRemaining
        } else if payment.amount == remaining {
            PaymentOutcome::FinalPartialPayment
        } else {
            PaymentOutcome::AnotherPartialPayment
        }
    } else if payment.amount > invoice.amount {
        PaymentOutcome::ExceedsInvoiceAmount
    } else if payment.amount == invoice.amount {
        PaymentOutcome::FullyPaid
    } else {
        PaymentOutcome::PartiallyPaid
    }
}
