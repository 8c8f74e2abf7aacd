//! Application layer containing the payment decision logic.
//!
//! `PaymentProcessor` is the entry point: it takes an injected invoice store and
//! applies payments to the invoices held there.

pub mod processor;
