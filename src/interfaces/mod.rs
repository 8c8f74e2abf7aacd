//! Adapters that move invoices and payments in and out of the process.

pub mod csv;
