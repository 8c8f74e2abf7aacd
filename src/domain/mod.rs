//! Domain model: invoices, payments and the storage port they are kept behind.

pub mod invoice;
pub mod outcome;
pub mod payment;
pub mod ports;
