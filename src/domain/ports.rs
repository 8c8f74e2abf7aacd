use super::invoice::Invoice;
use crate::error::Result;
use async_trait::async_trait;

/// Lookup-by-reference storage for invoices.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Adds a new invoice. Fails if the reference is already taken.
    async fn add(&self, invoice: Invoice) -> Result<()>;
    async fn get(&self, reference: &str) -> Result<Option<Invoice>>;
    /// Replaces the invoice stored under `invoice.reference`.
    async fn update(&self, invoice: Invoice) -> Result<()>;
    async fn all_invoices(&self) -> Result<Vec<Invoice>>;
}

pub type InvoiceStoreBox = Box<dyn InvoiceStore>;
