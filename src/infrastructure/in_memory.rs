use crate::domain::invoice::Invoice;
use crate::domain::ports::InvoiceStore;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for invoices, keyed by reference.
///
/// Uses `Arc<RwLock<HashMap<String, Invoice>>>` so clones share the same invoices.
#[derive(Default, Clone)]
pub struct InMemoryInvoiceStore {
    invoices: Arc<RwLock<HashMap<String, Invoice>>>,
}

impl InMemoryInvoiceStore {
    /// Creates a new, empty in-memory invoice store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn add(&self, invoice: Invoice) -> Result<()> {
        let mut invoices = self.invoices.write().await;
        match invoices.entry(invoice.reference.clone()) {
            Entry::Occupied(entry) => Err(PaymentError::DuplicateInvoice(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(invoice);
                Ok(())
            }
        }
    }

    async fn get(&self, reference: &str) -> Result<Option<Invoice>> {
        let invoices = self.invoices.read().await;
        Ok(invoices.get(reference).cloned())
    }

    async fn update(&self, invoice: Invoice) -> Result<()> {
        let mut invoices = self.invoices.write().await;
        match invoices.get_mut(&invoice.reference) {
            Some(stored) => {
                *stored = invoice;
                Ok(())
            }
            None => Err(PaymentError::InvoiceNotFound),
        }
    }

    async fn all_invoices(&self) -> Result<Vec<Invoice>> {
        let invoices = self.invoices.read().await;
        Ok(invoices.values().cloned().collect())
    }
}
