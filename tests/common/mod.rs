use invoice_payments::application::processor::PaymentProcessor;
use invoice_payments::domain::invoice::Invoice;
use invoice_payments::infrastructure::in_memory::InMemoryInvoiceStore;

#[allow(dead_code)]
pub fn random_reference() -> String {
    rand::random::<u32>().to_string()
}

#[allow(dead_code)]
pub async fn processor_with(invoice: Invoice) -> PaymentProcessor {
    let processor = PaymentProcessor::new(Box::new(InMemoryInvoiceStore::new()));
    processor
        .add_invoice(invoice)
        .await
        .expect("Failed to add invoice");
    processor
}
