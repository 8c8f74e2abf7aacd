use crate::domain::invoice::Invoice;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct InvoiceRecord {
    reference: String,
    amount: Decimal,
}

impl TryFrom<InvoiceRecord> for Invoice {
    type Error = PaymentError;

    fn try_from(record: InvoiceRecord) -> Result<Self> {
        Invoice::parse(record.amount, record.reference)
    }
}

/// Reads invoices from a CSV source with a `reference, amount` header.
///
/// Whitespace around fields is trimmed and rows are validated as they are read.
pub struct InvoiceReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InvoiceReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates invoices.
    pub fn invoices(self) -> impl Iterator<Item = Result<Invoice>> {
        self.reader
            .into_deserialize::<InvoiceRecord>()
            .map(|result| result.map_err(PaymentError::from).and_then(Invoice::try_from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "reference, amount\nINV-1, 10.0\nINV-2, 0";
        let results: Vec<Result<Invoice>> = InvoiceReader::new(data.as_bytes()).invoices().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.reference, "INV-1");
        assert_eq!(first.amount, dec!(10.0));
        assert!(first.payments.is_empty());
        assert_eq!(results[1].as_ref().unwrap().amount, dec!(0));
    }

    #[test]
    fn test_reader_rejects_bad_rows() {
        let data = "reference, amount\nINV-1, abc\nINV-2, -3\n, 4";
        let results: Vec<Result<Invoice>> = InvoiceReader::new(data.as_bytes()).invoices().collect();

        assert!(matches!(results[0], Err(PaymentError::CsvError(_))));
        assert!(matches!(results[1], Err(PaymentError::ValidationError(_))));
        assert!(matches!(results[2], Err(PaymentError::ValidationError(_))));
    }
}
