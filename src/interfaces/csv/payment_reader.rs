use crate::domain::payment::Payment;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct PaymentRecord {
    reference: String,
    amount: Decimal,
}

impl TryFrom<PaymentRecord> for Payment {
    type Error = PaymentError;

    fn try_from(record: PaymentRecord) -> Result<Self> {
        Payment::parse(record.amount, record.reference)
    }
}

/// Reads payments from a CSV source with a `reference, amount` header.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator over payments in file order, so they can be applied as a stream.
    pub fn payments(self) -> impl Iterator<Item = Result<Payment>> {
        self.reader
            .into_deserialize::<PaymentRecord>()
            .map(|result| result.map_err(PaymentError::from).and_then(Payment::try_from))
    }
}
