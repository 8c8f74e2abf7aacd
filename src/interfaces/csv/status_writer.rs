use crate::domain::invoice::{Invoice, InvoiceStatus};
use crate::domain::outcome::PaymentOutcome;
use crate::domain::payment::Payment;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct StatusRecord<'a> {
    reference: &'a str,
    amount: Decimal,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct SummaryRecord<'a> {
    reference: &'a str,
    amount: Decimal,
    paid: Decimal,
    status: InvoiceStatus,
}

/// Writes processing results as CSV.
///
/// Amounts are normalized, so `10.00` is written as `10`.
pub struct StatusWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StatusWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes one `reference,amount,status` row for a processed payment.
    pub fn write_outcome(&mut self, payment: &Payment, outcome: PaymentOutcome) -> Result<()> {
        self.writer.serialize(StatusRecord {
            reference: &payment.reference,
            amount: payment.amount.normalize(),
            status: outcome.message(),
        })?;
        Ok(())
    }

    /// Writes one `reference,amount,paid,status` row per invoice.
    pub fn write_summary(&mut self, invoices: &[Invoice]) -> Result<()> {
        for invoice in invoices {
            self.writer.serialize(SummaryRecord {
                reference: &invoice.reference,
                amount: invoice.amount.normalize(),
                paid: invoice.amount_paid().normalize(),
                status: invoice.status(),
            })?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
