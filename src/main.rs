use clap::Parser;
use invoice_payments::application::processor::PaymentProcessor;
use invoice_payments::infrastructure::in_memory::InMemoryInvoiceStore;
use invoice_payments::interfaces::csv::invoice_reader::InvoiceReader;
use invoice_payments::interfaces::csv::payment_reader::PaymentReader;
use invoice_payments::interfaces::csv::status_writer::StatusWriter;
use log::info;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Invoices CSV file (`reference, amount`)
    invoices: PathBuf,

    /// Payments CSV file (`reference, amount`), applied in file order
    payments: PathBuf,

    /// Print the final state of every invoice instead of one status row per payment
    #[arg(long)]
    summary: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let processor = PaymentProcessor::new(Box::new(InMemoryInvoiceStore::new()));

    let file = File::open(&cli.invoices).into_diagnostic()?;
    let mut loaded = 0usize;
    for invoice in InvoiceReader::new(file).invoices() {
        match invoice {
            Ok(invoice) => match processor.add_invoice(invoice).await {
                Ok(()) => loaded += 1,
                Err(e) => eprintln!("Error loading invoice: {}", e),
            },
            Err(e) => eprintln!("Error reading invoice: {}", e),
        }
    }
    info!("loaded {} invoices from {}", loaded, cli.invoices.display());

    let stdout = io::stdout();
    let mut writer = StatusWriter::new(stdout.lock());

    let file = File::open(&cli.payments).into_diagnostic()?;
    for payment in PaymentReader::new(file).payments() {
        let payment = match payment {
            Ok(payment) => payment,
            Err(e) => {
                eprintln!("Error reading payment: {}", e);
                continue;
            }
        };
        match processor.process_payment(payment.clone()).await {
            Ok(outcome) => {
                if !cli.summary {
                    writer.write_outcome(&payment, outcome).into_diagnostic()?;
                }
            }
            Err(e) => eprintln!("Error processing payment: {}", e),
        }
    }

    if cli.summary {
        let invoices = processor.into_invoices().await.into_diagnostic()?;
        writer.write_summary(&invoices).into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}
