use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("There is no invoice matching this payment")]
    InvoiceNotFound,
    #[error("Invoice already exists: {0}")]
    DuplicateInvoice(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
