use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_malformed_rows_are_skipped() {
    let mut invoices = NamedTempFile::new().unwrap();
    writeln!(invoices, "reference, amount").unwrap();
    writeln!(invoices, "INV-1, 10.0").unwrap();
    writeln!(invoices, "INV-2, not_a_number").unwrap();
    writeln!(invoices, "INV-3, -4").unwrap();
    writeln!(invoices, "INV-1, 20.0").unwrap(); // Duplicate reference

    let mut payments = NamedTempFile::new().unwrap();
    writeln!(payments, "reference, amount").unwrap();
    writeln!(payments, "INV-1, abc").unwrap();
    writeln!(payments, "INV-1, -1").unwrap();
    writeln!(payments, "INV-1, 2.5").unwrap();
    writeln!(payments, "INV-3, 1").unwrap(); // Rejected while loading, so unknown

    let mut cmd = Command::new(cargo_bin!("invoice-payments"));
    cmd.arg(invoices.path()).arg(payments.path()).arg("--summary");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading invoice"))
        .stderr(predicate::str::contains("Error loading invoice: Invoice already exists: INV-1"))
        .stderr(predicate::str::contains("Error reading payment"))
        .stderr(predicate::str::contains("Error processing payment"))
        .stdout(predicate::str::contains("INV-1,10,2.5,partially_paid"))
        .stdout(predicate::str::contains("INV-2").not())
        .stdout(predicate::str::contains("INV-3").not());
}

#[test]
fn test_payment_history_accumulates_across_rows() {
    let mut invoices = NamedTempFile::new().unwrap();
    writeln!(invoices, "reference, amount").unwrap();
    writeln!(invoices, "A, 1.00").unwrap();

    let mut payments = NamedTempFile::new().unwrap();
    writeln!(payments, "reference, amount").unwrap();
    for _ in 0..4 {
        writeln!(payments, "A, 0.25").unwrap();
    }
    writeln!(payments, "A, 0.25").unwrap();

    let mut cmd = Command::new(cargo_bin!("invoice-payments"));
    cmd.arg(invoices.path()).arg(payments.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("A,0.25,invoice is now partially paid"))
        .stdout(predicate::str::contains(
            "A,0.25,\"final partial payment received, invoice is now fully paid\"",
        ))
        .stdout(predicate::str::contains("A,0.25,invoice was already fully paid"));
}
