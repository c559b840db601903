//! CSV Export functionality
//!
//! Writes the ledger as a spreadsheet-friendly CSV file, one row per
//! transaction in ledger order.

use serde::Serialize;
use std::io::Write;

use crate::error::{MoneyError, MoneyResult};
use crate::models::Transaction;

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    date: String,
    kind: &'static str,
    title: &'a str,
    category: &'static str,
    amount: String,
    signed_amount: String,
}

impl<'a> CsvRow<'a> {
    fn new(txn: &'a Transaction) -> Self {
        Self {
            id: txn.id.as_str(),
            date: txn.date.format("%Y-%m-%d").to_string(),
            kind: match txn.kind {
                crate::models::TransactionKind::Income => "income",
                crate::models::TransactionKind::Expense => "expense",
            },
            title: &txn.title,
            category: txn.category.name(),
            amount: txn.amount.to_string(),
            signed_amount: txn.signed_amount().to_string(),
        }
    }
}

/// Export all transactions to CSV. Returns the number of rows written.
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> MoneyResult<usize> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);

    for txn in transactions {
        csv_writer
            .serialize(CsvRow::new(txn))
            .map_err(|e| MoneyError::Export(e.to_string()))?;
    }

    // An empty ledger still gets a header row
    if transactions.is_empty() {
        csv_writer
            .write_record([
                "id",
                "date",
                "kind",
                "title",
                "category",
                "amount",
                "signed_amount",
            ])
            .map_err(|e| MoneyError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| MoneyError::Export(e.to_string()))?;

    Ok(transactions.len())
}
