//! Export module for Money Moves
//!
//! - CSV: one row per transaction (spreadsheet-compatible)
//! - JSON: the ledger plus totals (machine-readable)

pub mod csv;
pub mod json;

pub use self::csv::export_transactions_csv;
pub use json::{export_ledger_json, LedgerExport, EXPORT_SCHEMA_VERSION};
