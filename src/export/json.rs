//! JSON Export functionality
//!
//! Exports the ledger plus its totals, with a schema version so other tools
//! can check compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{MoneyError, MoneyResult};
use crate::models::{Money, Transaction};
use crate::services::{Ledger, Totals};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Serialize)]
pub struct LedgerExport<'a> {
    pub schema_version: &'static str,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: &'static str,
    pub totals: ExportTotals,
    pub transactions: &'a [Transaction],
}

#[derive(Debug, Serialize)]
pub struct ExportTotals {
    pub total_income: Money,
    pub total_expense: Money,
    pub net_balance: Money,
    pub transaction_count: usize,
}

impl<'a> LedgerExport<'a> {
    pub fn from_ledger(ledger: &'a Ledger) -> Self {
        let Totals {
            total_income,
            total_expense,
            net_balance,
        } = ledger.totals();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            totals: ExportTotals {
                total_income,
                total_expense,
                net_balance,
                transaction_count: ledger.len(),
            },
            transactions: ledger.transactions(),
        }
    }
}

/// Export the ledger to pretty-printed JSON
pub fn export_ledger_json<W: Write>(ledger: &Ledger, mut writer: W) -> MoneyResult<usize> {
    let export = LedgerExport::from_ledger(ledger);
    serde_json::to_writer_pretty(&mut writer, &export)
        .map_err(|e| MoneyError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| MoneyError::Export(e.to_string()))?;
    Ok(ledger.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionKind};
    use crate::storage::{JsonPersistence, MemorySlot};
    use chrono::NaiveDate;

    #[test]
    fn test_json_export() {
        let mut ledger = Ledger::hydrate(Box::new(JsonPersistence::new(MemorySlot::new())));
        let _ = ledger
            .add(Transaction::new(
                TransactionKind::Income,
                "Salary",
                Money::from_cents(500000),
                Category::Salary,
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ))
            .unwrap();

        let mut output = Vec::new();
        assert_eq!(export_ledger_json(&ledger, &mut output).unwrap(), 1);

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["totals"]["total_income"], 5000);
        assert_eq!(value["totals"]["net_balance"], 5000);
        assert_eq!(value["totals"]["transaction_count"], 1);
        assert_eq!(value["transactions"][0]["title"], "Salary");
        assert_eq!(value["transactions"][0]["kind"], "income");
    }
}
