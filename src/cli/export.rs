//! CLI command for data export

use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::error::{MoneyError, MoneyResult};
use crate::export::{export_ledger_json, export_transactions_csv};
use crate::services::Ledger;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per transaction
    Csv,
    /// JSON with totals and every transaction
    Json,
}

/// Handle `export`; writes to `output` or to stdout
pub fn handle_export(
    ledger: &Ledger,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> MoneyResult<()> {
    let Some(path) = output else {
        let stdout = io::stdout();
        write_export(ledger, format, stdout.lock())?;
        return Ok(());
    };

    let file = File::create(&path).map_err(|e| {
        MoneyError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let count = write_export(ledger, format, BufWriter::new(file))?;

    println!("Exported {} transactions to: {}", count, path.display());
    Ok(())
}

fn write_export<W: io::Write>(ledger: &Ledger, format: ExportFormat, writer: W) -> MoneyResult<usize> {
    match format {
        ExportFormat::Csv => export_transactions_csv(ledger.transactions(), writer),
        ExportFormat::Json => export_ledger_json(ledger, writer),
    }
}
