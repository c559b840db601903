//! `history`: recent entries from the audit log

use crate::audit::AuditLogger;
use crate::error::MoneyResult;

/// Print the last `count` audit entries, oldest first
pub fn handle_history(logger: &AuditLogger, count: usize) -> MoneyResult<()> {
    let entries = logger.read_recent(count)?;

    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
