//! Audit logging for Money Moves
//!
//! Records every transaction creation and deletion in an append-only log of
//! JSON lines next to the settings file.
//!
//! ```rust,ignore
//! use money_moves::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(&transaction))?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
