//! Audit entry data structures
//!
//! Defines the structure of audit log entries. Transactions are never
//! edited, so the only operations are creation and deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Transaction;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// ID of the affected transaction
    pub entity_id: String,

    /// Title of the affected transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// The transaction as it was before a delete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The transaction as created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Set when the change could not be written to the durable slot
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub unpersisted: bool,
}

impl AuditEntry {
    /// Entry for a newly recorded transaction
    pub fn create(txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_id: txn.id.to_string(),
            entity_name: Some(txn.title.clone()),
            before: None,
            after: serde_json::to_value(txn).ok(),
            unpersisted: false,
        }
    }

    /// Entry for a deleted transaction
    pub fn delete(txn: &Transaction) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            entity_id: txn.id.to_string(),
            entity_name: Some(txn.title.clone()),
            before: serde_json::to_value(txn).ok(),
            after: None,
            unpersisted: false,
        }
    }

    /// Mark the change as not having reached durable storage
    pub fn unpersisted(mut self, unpersisted: bool) -> Self {
        self.unpersisted = unpersisted;
        self
    }

    /// One-line human readable summary
    pub fn format_human_readable(&self) -> String {
        let name = self
            .entity_name
            .as_deref()
            .map(|n| format!(" \"{}\"", n))
            .unwrap_or_default();
        let suffix = if self.unpersisted { " (not saved)" } else { "" };
        format!(
            "{} {} Transaction {}{}{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_id,
            name,
            suffix
        )
    }
}
