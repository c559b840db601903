//! Strongly-typed transaction identifier
//!
//! Fresh ids are random UUIDs. Ids read back from the ledger file are kept
//! verbatim, so ids written by older builds (timestamps) remain valid.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix used when showing a shortened id
const DISPLAY_PREFIX: &str = "txn-";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the id text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form for narrow displays: the prefix plus the first 8 characters
    pub fn short(&self) -> String {
        let head: String = self.0.chars().take(8).collect();
        format!("{}{}", DISPLAY_PREFIX, head)
    }

    /// Whether `query` names this id, either in full or by its short form
    /// (with or without the prefix)
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        if self.0 == query {
            return true;
        }
        let bare = query.strip_prefix(DISPLAY_PREFIX).unwrap_or(query);
        !bare.is_empty() && self.0.starts_with(bare)
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TransactionId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IdParseError);
        }
        Ok(Self(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Error for an empty id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError;

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transaction id must not be empty")
    }
}

impl std::error::Error for IdParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = TransactionId::new();
        let b = TransactionId::new();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_short_display() {
        let id: TransactionId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert_eq!(id.short(), "txn-550e8400");
    }

    #[test]
    fn test_matches_full_and_short_forms() {
        let id: TransactionId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert!(id.matches("550e8400-e29b-41d4-a716-446655440000"));
        assert!(id.matches("txn-550e8400"));
        assert!(id.matches("550e84"));
        assert!(!id.matches("deadbeef"));
        assert!(!id.matches(""));
        assert!(!id.matches("txn-"));
        assert!(!id.matches("  txn-  "));
    }

    #[test]
    fn test_legacy_timestamp_id_deserializes() {
        let id: TransactionId = serde_json::from_str("\"1704067200000\"").unwrap();
        assert_eq!(id.as_str(), "1704067200000");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1704067200000\"");
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(serde_json::from_str::<TransactionId>("\"\"").is_err());
        assert!("  ".parse::<TransactionId>().is_err());
    }
}
