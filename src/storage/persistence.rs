//! Ledger persistence
//!
//! The ledger lives in one durable slot as a JSON array of field-labeled
//! records. Reading never fails: a missing, unreadable or malformed slot is
//! treated as an empty ledger, and inside a well-formed array each record that
//! does not decode is dropped on its own.

use crate::error::{MoneyError, MoneyResult};
use crate::models::Transaction;

use super::slot::Slot;

/// Fixed key of the slot holding the ledger
pub const LEDGER_SLOT: &str = "transactions";

/// Loads and saves the full ordered transaction sequence
pub trait Persistence {
    /// Previously saved transactions in order, or an empty list when there is
    /// nothing usable in the slot
    fn load(&self) -> Vec<Transaction>;

    /// Replace the stored sequence. Durable when this returns `Ok`.
    fn save(&self, transactions: &[Transaction]) -> MoneyResult<()>;
}

/// JSON encoding of the ledger over any slot
#[derive(Debug, Clone)]
pub struct JsonPersistence<S: Slot> {
    slot: S,
}

impl<S: Slot> JsonPersistence<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Decode a slot payload. The payload must be a JSON array; records in
    /// it that do not decode as transactions are skipped.
    pub fn decode(contents: &str) -> MoneyResult<Vec<Transaction>> {
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<serde_json::Value> =
            serde_json::from_str(contents).map_err(|e| MoneyError::Json(e.to_string()))?;

        Ok(records
            .into_iter()
            .filter_map(|record| serde_json::from_value(record).ok())
            .collect())
    }

    /// Encode a sequence for the slot
    pub fn encode(transactions: &[Transaction]) -> MoneyResult<String> {
        serde_json::to_string_pretty(transactions)
            .map_err(|e| MoneyError::Json(format!("Failed to serialize ledger: {}", e)))
    }
}

impl<S: Slot> Persistence for JsonPersistence<S> {
    fn load(&self) -> Vec<Transaction> {
        match self.slot.read() {
            Ok(Some(contents)) => Self::decode(&contents).unwrap_or_default(),
            Ok(None) | Err(_) => Vec::new(),
        }
    }

    fn save(&self, transactions: &[Transaction]) -> MoneyResult<()> {
        let contents = Self::encode(transactions)?;
        self.slot.write(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionKind};
    use crate::storage::slot::{FileSlot, MemorySlot};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(
                TransactionKind::Income,
                "Salary",
                Money::from_cents(500000),
                Category::Salary,
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ),
            Transaction::new(
                TransactionKind::Expense,
                "Bus pass",
                Money::from_cents(4550),
                Category::Transport,
                NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            ),
            Transaction::new(
                TransactionKind::Expense,
                "Groceries",
                Money::from_cents(120000),
                Category::Food,
                NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            ),
        ]
    }

    #[test]
    fn test_save_then_load_preserves_fields_and_order() {
        let persistence = JsonPersistence::new(MemorySlot::new());
        let transactions = sample();

        persistence.save(&transactions).unwrap();
        assert_eq!(persistence.load(), transactions);
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let transactions = sample();

        JsonPersistence::new(FileSlot::new(path.clone()))
            .save(&transactions)
            .unwrap();

        let reloaded = JsonPersistence::new(FileSlot::new(path)).load();
        assert_eq!(reloaded, transactions);
    }

    #[test]
    fn test_empty_slot_loads_empty() {
        let persistence = JsonPersistence::new(MemorySlot::new());
        assert!(persistence.load().is_empty());

        let persistence = JsonPersistence::new(MemorySlot::with_contents("   "));
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_corrupt_slot_loads_empty() {
        for garbage in [
            "not json at all",
            "{\"transactions\": 5}",
            "[{\"id\": \"1\"}]",
            "[{\"id\":\"1\",\"kind\":\"gift\",\"title\":\"x\",\"amount\":1,\"category\":\"Other\",\"date\":\"2024-01-01\"}]",
            "[1, 2",
            "[1, \"two\", null]",
            "\u{0}\u{1}\u{2}",
        ] {
            let persistence = JsonPersistence::new(MemorySlot::with_contents(garbage));
            assert!(persistence.load().is_empty(), "payload: {:?}", garbage);
        }
    }

    #[test]
    fn test_bad_record_does_not_drop_the_rest() {
        let slot = MemorySlot::new();
        let persistence = JsonPersistence::new(slot.clone());
        persistence.save(&sample()).unwrap();

        let mut records: Vec<serde_json::Value> =
            serde_json::from_str(&slot.get().unwrap()).unwrap();
        records.insert(
            1,
            serde_json::json!({
                "id": "bad", "kind": "gift", "title": "x",
                "amount": 1, "category": "Other", "date": "2024-01-01"
            }),
        );
        records.push(serde_json::json!({
            "id": "late", "kind": "expense", "title": "y",
            "amount": 1, "category": "Food", "date": "not a date"
        }));
        slot.set(serde_json::to_string(&records).unwrap());

        assert_eq!(persistence.load(), sample());
    }

    #[test]
    fn test_unreadable_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        // A directory where the file should be cannot be read as text
        let path = temp_dir.path().join("transactions.json");
        std::fs::create_dir_all(&path).unwrap();

        let persistence = JsonPersistence::new(FileSlot::new(path));
        assert!(persistence.load().is_empty());
    }

    #[test]
    fn test_payload_is_a_labeled_array() {
        let slot = MemorySlot::new();
        let persistence = JsonPersistence::new(slot.clone());
        persistence.save(&sample()[..1]).unwrap();

        let value: serde_json::Value = serde_json::from_str(&slot.get().unwrap()).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 1);
        for field in ["id", "kind", "title", "amount", "category", "date"] {
            assert!(records[0].get(field).is_some(), "missing field {}", field);
        }
    }

    #[test]
    fn test_save_failure_is_reported() {
        let slot = MemorySlot::new();
        slot.fail_writes(true);
        let persistence = JsonPersistence::new(slot);

        assert!(persistence.save(&sample()).is_err());
    }
}
