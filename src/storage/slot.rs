//! Durable slots
//!
//! A slot is a single named text value that survives the process: a file on
//! disk in normal use, or a shared in-memory string in tests.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::error::{MoneyError, MoneyResult};

use super::file_io::{read_text, write_text_atomic};

/// A single durable text value
pub trait Slot {
    /// Read the slot; `None` when nothing has been written yet
    fn read(&self) -> MoneyResult<Option<String>>;

    /// Replace the slot's contents. The new contents are durable when this
    /// returns `Ok`.
    fn write(&self, contents: &str) -> MoneyResult<()>;
}

/// Slot backed by one file, written atomically
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Slot for FileSlot {
    fn read(&self) -> MoneyResult<Option<String>> {
        read_text(&self.path)
    }

    fn write(&self, contents: &str) -> MoneyResult<()> {
        write_text_atomic(&self.path, contents)
    }
}

/// In-memory slot. Clones share the same value, so a test can keep a handle
/// and inspect or corrupt what the ledger wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    value: Arc<RwLock<Option<String>>>,
    fail_writes: Arc<RwLock<bool>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot that already holds `contents`
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let slot = Self::new();
        slot.set(contents);
        slot
    }

    /// Overwrite the raw contents, bypassing any adapter
    pub fn set(&self, contents: impl Into<String>) {
        if let Ok(mut value) = self.value.write() {
            *value = Some(contents.into());
        }
    }

    /// Current raw contents
    pub fn get(&self) -> Option<String> {
        self.value.read().ok().and_then(|v| v.clone())
    }

    /// Make every following write fail, simulating a full or read-only store
    pub fn fail_writes(&self, fail: bool) {
        if let Ok(mut flag) = self.fail_writes.write() {
            *flag = fail;
        }
    }
}

impl Slot for MemorySlot {
    fn read(&self) -> MoneyResult<Option<String>> {
        let value = self
            .value
            .read()
            .map_err(|e| MoneyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(value.clone())
    }

    fn write(&self, contents: &str) -> MoneyResult<()> {
        let failing = self
            .fail_writes
            .read()
            .map(|flag| *flag)
            .unwrap_or(false);
        if failing {
            return Err(MoneyError::Storage("Storage quota exceeded".into()));
        }

        let mut value = self
            .value
            .write()
            .map_err(|e| MoneyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *value = Some(contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_slot_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let slot = FileSlot::new(temp_dir.path().join("data").join("transactions.json"));

        assert_eq!(slot.read().unwrap(), None);
        slot.write("[]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_slot_clones_share_value() {
        let slot = MemorySlot::new();
        let handle = slot.clone();

        slot.write("hello").unwrap();
        assert_eq!(handle.get().as_deref(), Some("hello"));

        handle.set("changed");
        assert_eq!(slot.read().unwrap().as_deref(), Some("changed"));
    }

    #[test]
    fn test_memory_slot_failing_writes() {
        let slot = MemorySlot::with_contents("before");
        slot.fail_writes(true);

        assert!(slot.write("after").is_err());
        assert_eq!(slot.get().as_deref(), Some("before"));

        slot.fail_writes(false);
        slot.write("after").unwrap();
        assert_eq!(slot.get().as_deref(), Some("after"));
    }
}
