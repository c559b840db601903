//! Storage layer for Money Moves
//!
//! The ledger is kept in one durable slot: a JSON file written atomically in
//! normal use, or an in-memory slot in tests.

pub mod file_io;
pub mod persistence;
pub mod slot;

pub use file_io::{read_text, write_text_atomic};
pub use persistence::{JsonPersistence, Persistence, LEDGER_SLOT};
pub use slot::{FileSlot, MemorySlot, Slot};

use crate::config::paths::MoneyPaths;
use crate::error::MoneyError;

/// Build the persistence adapter for the ledger file under `paths`
pub fn open_ledger_storage(paths: &MoneyPaths) -> Result<JsonPersistence<FileSlot>, MoneyError> {
    paths.ensure_directories()?;
    Ok(JsonPersistence::new(FileSlot::new(paths.ledger_file())))
}
