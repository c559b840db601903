//! Service layer for Money Moves
//!
//! Business logic on top of the storage layer: validation, derived totals
//! and the confirm-then-delete protocol.

pub mod ledger;

pub use ledger::{DeleteRequest, Ledger, Totals, WriteOutcome};
