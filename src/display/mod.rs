//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for the CLI.

pub mod transaction;

pub use transaction::{
    format_signed_amount, format_totals, format_transaction_details, format_transaction_table,
};
