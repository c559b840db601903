//! Dialog modules for the TUI
//!
//! Contains modal dialogs: transaction entry, delete confirmation, help

pub mod confirm;
pub mod help;
pub mod transaction;
