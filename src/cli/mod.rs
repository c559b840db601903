//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod history;
pub mod transaction;

pub use export::{handle_export, ExportFormat};
pub use history::handle_history;
pub use transaction::{
    handle_add, handle_delete, handle_list, handle_show, handle_summary, AddArgs,
};
