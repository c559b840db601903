//! Money Moves - terminal income and expense tracker
//!
//! Records income and expense transactions in a local ledger file and shows
//! running totals, either in an interactive TUI or from the command line.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, money, categories and ids
//! - `storage`: The durable JSON slot and its persistence adapter
//! - `services`: The ledger (validation, totals, two-step delete)
//! - `audit`: Append-only log of every change
//! - `cli`, `display`, `export`: Command-line surface
//! - `tui`: The interactive interface
//!
//! # Example
//!
//! ```rust,ignore
//! use money_moves::config::MoneyPaths;
//! use money_moves::services::Ledger;
//! use money_moves::storage::open_ledger_storage;
//!
//! let paths = MoneyPaths::new()?;
//! let ledger = Ledger::hydrate(Box::new(open_ledger_storage(&paths)?));
//! println!("Net balance: {}", ledger.totals().net_balance);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::MoneyError;
