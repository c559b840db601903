//! Configuration module for Money Moves
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MoneyPaths;
pub use settings::{Settings, Theme};
