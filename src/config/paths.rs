//! Path management for Money Moves
//!
//! ## Path Resolution Order
//!
//! 1. `MONEY_MOVES_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `money-moves`
//!    (`~/.config/money-moves` on Linux, `%APPDATA%\money-moves\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::MoneyError;
use crate::storage::LEDGER_SLOT;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "MONEY_MOVES_DATA_DIR";

/// Manages all paths used by Money Moves
#[derive(Debug, Clone)]
pub struct MoneyPaths {
    /// Base directory for all Money Moves data
    base_dir: PathBuf,
}

impl MoneyPaths {
    /// Create a new MoneyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, MoneyError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create MoneyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the durable ledger slot
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join(format!("{}.json", LEDGER_SLOT))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), MoneyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MoneyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MoneyError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, MoneyError> {
    ProjectDirs::from("", "", "money-moves")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| MoneyError::Config("Could not determine home directory".into()))
}
