//! User settings for Money Moves
//!
//! Manages user preferences: currency symbol, date format and the theme the
//! TUI starts in.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::MoneyPaths;
use crate::error::MoneyError;

/// Display theme for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// User settings for Money Moves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for every amount shown
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format) for display
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Theme the TUI starts in. Toggling at runtime does not write this back.
    #[serde(default)]
    pub theme: Theme,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "৳".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &MoneyPaths) -> Result<Self, MoneyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| MoneyError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                MoneyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Defaults until a config file exists
            Ok(Settings::default())
        }
    }

    /// Format a date with the configured format, falling back to ISO dates
    /// when the configured format is not a valid strftime string
    pub fn format_date(&self, date: NaiveDate) -> String {
        let valid = StrftimeItems::new(&self.date_format).all(|item| !matches!(item, Item::Error));
        let format = if valid {
            self.date_format.as_str()
        } else {
            "%Y-%m-%d"
        };
        date.format(format).to_string()
    }
}
