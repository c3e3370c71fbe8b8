//! User settings for the journal
//!
//! Quote source configuration and defaults applied to new drafts.

use serde::{Deserialize, Serialize};

use super::paths::JournalPaths;
use crate::error::JournalError;
use crate::storage::write_json_atomic;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Random-quote endpoint
    #[serde(default = "default_quote_endpoint")]
    pub quote_endpoint: String,

    /// Upper bound on a quote request, in seconds
    #[serde(default = "default_quote_timeout_secs")]
    pub quote_timeout_secs: u64,

    /// Never touch the network; always serve a built-in quote
    #[serde(default)]
    pub offline_quotes: bool,

    /// Category for drafts that do not name one
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Mood for drafts that do not name one
    #[serde(default = "default_mood")]
    pub default_mood: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_quote_endpoint() -> String {
    "https://api.quotable.io/random".to_string()
}

fn default_quote_timeout_secs() -> u64 {
    5
}

fn default_category() -> String {
    "Personal".to_string()
}

fn default_mood() -> String {
    "Happy".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            quote_endpoint: default_quote_endpoint(),
            quote_timeout_secs: default_quote_timeout_secs(),
            offline_quotes: false,
            default_category: default_category(),
            default_mood: default_mood(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &JournalPaths) -> Result<Self, JournalError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                JournalError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                JournalError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &JournalPaths) -> Result<(), JournalError> {
        paths.ensure_directories()?;

        write_json_atomic(paths.settings_file(), self)
    }
}
