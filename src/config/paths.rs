//! Path management for the journal
//!
//! ## Path Resolution Order
//!
//! 1. `JOURNAL_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory, e.g. `~/.config/daily-journal`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::JournalError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "JOURNAL_DATA_DIR";

/// Manages all paths used by the journal
#[derive(Debug, Clone)]
pub struct JournalPaths {
    /// Base directory for all journal data
    base_dir: PathBuf,
}

impl JournalPaths {
    /// Create a new JournalPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, JournalError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create JournalPaths with a custom base directory (useful for testing)
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

    /// Default destination for exported files (<base>/exports/)
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the durable journal document
    pub fn journal_file(&self) -> PathBuf {
        self.data_dir().join("journal.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), JournalError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| JournalError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| JournalError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, JournalError> {
    ProjectDirs::from("", "", "daily-journal")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| JournalError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = JournalPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = JournalPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = JournalPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.journal_file(),
            temp_dir.path().join("data").join("journal.json")
        );
    }
}
