//! Storage layer for the journal
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod document;
pub mod entries;
pub mod file_io;

pub use document::{deserialize, serialize, JournalDocument};
pub use entries::EntryRepository;
pub use file_io::{json_file_valid, read_bytes, write_json_atomic, write_text_atomic};

use crate::config::paths::JournalPaths;
use crate::error::JournalError;

/// Main storage coordinator
pub struct Storage {
    paths: JournalPaths,
    pub entries: EntryRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: JournalPaths) -> Result<Self, JournalError> {
        paths.ensure_directories()?;

        Ok(Self {
            entries: EntryRepository::new(paths.journal_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &JournalPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), JournalError> {
        self.entries.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), JournalError> {
        self.entries.save()
    }

    /// Check whether a journal has ever been written
    pub fn is_initialized(&self) -> bool {
        self.paths.journal_file().exists()
    }
}
