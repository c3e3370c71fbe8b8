//! Entry repository
//!
//! Holds the ordered entry sequence, the theme preference and the edit-mode
//! marker in memory, and mirrors the first two to `journal.json`.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::JournalError;
use crate::models::{Entry, EntryId, Theme};

use super::document;
use super::file_io::{read_bytes, write_text_atomic};

/// Repository for entry persistence
pub struct EntryRepository {
    path: PathBuf,
    /// Newest first
    entries: RwLock<Vec<Entry>>,
    theme: RwLock<Theme>,
    /// Entry currently being edited, not persisted
    editing: RwLock<Option<EntryId>>,
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, JournalError> {
    lock.read()
        .map_err(|e| JournalError::Storage(format!("Failed to acquire read lock: {}", e)))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, JournalError> {
    lock.write()
        .map_err(|e| JournalError::Storage(format!("Failed to acquire write lock: {}", e)))
}

impl EntryRepository {
    /// Create a new, empty entry repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            entries: RwLock::new(Vec::new()),
            theme: RwLock::new(Theme::default()),
            editing: RwLock::new(None),
        }
    }

    /// Load entries and theme from disk
    ///
    /// A missing file yields an empty journal. An unreadable document is
    /// discarded with a diagnostic rather than reported.
    pub fn load(&self) -> Result<(), JournalError> {
        let doc = match read_bytes(&self.path)? {
            Some(raw) => document::deserialize(&raw),
            None => document::JournalDocument::default(),
        };

        let theme = doc.theme();
        *write(&self.entries)? = doc.entries;
        *write(&self.theme)? = theme;
        *write(&self.editing)? = None;

        Ok(())
    }

    /// Save entries and theme to disk
    pub fn save(&self) -> Result<(), JournalError> {
        let entries = read(&self.entries)?;
        let theme = *read(&self.theme)?;

        let raw = document::serialize(&entries, theme)?;
        write_text_atomic(&self.path, &raw).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "failed to persist journal");
            e
        })
    }

    /// Get an entry by ID
    pub fn get(&self, id: EntryId) -> Result<Option<Entry>, JournalError> {
        Ok(read(&self.entries)?.iter().find(|e| e.id == id).cloned())
    }

    /// Get all entries, newest first
    pub fn get_all(&self) -> Result<Vec<Entry>, JournalError> {
        Ok(read(&self.entries)?.clone())
    }

    /// Entries matching a predicate, in store order
    pub fn find_all<F>(&self, predicate: F) -> Result<Vec<Entry>, JournalError>
    where
        F: Fn(&Entry) -> bool,
    {
        Ok(read(&self.entries)?
            .iter()
            .filter(|e| predicate(e))
            .cloned()
            .collect())
    }

    /// Highest id currently held
    pub fn last_id(&self) -> Result<Option<EntryId>, JournalError> {
        Ok(read(&self.entries)?.iter().map(|e| e.id).max())
    }

    /// Insert an entry at the head of the sequence
    pub fn insert_front(&self, entry: Entry) -> Result<(), JournalError> {
        write(&self.entries)?.insert(0, entry);
        Ok(())
    }

    /// Replace the entry with the same id in place
    ///
    /// Returns false if no such entry exists.
    pub fn replace(&self, entry: Entry) -> Result<bool, JournalError> {
        let mut entries = write(&self.entries)?;
        match entries.iter_mut().find(|e| e.id == entry.id) {
            Some(slot) => {
                *slot = entry;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete an entry, returning it if it existed
    pub fn delete(&self, id: EntryId) -> Result<Option<Entry>, JournalError> {
        let mut entries = write(&self.entries)?;
        let removed = entries
            .iter()
            .position(|e| e.id == id)
            .map(|index| entries.remove(index));
        Ok(removed)
    }

    /// Remove every entry, returning how many were removed
    pub fn clear(&self) -> Result<usize, JournalError> {
        let mut entries = write(&self.entries)?;
        let count = entries.len();
        entries.clear();
        Ok(count)
    }

    /// Count entries
    pub fn count(&self) -> Result<usize, JournalError> {
        Ok(read(&self.entries)?.len())
    }

    pub fn theme(&self) -> Result<Theme, JournalError> {
        Ok(*read(&self.theme)?)
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), JournalError> {
        *write(&self.theme)? = theme;
        Ok(())
    }

    /// Id of the entry in edit mode, if any
    pub fn editing(&self) -> Result<Option<EntryId>, JournalError> {
        Ok(*read(&self.editing)?)
    }

    pub fn set_editing(&self, id: Option<EntryId>) -> Result<(), JournalError> {
        *write(&self.editing)? = id;
        Ok(())
    }
}
