//! Journal service
//!
//! Business logic for entries: validation, identity, edit mode, searching and
//! statistics. Every mutation is written through to disk; a failed write is
//! returned as a storage error without undoing the in-memory change.

use chrono::{Datelike, Local, Utc};

use crate::error::{JournalError, JournalResult};
use crate::models::{Entry, EntryDraft, EntryFilter, EntryId, Statistics, Theme};
use crate::storage::Storage;

/// Service for journal entry management
pub struct JournalService<'a> {
    storage: &'a Storage,
}

impl<'a> JournalService<'a> {
    /// Create a new journal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new entry at the head of the journal
    pub fn create(&self, draft: &EntryDraft) -> JournalResult<Entry> {
        draft.validate()?;

        let now = Local::now();
        let id = EntryId::allocate(now.with_timezone(&Utc), self.storage.entries.last_id()?);
        let entry = Entry::from_draft(id, draft, now);

        self.storage.entries.insert_front(entry.clone())?;
        tracing::debug!(id = %entry.id, "created entry");
        self.storage.entries.save()?;

        Ok(entry)
    }

    /// Overwrite an existing entry in place
    ///
    /// The entry keeps its position and its display date/time; only the
    /// timestamp is refreshed. Leaves edit mode on success.
    pub fn update(&self, id: EntryId, draft: &EntryDraft) -> JournalResult<Entry> {
        let mut entry = self
            .storage
            .entries
            .get(id)?
            .ok_or_else(|| JournalError::entry_not_found(id))?;

        draft.validate()?;

        entry.apply_draft(draft, Utc::now());
        if !self.storage.entries.replace(entry.clone())? {
            return Err(JournalError::entry_not_found(id));
        }
        self.storage.entries.set_editing(None)?;
        tracing::debug!(id = %entry.id, "updated entry");
        self.storage.entries.save()?;

        Ok(entry)
    }

    /// Save a draft: updates the entry in edit mode, or creates a new one
    pub fn save_draft(&self, draft: &EntryDraft) -> JournalResult<Entry> {
        match self.storage.entries.editing()? {
            Some(id) => self.update(id, draft),
            None => self.create(draft),
        }
    }

    /// Delete an entry; deleting an unknown id is not an error
    pub fn delete(&self, id: EntryId) -> JournalResult<Option<Entry>> {
        let removed = self.storage.entries.delete(id)?;

        if removed.is_some() {
            tracing::debug!(id = %id, "deleted entry");
            if self.storage.entries.editing()? == Some(id) {
                self.storage.entries.set_editing(None)?;
            }
        }
        self.storage.entries.save()?;

        Ok(removed)
    }

    /// Remove every entry, returning how many were removed
    pub fn clear(&self) -> JournalResult<usize> {
        let count = self.storage.entries.clear()?;
        self.storage.entries.set_editing(None)?;
        tracing::debug!(count, "cleared journal");
        self.storage.entries.save()?;

        Ok(count)
    }

    /// Enter edit mode for an entry and return its current values
    pub fn begin_edit(&self, id: EntryId) -> JournalResult<Entry> {
        let entry = self
            .storage
            .entries
            .get(id)?
            .ok_or_else(|| JournalError::entry_not_found(id))?;

        self.storage.entries.set_editing(Some(id))?;
        Ok(entry)
    }

    /// Leave edit mode without saving
    pub fn cancel_edit(&self) -> JournalResult<()> {
        self.storage.entries.set_editing(None)
    }

    /// Id of the entry in edit mode
    pub fn editing(&self) -> JournalResult<Option<EntryId>> {
        self.storage.entries.editing()
    }

    /// Get an entry by ID
    pub fn get(&self, id: EntryId) -> JournalResult<Option<Entry>> {
        self.storage.entries.get(id)
    }

    /// Find an entry from a user-supplied id string
    pub fn find(&self, identifier: &str) -> JournalResult<Entry> {
        let id = EntryId::parse(identifier).map_err(|_| {
            JournalError::InvalidInput(format!("Invalid entry id: '{}'", identifier))
        })?;

        self.get(id)?
            .ok_or_else(|| JournalError::entry_not_found(id))
    }

    /// All entries, newest first
    pub fn list(&self) -> JournalResult<Vec<Entry>> {
        self.storage.entries.get_all()
    }

    /// Entries matching a filter, in journal order
    pub fn query(&self, filter: &EntryFilter) -> JournalResult<Vec<Entry>> {
        self.storage.entries.find_all(|e| filter.matches(e))
    }

    /// Statistics with a monthly histogram for the current year
    pub fn stats(&self) -> JournalResult<Statistics> {
        self.stats_for_year(Local::now().year())
    }

    /// Statistics with a monthly histogram for the given year
    pub fn stats_for_year(&self, year: i32) -> JournalResult<Statistics> {
        let entries = self.storage.entries.get_all()?;
        Ok(Statistics::compute(&entries, year))
    }

    /// Count entries
    pub fn count(&self) -> JournalResult<usize> {
        self.storage.entries.count()
    }

    /// Current theme preference
    pub fn theme(&self) -> JournalResult<Theme> {
        self.storage.entries.theme()
    }

    /// Set and persist the theme preference
    pub fn set_theme(&self, theme: Theme) -> JournalResult<Theme> {
        self.storage.entries.set_theme(theme)?;
        self.storage.entries.save()?;
        Ok(theme)
    }

    /// Flip between light and dark, persisting the result
    pub fn toggle_theme(&self) -> JournalResult<Theme> {
        let theme = self.theme()?.toggled();
        self.set_theme(theme)
    }
}
