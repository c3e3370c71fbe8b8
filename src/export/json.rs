//! JSON Export functionality
//!
//! Exports the whole journal to JSON with schema versioning and a small
//! metadata block.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{JournalError, JournalResult};
use crate::models::Entry;
use crate::storage::Storage;

use super::ensure_not_empty;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full journal export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Theme preference at export time
    pub theme: String,

    /// All entries, newest first
    pub entries: Vec<Entry>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub entry_count: usize,
    pub word_count: usize,
    pub newest_entry: Option<DateTime<Utc>>,
    pub oldest_entry: Option<DateTime<Utc>>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> JournalResult<Self> {
        let entries = storage.entries.get_all()?;
        let theme = storage.entries.theme()?;

        let metadata = ExportMetadata {
            entry_count: entries.len(),
            word_count: entries.iter().map(Entry::word_count).sum(),
            newest_entry: entries.iter().map(|e| e.timestamp).max(),
            oldest_entry: entries.iter().map(|e| e.timestamp).min(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            theme: theme.to_string(),
            entries,
            metadata,
        })
    }
}

/// Export the full journal to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> JournalResult<usize> {
    let export = FullExport::from_storage(storage)?;
    ensure_not_empty(&export.entries)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| JournalError::Export(e.to_string()))?;

    Ok(export.metadata.entry_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::JournalPaths;
    use crate::models::EntryDraft;
    use crate::services::JournalService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = JournalPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_full_export() {
        let (_temp_dir, storage) = create_test_storage();
        let service = JournalService::new(&storage);
        let first = service.create(&EntryDraft::new("one two")).unwrap();
        let second = service.create(&EntryDraft::new("three")).unwrap();

        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.theme, "light");
        assert_eq!(export.metadata.entry_count, 2);
        assert_eq!(export.metadata.word_count, 3);
        assert_eq!(export.metadata.newest_entry, Some(second.timestamp));
        assert_eq!(export.metadata.oldest_entry, Some(first.timestamp));
    }

    #[test]
    fn test_json_output_parses() {
        let (_temp_dir, storage) = create_test_storage();
        JournalService::new(&storage)
            .create(&EntryDraft::new("hello").with_category("Personal"))
            .unwrap();

        let mut output = Vec::new();
        assert_eq!(export_full_json(&storage, &mut output, true).unwrap(), 1);

        let parsed: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.entries[0].category, "Personal");
    }

    #[test]
    fn test_empty_journal_not_exported() {
        let (_temp_dir, storage) = create_test_storage();
        let mut output = Vec::new();
        assert!(export_full_json(&storage, &mut output, false).is_err());
    }
}
