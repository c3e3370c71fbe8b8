//! YAML Export functionality
//!
//! Exports the whole journal to YAML for a human-readable backup.

use std::io::Write;

use crate::error::{JournalError, JournalResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

use super::ensure_not_empty;

/// Export the full journal to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> JournalResult<usize> {
    let export = FullExport::from_storage(storage)?;
    ensure_not_empty(&export.entries)?;

    let header = format!(
        "# Daily Journal Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| JournalError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| JournalError::Export(e.to_string()))?;

    Ok(export.metadata.entry_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::JournalPaths;
    use crate::models::EntryDraft;
    use crate::services::JournalService;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_export() {
        let temp_dir = TempDir::new().unwrap();
        let paths = JournalPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        JournalService::new(&storage)
            .create(&EntryDraft::new("A quiet evening").with_tags(["home"]))
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&storage, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Daily Journal Export"));
        assert!(yaml.contains("A quiet evening"));

        let parsed: FullExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.entries[0].tags, vec!["home"]);
    }
}
