//! Durable representation of the journal
//!
//! One JSON document holding the entry sequence and the theme preference:
//!
//! ```json
//! { "entries": [ ... ], "theme": "light" }
//! ```
//!
//! Parsing never fails. The two keys are read independently: an unusable
//! `theme` only resets the theme, and an unusable `entries` list only empties
//! the journal. Anything that is not a JSON object yields an empty journal and
//! a `warn` diagnostic. Entries are always re-sorted newest-first.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{JournalError, JournalResult};
use crate::models::{Entry, Theme};

/// Owned, parsed form of the durable document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalDocument {
    pub entries: Vec<Entry>,

    /// Stored as free text; see [`Theme::from_label`]
    pub theme: String,
}

impl JournalDocument {
    pub fn theme(&self) -> Theme {
        Theme::from_label(&self.theme)
    }
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    entries: &'a [Entry],
    theme: &'a str,
}

/// Produce the canonical persisted form
pub fn serialize(entries: &[Entry], theme: Theme) -> JournalResult<String> {
    let doc = DocumentRef {
        entries,
        theme: theme.as_str(),
    };
    serde_json::to_string_pretty(&doc)
        .map_err(|e| JournalError::Storage(format!("Failed to serialize journal: {}", e)))
}

/// Parse the persisted form, recovering to an empty journal on any failure
///
/// Takes raw bytes so that invalid UTF-8 is treated like any other corruption.
pub fn deserialize(raw: impl AsRef<[u8]>) -> JournalDocument {
    let value: Value = match serde_json::from_slice(raw.as_ref()) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable journal data");
            return JournalDocument::default();
        }
    };

    let Some(fields) = value.as_object() else {
        tracing::warn!("discarding journal data that is not an object");
        return JournalDocument::default();
    };

    JournalDocument {
        entries: entries_from(fields.get("entries")),
        theme: fields
            .get("theme")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

fn entries_from(value: Option<&Value>) -> Vec<Entry> {
    let Some(value) = value.filter(|v| !v.is_null()) else {
        return Vec::new();
    };

    match Vec::<Entry>::deserialize(value) {
        Ok(mut entries) => {
            sort_newest_first(&mut entries);
            entries
        }
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable journal entries");
            Vec::new()
        }
    }
}

/// Order entries by timestamp, newest first
pub fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, EntryId};
    use chrono::{Local, TimeZone};

    fn entry(content: &str, day: u32) -> Entry {
        let at = Local.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap();
        Entry::from_draft(
            EntryId::from_millis(day as i64),
            &EntryDraft::new(content).with_category("Personal"),
            at,
        )
    }

    #[test]
    fn test_round_trip_resorts() {
        // Oldest first on purpose
        let entries = vec![entry("a", 1), entry("b", 3), entry("c", 2)];

        let raw = serialize(&entries, Theme::Dark).unwrap();
        let doc = deserialize(&raw);

        assert_eq!(doc.theme(), Theme::Dark);
        let contents: Vec<_> = doc.entries.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["b", "c", "a"]);

        let mut expected = entries.clone();
        sort_newest_first(&mut expected);
        assert_eq!(doc.entries, expected);
    }

    #[test]
    fn test_field_names() {
        let raw = serialize(&[entry("a", 1)], Theme::Light).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(value["theme"], "light");
        let first = &value["entries"][0];
        for field in [
            "id", "title", "content", "category", "tags", "mood", "image", "date", "time",
            "timestamp",
        ] {
            assert!(first.get(field).is_some(), "missing field {}", field);
        }
    }

    #[test]
    fn test_corrupt_input_is_empty() {
        let doc = deserialize("{ this is not json");
        assert!(doc.entries.is_empty());
        assert_eq!(doc.theme(), Theme::Light);

        let doc = deserialize(r#"{"entries": [{"id": "nope"}]}"#);
        assert!(doc.entries.is_empty());
    }

    #[test]
    fn test_missing_keys_default() {
        let doc = deserialize("{}");
        assert!(doc.entries.is_empty());
        assert_eq!(doc.theme(), Theme::Light);

        let doc = deserialize(r#"{"theme": "neon"}"#);
        assert_eq!(doc.theme(), Theme::Light);
    }

    #[test]
    fn test_bad_theme_keeps_entries() {
        let raw = serialize(&[entry("kept", 1)], Theme::Dark).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        for theme in [serde_json::Value::Null, serde_json::json!(5)] {
            value["theme"] = theme;
            let doc = deserialize(value.to_string());
            assert_eq!(doc.entries.len(), 1);
            assert_eq!(doc.entries[0].content, "kept");
            assert_eq!(doc.theme(), Theme::Light);
        }
    }

    #[test]
    fn test_bad_entries_keep_theme() {
        let doc = deserialize(r#"{"entries": 7, "theme": "dark"}"#);
        assert!(doc.entries.is_empty());
        assert_eq!(doc.theme(), Theme::Dark);

        let doc = deserialize(r#"{"entries": null, "theme": "dark"}"#);
        assert!(doc.entries.is_empty());
        assert_eq!(doc.theme(), Theme::Dark);
    }

    #[test]
    fn test_invalid_utf8_is_empty() {
        let doc = deserialize([0xff, 0xfe, b'{', b'}']);
        assert!(doc.entries.is_empty());
        assert_eq!(doc.theme(), Theme::Light);

        let doc = deserialize("[1, 2, 3]");
        assert!(doc.entries.is_empty());
    }
}
