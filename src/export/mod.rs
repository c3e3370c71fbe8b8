//! Export module for the journal
//!
//! One-way exports of every entry:
//! - Text: the formatted journal dump
//! - JSON: machine-readable, with schema version and metadata
//! - YAML: human-readable form of the JSON export

pub mod json;
pub mod text;
pub mod yaml;

pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use text::{export_filename, export_text, render_text};
pub use yaml::export_full_yaml;

use crate::error::{JournalError, JournalResult};
use crate::models::Entry;

fn ensure_not_empty(entries: &[Entry]) -> JournalResult<()> {
    if entries.is_empty() {
        return Err(JournalError::Export("No entries to export".into()));
    }
    Ok(())
}
