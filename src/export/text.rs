//! Plain-text export
//!
//! A human-readable dump of every entry, newest first, numbered down from the
//! total.

use chrono::{Local, NaiveDate};
use std::io::Write;

use crate::error::{JournalError, JournalResult};
use crate::models::Entry;
use crate::storage::Storage;

use super::ensure_not_empty;

const BANNER: &str = "📖 MY DAILY JOURNAL";

/// File name for an export made on `date`
pub fn export_filename(date: NaiveDate) -> String {
    format!("my-daily-journal-{}.txt", date.format("%Y-%m-%d"))
}

/// Render entries (in journal order) as the text export
pub fn render_text(entries: &[Entry], exported_on: NaiveDate) -> String {
    let total = entries.len();
    let mut out = String::new();

    out.push_str(BANNER);
    out.push('\n');
    out.push_str(&"=".repeat(52));
    out.push_str("\n\n");

    for (index, entry) in entries.iter().enumerate() {
        out.push_str(&format!("Entry {}\n", total - index));
        out.push_str(&format!("Category: {}\n", entry.category));
        out.push_str(&format!("Tags: {}\n", entry.tags_display()));
        out.push_str(&format!(
            "Mood: {}\n",
            entry.mood_label().unwrap_or("Not specified")
        ));
        out.push_str(&format!("Date: {} at {}\n", entry.date, entry.time));
        out.push_str(&"-".repeat(30));
        out.push('\n');
        out.push_str(&entry.content);
        out.push_str("\n\n");
    }

    out.push_str(&format!(
        "\nExported on: {}\n",
        exported_on.format("%-m/%-d/%Y")
    ));
    out.push_str(&format!("Total entries: {}", total));

    out
}

/// Write the text export of the whole journal, returning the entry count
pub fn export_text<W: Write>(storage: &Storage, writer: &mut W) -> JournalResult<usize> {
    let entries = storage.entries.get_all()?;
    ensure_not_empty(&entries)?;

    let text = render_text(&entries, Local::now().date_naive());
    writer
        .write_all(text.as_bytes())
        .map_err(|e| JournalError::Export(e.to_string()))?;

    Ok(entries.len())
}
