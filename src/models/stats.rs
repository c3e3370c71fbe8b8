//! Aggregate statistics over the entry sequence

use chrono::{Datelike, Local};
use serde::Serialize;
use std::collections::BTreeMap;

use super::entry::Entry;

/// Summary of the journal, computed in one pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_entries: usize,
    pub total_words: usize,
    /// Rounded to the nearest integer; 0 when empty
    pub average_words_per_entry: usize,
    /// Display date of the first entry in store order
    pub newest_entry: Option<String>,
    /// Display date of the last entry in store order
    pub oldest_entry: Option<String>,
    pub categories: BTreeMap<String, usize>,
    /// Entries without a mood are not counted
    pub moods: BTreeMap<String, usize>,
    /// Year covered by `entries_per_month`
    pub year: i32,
    /// Entry counts for January..December of `year`, by local timestamp
    pub entries_per_month: [usize; 12],
}

impl Statistics {
    /// Compute statistics for entries in store order (newest first)
    pub fn compute(entries: &[Entry], year: i32) -> Self {
        let mut stats = Self {
            year,
            ..Self::default()
        };

        for entry in entries {
            stats.total_entries += 1;
            stats.total_words += entry.word_count();
            *stats.categories.entry(entry.category.clone()).or_insert(0) += 1;
            if let Some(mood) = entry.mood_label() {
                *stats.moods.entry(mood.to_string()).or_insert(0) += 1;
            }

            let local = entry.timestamp.with_timezone(&Local);
            if local.year() == year {
                stats.entries_per_month[local.month0() as usize] += 1;
            }
        }

        if stats.total_entries > 0 {
            stats.average_words_per_entry =
                (stats.total_words as f64 / stats.total_entries as f64).round() as usize;
        }
        stats.newest_entry = entries.first().map(|e| e.date.clone());
        stats.oldest_entry = entries.last().map(|e| e.date.clone());

        stats
    }

    pub fn is_empty(&self) -> bool {
        self.total_entries == 0
    }
}
