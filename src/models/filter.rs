//! Entry search filter

use super::entry::Entry;

/// Text search plus exact category and mood filters
///
/// Empty or absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub text: String,
    pub category: Option<String>,
    pub mood: Option<String>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
            && active(self.category.as_deref()).is_none()
            && active(self.mood.as_deref()).is_none()
    }

    /// Check an entry against every criterion
    pub fn matches(&self, entry: &Entry) -> bool {
        self.matches_text(entry) && self.matches_category(entry) && self.matches_mood(entry)
    }

    fn matches_text(&self, entry: &Entry) -> bool {
        let needle = self.text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [&entry.title, &entry.content, &entry.date]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_category(&self, entry: &Entry) -> bool {
        match active(self.category.as_deref()) {
            Some(category) => entry.category.trim().to_lowercase() == category.to_lowercase(),
            None => true,
        }
    }

    fn matches_mood(&self, entry: &Entry) -> bool {
        match active(self.mood.as_deref()) {
            Some(mood) => entry
                .mood_label()
                .map(|m| m.trim().to_lowercase() == mood.to_lowercase())
                .unwrap_or(false),
            None => true,
        }
    }
}

fn active(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, EntryId};
    use chrono::{Local, TimeZone};

    fn entry(title: &str, content: &str, category: &str, mood: Option<&str>) -> Entry {
        let mut draft = EntryDraft::new(content)
            .with_title(title)
            .with_category(category);
        if let Some(mood) = mood {
            draft = draft.with_mood(mood);
        }
        let at = Local.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Entry::from_draft(EntryId::from_millis(1), &draft, at)
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = EntryFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&entry("", "anything", "Work", None)));
    }

    #[test]
    fn test_text_matches_title_content_and_date() {
        let e = entry("Morning Walk", "Saw a heron", "Personal", Some("Happy"));

        assert!(EntryFilter::new().with_text("walk").matches(&e));
        assert!(EntryFilter::new().with_text("HERON").matches(&e));
        assert!(EntryFilter::new().with_text("march").matches(&e));
        assert!(!EntryFilter::new().with_text("evening").matches(&e));
    }

    #[test]
    fn test_category_and_mood_are_exact_case_insensitive() {
        let e = entry("", "content", "Personal", Some("Happy"));

        assert!(EntryFilter::new().with_category("personal").matches(&e));
        assert!(!EntryFilter::new().with_category("person").matches(&e));
        assert!(EntryFilter::new().with_mood("HAPPY").matches(&e));
        assert!(!EntryFilter::new().with_mood("Sad").matches(&e));
        assert!(EntryFilter::new().with_category("").with_mood("").matches(&e));
    }

    #[test]
    fn test_mood_filter_excludes_entries_without_mood() {
        let e = entry("", "content", "Work", None);
        assert!(!EntryFilter::new().with_mood("Happy").matches(&e));
    }
}
