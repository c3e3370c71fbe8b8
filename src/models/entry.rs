//! Journal entry model
//!
//! An entry is created from a validated [`EntryDraft`]. Its display date and
//! time are fixed at creation; edits only refresh the sortable `timestamp`.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;

/// Maximum entry content length, in characters
pub const MAX_CONTENT_LENGTH: usize = 1000;

/// Title used when a draft has none
pub const DEFAULT_TITLE: &str = "Untitled Entry";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// A single journal record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, derived from the creation instant
    pub id: EntryId,

    /// Entry title
    #[serde(default = "default_title")]
    pub title: String,

    /// Entry body, trimmed, at most [`MAX_CONTENT_LENGTH`] characters
    pub content: String,

    /// Category label (opaque)
    #[serde(default)]
    pub category: String,

    /// Trimmed, non-empty tags in input order
    #[serde(default)]
    pub tags: Vec<String>,

    /// Mood label (opaque)
    #[serde(default)]
    pub mood: Option<String>,

    /// Reference to an attached image. Only the reference is persisted.
    #[serde(default)]
    pub image: Option<String>,

    /// Display date, e.g. "Friday, March 1, 2024"
    pub date: String,

    /// Display time, e.g. "09:05 AM"
    pub time: String,

    /// Creation instant, refreshed on every edit
    pub timestamp: DateTime<Utc>,
}

impl Entry {
    /// Build a new entry from a draft at the given local instant
    ///
    /// The draft is assumed to be validated already.
    pub fn from_draft(id: EntryId, draft: &EntryDraft, now: DateTime<Local>) -> Self {
        Self {
            id,
            title: draft.normalized_title(),
            content: draft.normalized_content(),
            category: draft.category.trim().to_string(),
            tags: draft.normalized_tags(),
            mood: draft.normalized_mood(),
            image: draft.normalized_image(),
            date: format_display_date(&now),
            time: format_display_time(&now),
            timestamp: now.with_timezone(&Utc),
        }
    }

    /// Overwrite the editable fields from a draft
    ///
    /// The image is only replaced when the draft carries one. `date` and
    /// `time` are left untouched.
    pub fn apply_draft(&mut self, draft: &EntryDraft, now: DateTime<Utc>) {
        self.title = draft.normalized_title();
        self.content = draft.normalized_content();
        self.category = draft.category.trim().to_string();
        self.tags = draft.normalized_tags();
        self.mood = draft.normalized_mood();
        if let Some(image) = draft.normalized_image() {
            self.image = Some(image);
        }
        self.timestamp = now;
    }

    /// Number of whitespace-separated words in the content
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Mood label if one is set and non-empty
    pub fn mood_label(&self) -> Option<&str> {
        self.mood.as_deref().filter(|m| !m.trim().is_empty())
    }

    /// Tags joined for display, or "None"
    pub fn tags_display(&self) -> String {
        if self.tags.is_empty() {
            "None".to_string()
        } else {
            self.tags.join(", ")
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} at {})", self.title, self.date, self.time)
    }
}

/// Unsaved field values submitted to create or update an entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub mood: Option<String>,
    pub image: Option<String>,
}

impl EntryDraft {
    /// Create a draft holding only content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Validate the draft content
    pub fn validate(&self) -> Result<(), ValidationKind> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(ValidationKind::EmptyContent);
        }

        let length = content.chars().count();
        if length > MAX_CONTENT_LENGTH {
            return Err(ValidationKind::TooLong {
                length,
                max: MAX_CONTENT_LENGTH,
            });
        }

        Ok(())
    }

    fn normalized_title(&self) -> String {
        let title = self.title.trim();
        if title.is_empty() {
            default_title()
        } else {
            title.to_string()
        }
    }

    fn normalized_content(&self) -> String {
        self.content.trim().to_string()
    }

    fn normalized_tags(&self) -> Vec<String> {
        self.tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn normalized_mood(&self) -> Option<String> {
        non_empty(self.mood.as_deref())
    }

    fn normalized_image(&self) -> Option<String> {
        non_empty(self.image.as_deref())
    }
}

/// Pre-populate a draft from an existing entry
///
/// The image is left unset so that saving the draft keeps the current one.
impl From<&Entry> for EntryDraft {
    fn from(entry: &Entry) -> Self {
        Self {
            title: entry.title.clone(),
            content: entry.content.clone(),
            category: entry.category.clone(),
            tags: entry.tags.clone(),
            mood: entry.mood.clone(),
            image: None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Split a comma-separated tag list, dropping blanks
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Long display date, e.g. "Friday, March 1, 2024"
pub fn format_display_date(at: &DateTime<Local>) -> String {
    at.format("%A, %B %-d, %Y").to_string()
}

/// Two-digit display time, e.g. "09:05 AM"
pub fn format_display_time(at: &DateTime<Local>) -> String {
    at.format("%I:%M %p").to_string()
}

/// Why a draft was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    EmptyContent,
    TooLong { length: usize, max: usize },
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "Please write something before saving"),
            Self::TooLong { length, max } => write!(
                f,
                "Entry exceeds maximum length of {} characters (got {})",
                max, length
            ),
        }
    }
}

impl std::error::Error for ValidationKind {}

/// How close the content is to the length limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharCountLevel {
    Normal,
    Approaching,
    NearLimit,
    OverLimit,
}

/// Character counter shown while composing an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCount {
    pub length: usize,
    pub max: usize,
}

impl CharCount {
    pub fn new(content: &str) -> Self {
        Self {
            length: content.chars().count(),
            max: MAX_CONTENT_LENGTH,
        }
    }

    pub fn level(&self) -> CharCountLevel {
        // Integer thresholds at 90% and 70% of max
        if self.length > self.max {
            CharCountLevel::OverLimit
        } else if self.length * 10 > self.max * 9 {
            CharCountLevel::NearLimit
        } else if self.length * 10 > self.max * 7 {
            CharCountLevel::Approaching
        } else {
            CharCountLevel::Normal
        }
    }

    pub fn can_save(&self) -> bool {
        self.length > 0 && self.length <= self.max
    }
}

impl fmt::Display for CharCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} characters", self.length, self.max)
    }
}
