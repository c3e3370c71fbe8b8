//! Core data models for the journal
//!
//! Entries, the drafts they are created from, search filters, statistics,
//! and the small preference types persisted alongside them.

pub mod entry;
pub mod filter;
pub mod ids;
pub mod quote;
pub mod stats;
pub mod theme;

pub use entry::{
    parse_tags, CharCount, CharCountLevel, Entry, EntryDraft, ValidationKind, DEFAULT_TITLE,
    MAX_CONTENT_LENGTH,
};
pub use filter::EntryFilter;
pub use ids::EntryId;
pub use quote::{Quote, QuoteSource};
pub use stats::Statistics;
pub use theme::Theme;
