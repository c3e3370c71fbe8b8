//! Daily Journal - a personal journal kept in a local JSON file
//!
//! Entries carry a title, free text, a category, tags, a mood and an
//! optional image reference. The whole journal is stored as one JSON
//! document and rewritten after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Entries, drafts, filters, statistics, theme and quotes
//! - `storage`: JSON document storage layer
//! - `services`: Business logic layer
//! - `export`: Text, JSON and YAML exports
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `journal` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use journal::config::JournalPaths;
//! use journal::models::EntryDraft;
//! use journal::services::JournalService;
//! use journal::storage::Storage;
//!
//! let mut storage = Storage::new(JournalPaths::new()?)?;
//! storage.load_all()?;
//! let entry = JournalService::new(&storage).create(&EntryDraft::new("Quiet morning"))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::JournalError;
