//! Configuration module for the journal
//!
//! This module provides configuration management including:
//! - Path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::JournalPaths;
pub use settings::Settings;
