//! Custom error types for the journal
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::ValidationKind;

/// The main error type for journal operations
#[derive(Error, Debug)]
pub enum JournalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Draft rejected before any mutation
    #[error("Validation error: {0}")]
    Validation(ValidationKind),

    /// Free-form validation failure outside of entry drafts
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Durable read/write failures. In-memory state is left as-is.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Quote fetch failures
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl JournalError {
    /// Create a "not found" error for entries
    pub fn entry_not_found(identifier: impl ToString) -> Self {
        Self::NotFound {
            entity_type: "Entry",
            identifier: identifier.to_string(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidInput(_))
    }

    /// Check if this is a durable storage failure
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<ValidationKind> for JournalError {
    fn from(kind: ValidationKind) -> Self {
        Self::Validation(kind)
    }
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for journal operations
pub type JournalResult<T> = Result<T, JournalError>;
