//! Inspirational quote model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A quote with its author
///
/// Accepts both `{content, author}` and `{quote, author}` response shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(alias = "quote")]
    pub content: String,
    pub author: String,
}

impl Quote {
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - {}", self.content, self.author)
    }
}

/// Where a served quote came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSource {
    Remote,
    Offline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_response_shapes() {
        let a: Quote = serde_json::from_str(r#"{"content": "Go", "author": "A"}"#).unwrap();
        let b: Quote = serde_json::from_str(r#"{"quote": "Go", "author": "A"}"#).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let q = Quote::new("Keep going.", "Someone");
        assert_eq!(q.to_string(), "\"Keep going.\" - Someone");
    }
}
