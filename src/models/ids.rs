//! Entry identifiers
//!
//! Ids are derived from the wall clock in milliseconds, bumped past the last
//! issued id so two entries created within the same millisecond never collide.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// Primary key of a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(i64);

impl EntryId {
    /// Wrap an existing millisecond value
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Allocate a new id for an entry created at `now`
    ///
    /// The result is strictly greater than `last`, if given.
    pub fn allocate(now: DateTime<Utc>, last: Option<EntryId>) -> Self {
        let millis = now.timestamp_millis();
        match last {
            Some(EntryId(prev)) if prev >= millis => Self(prev.saturating_add(1)),
            _ => Self(millis),
        }
    }

    /// Get the underlying millisecond value
    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Parse an id from a string
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        s.trim().parse()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntryId {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl FromStr for EntryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
