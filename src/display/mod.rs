//! Display formatting for terminal output
//!
//! Provides utilities for formatting entries and statistics for the terminal.

pub mod entry;
pub mod stats;

pub use entry::{format_entry_details, format_entry_list, truncate};
pub use stats::format_statistics;
