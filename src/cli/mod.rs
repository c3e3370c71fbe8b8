//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod entry;
pub mod export;
pub mod quote;
pub mod theme;

pub use config::handle_config;
pub use entry::{
    handle_clear, handle_delete, handle_edit, handle_list, handle_new, handle_show, handle_stats,
    EditArgs, ListArgs, NewArgs,
};
pub use export::{handle_export, ExportArgs, ExportFormat};
pub use quote::handle_quote;
pub use theme::{handle_theme, ThemeAction};
