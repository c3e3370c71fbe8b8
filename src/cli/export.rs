//! CLI commands for journal export
//!
//! Writes the whole journal to a file as text, JSON or YAML.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use clap::{Args, ValueEnum};

use crate::error::{JournalError, JournalResult};
use crate::export::{export_filename, export_full_json, export_full_yaml, export_text};
use crate::storage::{write_text_atomic, Storage};

/// Export format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Plain text journal dump
    #[default]
    Text,
    /// JSON format (full journal with metadata)
    Json,
    /// YAML format (full journal, human-readable)
    Yaml,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ExportFormat,

    /// Output file path (defaults to the exports directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Compact JSON output
    #[arg(long)]
    pub compact: bool,
}

/// Handle the export command
pub fn handle_export(storage: &Storage, args: ExportArgs) -> JournalResult<()> {
    let mut buffer = Vec::new();
    let count = match args.format {
        ExportFormat::Text => export_text(storage, &mut buffer)?,
        ExportFormat::Json => export_full_json(storage, &mut buffer, !args.compact)?,
        ExportFormat::Yaml => export_full_yaml(storage, &mut buffer)?,
    };

    let output = match args.output {
        Some(path) => path,
        None => default_output(storage, args.format)?,
    };

    let contents = String::from_utf8(buffer).map_err(|e| JournalError::Export(e.to_string()))?;
    write_text_atomic(&output, &contents).map_err(|e| {
        JournalError::Export(format!(
            "Failed to write file {}: {}",
            output.display(),
            e
        ))
    })?;

    tracing::info!(entries = count, path = %output.display(), "journal exported");
    println!("Exported {} entries to: {}", count, output.display());

    Ok(())
}

fn default_output(storage: &Storage, format: ExportFormat) -> JournalResult<PathBuf> {
    let dir = storage.paths().export_dir();
    std::fs::create_dir_all(&dir)
        .map_err(|e| JournalError::Io(format!("Failed to create export directory: {}", e)))?;

    Ok(output_name(&dir, Utc::now().date_naive(), format))
}

/// File name for an export; dated by the UTC calendar day
fn output_name(dir: &Path, date: NaiveDate, format: ExportFormat) -> PathBuf {
    dir.join(export_filename(date)).with_extension(format.extension())
}
