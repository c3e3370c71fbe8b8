//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::JournalError;

/// Read a whole file as raw bytes, returning `None` if it doesn't exist
///
/// Decoding is left to the caller so that bad encodings can be recovered from.
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Option<Vec<u8>>, JournalError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| JournalError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut contents = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut contents)
        .map_err(|e| JournalError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(Some(contents))
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The target is either completely written or not modified at all.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), JournalError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            JournalError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| JournalError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| JournalError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| JournalError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| JournalError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        JournalError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Serialize a value as pretty JSON and write it atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), JournalError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| JournalError::Storage(format!("Failed to serialize data: {}", e)))?;
    write_text_atomic(path, &json)
}

/// Check if a JSON file exists and is valid
pub fn json_file_valid<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if !path.exists() {
        return false;
    }

    if let Ok(file) = File::open(path) {
        let reader = BufReader::new(file);
        serde_json::from_reader::<_, serde_json::Value>(reader).is_ok()
    } else {
        false
    }
}
