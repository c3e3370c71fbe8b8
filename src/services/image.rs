//! Image attachment checks
//!
//! Only a reference to the image is stored with an entry; the file itself is
//! never copied.

use std::path::Path;

use crate::error::{JournalError, JournalResult};

/// Largest accepted image, in bytes
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg"];

/// Validate an image file and return the reference to store with an entry
pub fn image_reference(path: &Path) -> JournalResult<String> {
    if !path.is_file() {
        return Err(JournalError::InvalidInput(format!(
            "Image not found: {}",
            path.display()
        )));
    }

    let is_image = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false);
    if !is_image {
        return Err(JournalError::InvalidInput(
            "Please upload an image file".into(),
        ));
    }

    let size = std::fs::metadata(path)?.len();
    if size > MAX_IMAGE_BYTES {
        return Err(JournalError::InvalidInput(
            "Image size should be less than 2MB".into(),
        ));
    }

    let reference = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    Ok(reference.display().to_string())
}
