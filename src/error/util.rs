//! Utility functions for error handling
//!
//! Helpers that turn filesystem checks into `DtoError`s with context.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{DtoError, Result};

/// Check that `path` names an existing regular file
///
/// A missing path, or a path that is not a file, is a `WrongArgument`:
/// callers hand these paths in as field values.
pub fn ensure_file_exists(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(DtoError::wrong_argument(format!(
            "{} does not exist (needed for: {purpose})",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(DtoError::wrong_argument(format!(
            "{} is not a file (expected a file for: {purpose})",
            path.display()
        )));
    }

    Ok(())
}

/// Safely read a file to string with rich error information
pub fn safe_read_to_string(path: &Path, purpose: &str) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) => {
            let context = match e.kind() {
                io::ErrorKind::NotFound => format!("{} not found", path.display()),
                io::ErrorKind::PermissionDenied => {
                    format!("Permission denied reading {}", path.display())
                }
                io::ErrorKind::InvalidData => {
                    format!("{} contains invalid UTF-8 data", path.display())
                }
                _ => format!("Failed to read {}", path.display()),
            };

            Err(DtoError::Io(io::Error::new(
                e.kind(),
                format!("{context} (needed for: {purpose}): {e}"),
            )))
        }
    }
}
