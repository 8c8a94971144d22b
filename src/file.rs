//! Uploaded file handles.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::error::util::ensure_file_exists;

/// A handle to a file received with a request, or resolved from a local path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedFile {
    path: PathBuf,
    original_name: String,
    mime_type: String,
}

impl UploadedFile {
    /// Create a handle without touching the filesystem
    pub fn new(
        path: impl Into<PathBuf>,
        original_name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            original_name: original_name.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Resolve a local path to a file handle
    ///
    /// The original name is the path's file name and the MIME type is
    /// guessed from its extension. Fails with `WrongArgument` if the path
    /// does not name an existing file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        ensure_file_exists(path, "file field")?;

        let original_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            path: path.to_path_buf(),
            original_name,
            mime_type: guess_mime_type(path).to_string(),
        })
    }

    /// Location of the file on disk
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name as uploaded by the client
    #[must_use]
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// MIME type of the file
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Lower-cased extension of the original name, if any
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.original_name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }
}

/// Guess a MIME type from a path's extension
#[must_use]
pub fn guess_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        "pdf" => "application/pdf",
        "json" => "application/json",
        "zip" => "application/zip",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        _ => "application/octet-stream",
    }
}
