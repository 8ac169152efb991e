//! Export error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from rendering or writing an export artifact.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unknown format: {0} (expected one of txt, md, json, html, cast)")]
    UnknownFormat(String),

    #[error("Capture file not found: {}", .0.display())]
    MissingCapture(PathBuf),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize session: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;
