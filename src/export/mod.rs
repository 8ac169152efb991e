//! Session export.
//!
//! Turns a capture file plus caller-supplied metadata into one of five
//! artifacts: plain text, Markdown, JSON, styled HTML, or a verbatim copy of
//! the capture. The transcript is extracted once when the [`Exporter`] is
//! built and reused for every export call.
//!
//! # Example
//!
//! ```no_run
//! use reccli::export::{ExportMetadata, Exporter};
//!
//! let metadata = ExportMetadata {
//!     session_id: Some("session-20250101".to_string()),
//!     duration_seconds: Some(83.0),
//!     ..ExportMetadata::default()
//! };
//! let exporter = Exporter::new("session.cast", metadata);
//! let ok = exporter.export("session.md", "md");
//! ```

mod duration;
mod error;
pub mod render;

pub use duration::format_duration;
pub use error::{ExportError, ExportResult};
pub use render::{escape_html, Artifact, ResolvedMetadata};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::transcript::Extractor;

/// Fallback for a missing duration string.
pub const UNKNOWN_DURATION: &str = "Unknown";

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Plain text with a metadata header.
    Text,
    /// Markdown with the transcript in a fenced block.
    Markdown,
    /// Structured JSON record.
    Json,
    /// Styled standalone HTML page.
    Html,
    /// Verbatim copy of the capture file.
    Cast,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Text,
        ExportFormat::Markdown,
        ExportFormat::Json,
        ExportFormat::Html,
        ExportFormat::Cast,
    ];

    /// File extension (and selector) for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
            ExportFormat::Cast => "cast",
        }
    }

    /// Short description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            ExportFormat::Text => "Plain text transcript with a metadata header",
            ExportFormat::Markdown => "Markdown document with the transcript in a code block",
            ExportFormat::Json => "Structured JSON record with transcript and metadata",
            ExportFormat::Html => "Styled HTML page",
            ExportFormat::Cast => "Copy of the original recording (replayable)",
        }
    }

    /// Infer the format from an output path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// Parse a selector. Case-insensitive; leading dots are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim_start_matches('.').to_ascii_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.extension() == selector)
            .ok_or_else(|| ExportError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Metadata supplied by the recording controller.
///
/// Every field is optional. Unknown fields are kept and written back out in
/// the JSON export's `metadata` record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Human-readable duration (see [`format_duration`]).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,

    /// ISO-8601 timestamp of the recording.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ExportMetadata {
    /// Apply fallbacks: the capture's file stem, `"Unknown"`, and the
    /// current local time.
    pub fn resolve(&self, capture: &Path) -> ResolvedMetadata {
        let session_id = self.session_id.clone().unwrap_or_else(|| {
            capture
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "session".to_string())
        });
        let timestamp = self.timestamp.clone().unwrap_or_else(|| {
            chrono::Local::now()
                .format("%Y-%m-%dT%H:%M:%S%.6f")
                .to_string()
        });

        ResolvedMetadata {
            session_id,
            duration: self
                .duration
                .clone()
                .unwrap_or_else(|| UNKNOWN_DURATION.to_string()),
            duration_seconds: self.duration_seconds,
            timestamp,
        }
    }
}

/// Exports one captured session.
#[derive(Debug, Clone)]
pub struct Exporter {
    capture: PathBuf,
    metadata: ExportMetadata,
    transcript: String,
}

impl Exporter {
    /// Build an exporter, extracting the transcript with default settings.
    pub fn new(capture: impl Into<PathBuf>, metadata: ExportMetadata) -> Self {
        Self::with_extractor(capture, metadata, &Extractor::default())
    }

    /// Build an exporter, extracting the transcript with the given extractor.
    pub fn with_extractor(
        capture: impl Into<PathBuf>,
        metadata: ExportMetadata,
        extractor: &Extractor,
    ) -> Self {
        let capture = capture.into();
        let transcript = extractor.extract(&capture);
        Self::from_transcript(capture, metadata, transcript)
    }

    /// Build an exporter around an already cleaned transcript.
    pub fn from_transcript(
        capture: impl Into<PathBuf>,
        metadata: ExportMetadata,
        transcript: impl Into<String>,
    ) -> Self {
        Self {
            capture: capture.into(),
            metadata,
            transcript: transcript.into(),
        }
    }

    pub fn capture(&self) -> &Path {
        &self.capture
    }

    pub fn metadata(&self) -> &ExportMetadata {
        &self.metadata
    }

    /// The cleaned transcript shared by all text formats.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Export using a format selector, reporting success as a boolean.
    ///
    /// Failures (unknown selector, unwritable path, missing capture for the
    /// native copy) are logged and return `false`.
    pub fn export(&self, output: impl AsRef<Path>, format: &str) -> bool {
        let output = output.as_ref();
        match self.try_export(output, format) {
            Ok(()) => {
                tracing::info!(output = %output.display(), format, "exported session");
                true
            }
            Err(e) => {
                tracing::error!(output = %output.display(), format, error = %e, "export failed");
                false
            }
        }
    }

    /// Export using a format selector.
    pub fn try_export(&self, output: &Path, format: &str) -> ExportResult<()> {
        let format: ExportFormat = format.parse()?;
        self.export_as(output, format)
    }

    /// Render and write the artifact for `format` to `output`.
    pub fn export_as(&self, output: &Path, format: ExportFormat) -> ExportResult<()> {
        let resolved = self.metadata.resolve(&self.capture);
        let ctx = render::RenderContext {
            transcript: &self.transcript,
            resolved: &resolved,
            metadata: &self.metadata,
            capture: &self.capture,
        };

        match render::render(format, &ctx)? {
            Artifact::Document(doc) => fs::write(output, doc).map_err(|source| ExportError::Io {
                path: output.to_path_buf(),
                source,
            }),
            Artifact::Copy(source_path) => {
                if !source_path.exists() {
                    return Err(ExportError::MissingCapture(source_path));
                }
                fs::copy(&source_path, output)
                    .map(|_| ())
                    .map_err(|source| ExportError::Io {
                        path: output.to_path_buf(),
                        source,
                    })
            }
        }
    }
}
