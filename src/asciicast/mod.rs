//! Event-log capture format (asciicast v2/v3).
//!
//! This module provides types and utilities for reading the capture files
//! written by `asciinema rec`.
//!
//! Reference: https://docs.asciinema.org/manual/asciicast/v3/
//!
//! # Structure
//!
//! - `types` - Header, event and file types
//! - `reader` - Lenient parsing and output-stream reconstruction

mod reader;
mod types;

pub use reader::output_stream;
pub use types::{AsciicastFile, Event, EventType, Header, TermInfo};

use std::path::Path;

use chrono::{DateTime, Local, TimeZone};

/// Recording facts read from a capture's header and events.
///
/// Used to fill export metadata when the caller did not supply it.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureInfo {
    /// Recording length in seconds.
    pub duration_secs: f64,
    /// When the recording started, if the header has a timestamp.
    pub started_at: Option<DateTime<Local>>,
    /// Recording title from the header.
    pub title: Option<String>,
}

impl CaptureInfo {
    /// Probe an event-log capture.
    ///
    /// Returns `None` for missing files and plain-text captures.
    pub fn probe(path: &Path) -> Option<Self> {
        let file = match AsciicastFile::parse(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "capture is not an event log");
                return None;
            }
        };

        let started_at = file
            .header
            .timestamp
            .and_then(|ts| Local.timestamp_opt(ts, 0).single());

        Some(Self {
            duration_secs: file.duration(),
            started_at,
            title: file.header.title.clone(),
        })
    }
}
