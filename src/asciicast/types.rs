//! Type definitions for event-log capture files.
//!
//! Capture files written by `asciinema rec` are NDJSON:
//!
//! - A header line containing recording metadata
//! - Event lines `[time, code, data]` representing terminal I/O
//!
//! asciicast v3 stores `time` relative to the previous event, while v2 stores
//! it as an absolute offset from the recording start. Both layouts share the
//! same event shape, so the types here cover both and only the duration
//! calculation depends on the version.
//!
//! Reference: <https://docs.asciinema.org/manual/asciicast/v3/>
//!
//! # Example
//!
//! ```text
//! {"version":3,"term":{"cols":80,"rows":24}}
//! [0.5,"o","Hello "]
//! [0.3,"o","world!"]
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Header Types
// ============================================================================

/// Metadata header of a capture file.
///
/// Every field is optional so headers from any asciicast version (and from
/// hand-written fixtures) deserialize without complaint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Header {
    /// Format version (2 or 3 for current asciinema releases).
    #[serde(default)]
    pub version: u8,

    /// Terminal width in columns (v2 layout).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Terminal height in rows (v2 layout).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Terminal information (v3 layout).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<TermInfo>,

    /// Unix timestamp when the recording started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,

    /// Total duration of the recording in seconds, when the recorder wrote it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Title of the recording.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Command that was recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Header {
    /// Whether event times are relative to the previous event (v3 and later).
    pub fn uses_relative_time(&self) -> bool {
        self.version >= 3
    }
}

/// Terminal information embedded in a v3 header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cols: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,

    /// Terminal type (e.g., "xterm-256color").
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub term_type: Option<String>,
}

// ============================================================================
// Event Types
// ============================================================================

/// Event type codes.
///
/// Only [`EventType::Output`] contributes to a transcript; the others are
/// parsed so that duration probing sees every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    /// Output event ("o"): data written to the terminal.
    Output,

    /// Input event ("i"): data read from the terminal.
    Input,

    /// Marker event ("m"): an annotation in the recording.
    Marker,

    /// Resize event ("r"): terminal dimensions changed.
    Resize,

    /// Exit event ("x"): process exit code.
    Exit,
}

impl EventType {
    /// Code used for output events in the event log.
    pub const OUTPUT_CODE: &'static str = "o";

    /// Parse an event type from its single-character code.
    ///
    /// Returns `None` for unrecognized codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "o" => Some(EventType::Output),
            "i" => Some(EventType::Input),
            "m" => Some(EventType::Marker),
            "r" => Some(EventType::Resize),
            "x" => Some(EventType::Exit),
            _ => None,
        }
    }
}

/// A single event in a capture file.
#[derive(Debug, Clone)]
pub struct Event {
    /// Event time in seconds (relative in v3, absolute in v2).
    pub time: f64,

    pub event_type: EventType,

    /// Event payload (terminal text for output and input events).
    pub data: String,
}

impl Event {
    pub fn new(time: f64, event_type: EventType, data: impl Into<String>) -> Self {
        Self {
            time,
            event_type,
            data: data.into(),
        }
    }
}

// ============================================================================
// AsciicastFile
// ============================================================================

/// A parsed capture file with header and events.
#[derive(Debug, Clone)]
pub struct AsciicastFile {
    /// Recording metadata.
    pub header: Header,

    /// All events in the recording, in file order.
    pub events: Vec<Event>,
}

impl AsciicastFile {
    /// Create a new capture with the given header and no events.
    pub fn new(header: Header) -> Self {
        Self {
            header,
            events: Vec::new(),
        }
    }

    /// Total duration of the recording in seconds.
    ///
    /// Prefers the header's `duration` field. Otherwise sums relative times
    /// (v3) or takes the largest absolute time (v2 and earlier).
    pub fn duration(&self) -> f64 {
        if let Some(duration) = self.header.duration {
            return duration;
        }
        if self.header.uses_relative_time() {
            self.events.iter().map(|e| e.time).sum()
        } else {
            self.events.iter().map(|e| e.time).fold(0.0, f64::max)
        }
    }
}
