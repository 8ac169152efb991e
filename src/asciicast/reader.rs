//! Event-log capture parser.
//!
//! The parser reads NDJSON where the first line is a JSON header and
//! subsequent lines are event arrays.
//!
//! # Format
//!
//! ```text
//! {"version":3,"term":{"cols":80,"rows":24}}  <- Header (JSON object)
//! [0.5,"o","Hello "]                          <- Event (JSON array)
//! [0.3,"o","world!"]                          <- Event (JSON array)
//! ```
//!
//! # Error Handling
//!
//! Captures are produced by a recorder that may have been killed mid-write,
//! so parsing is lenient: only a missing or non-object header is an error.
//! Event lines that are not valid JSON, or do not have the expected shape,
//! are skipped one by one and never abort the file.
//!
//! # Example
//!
//! ```no_run
//! use reccli::AsciicastFile;
//!
//! let file = AsciicastFile::parse("recording.cast")?;
//! println!("{:.1}s", file.duration());
//!
//! let content = r#"{"version":3}
//! [0.1,"o","hello"]"#;
//! let text = reccli::asciicast::output_stream(content);
//! assert_eq!(text.as_deref(), Some("hello"));
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::types::{AsciicastFile, Event, EventType, Header};

impl Event {
    /// Parse an event from a JSON line.
    ///
    /// Expects an array format: `[time, type_code, data]` where:
    /// - `time` is a number
    /// - `type_code` is a string ("o", "i", "m", "r", or "x")
    /// - `data` is a string (event payload)
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not valid JSON or any element has the
    /// wrong type.
    pub fn from_json(line: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(line).context("Failed to parse event JSON")?;

        let arr = value.as_array().context("Event must be a JSON array")?;

        if arr.len() < 3 {
            bail!("Event array must have at least 3 elements");
        }

        let time = arr[0].as_f64().context("Event time must be a number")?;

        let code = arr[1].as_str().context("Event type must be a string")?;

        let event_type =
            EventType::from_code(code).with_context(|| format!("Unknown event type: {}", code))?;

        let data = arr[2].as_str().context("Event data must be a string")?;

        Ok(Event::new(time, event_type, data))
    }
}

/// Whether a line looks like an event-log header (a JSON object).
fn is_header_line(line: &str) -> bool {
    matches!(
        serde_json::from_str::<serde_json::Value>(line),
        Ok(serde_json::Value::Object(_))
    )
}

/// Output payload of a parsed event line, if it is an output event.
///
/// Only the shape matters: an array of at least three elements whose second
/// element is `"o"` and whose third element is a string. The timestamp is
/// not inspected.
fn output_payload(value: &serde_json::Value) -> Option<&str> {
    let arr = value.as_array()?;
    if arr.len() < 3 || arr[1].as_str() != Some(EventType::OUTPUT_CODE) {
        return None;
    }
    arr[2].as_str()
}

/// Reconstruct the raw output stream of an event-log capture.
///
/// The first line is skipped unchecked, so a truncated header does not
/// lose the events after it. Every output payload is concatenated in file
/// order with no separator. Returns `None` only when the content is not an
/// event log at all: the first line is not a JSON object and no later line
/// is a JSON array.
pub fn output_stream(content: &str) -> Option<String> {
    let mut lines = content.lines();
    let header = lines.next()?;

    let mut output = String::new();
    let mut event_lines = 0usize;
    let mut skipped = 0usize;
    for line in lines {
        let value = serde_json::from_str::<serde_json::Value>(line).ok();
        if value.as_ref().is_some_and(serde_json::Value::is_array) {
            event_lines += 1;
        }
        match value.as_ref().and_then(output_payload) {
            Some(chunk) => output.push_str(chunk),
            None => skipped += 1,
        }
    }

    if event_lines == 0 && !is_header_line(header) {
        return None;
    }
    if skipped > 0 {
        tracing::debug!(skipped, "ignored non-output or malformed event lines");
    }
    Some(output)
}

impl AsciicastFile {
    /// Parse a capture file from a filesystem path.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or has no JSON header.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("Failed to open file: {:?}", path))?;
        Self::parse_str(&String::from_utf8_lossy(&bytes))
    }

    /// Parse a capture from a string.
    ///
    /// The first line must be a JSON object. Header fields with unexpected
    /// types fall back to defaults. Event lines that fail to parse are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is empty or the header is not a JSON
    /// object.
    pub fn parse_str(content: &str) -> Result<Self> {
        let mut lines = content.lines();

        let header_line = lines.next().context("File is empty")?;
        let header_value: serde_json::Value =
            serde_json::from_str(header_line).context("Failed to parse header")?;
        if !header_value.is_object() {
            bail!("Header must be a JSON object");
        }
        let header: Header = serde_json::from_value(header_value).unwrap_or_default();

        let mut file = AsciicastFile::new(header);
        file.events = lines
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| Event::from_json(line).ok())
            .collect();

        Ok(file)
    }
}
