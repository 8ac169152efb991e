//! Capture-file decoding.
//!
//! A capture is either a plain-text log (`.txt`) or an asciicast event log.
//! Decoding tries an ordered list of [`ExtractionStrategy`] implementations
//! and takes the first one that produces output. Whatever the source, escape
//! sequences are stripped and the result is normalized before it is returned.
//!
//! Extraction never fails. A missing or unreadable capture yields an empty
//! transcript.

use std::fs;
use std::path::Path;

use super::ansi::strip_escape_sequences;
use super::converter::RawConverter;
use super::normalize::clean_incremental_typing;
use crate::asciicast::output_stream;
use crate::config::ExtractionConfig;

/// One way of turning a capture into raw terminal text.
///
/// Returns `None` when this strategy cannot handle the capture, letting the
/// next strategy try.
pub trait ExtractionStrategy {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    fn extract(&self, path: &Path) -> Option<String>;
}

/// Reads the whole file as text, replacing invalid UTF-8.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl ExtractionStrategy for PlainText {
    fn name(&self) -> &'static str {
        "plain-text"
    }

    fn extract(&self, path: &Path) -> Option<String> {
        read_lossy(path)
    }
}

/// Parses an event log line by line, concatenating output payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventLog;

impl ExtractionStrategy for EventLog {
    fn name(&self) -> &'static str {
        "event-log"
    }

    fn extract(&self, path: &Path) -> Option<String> {
        let content = read_lossy(path)?;
        let output = output_stream(&content);
        if output.is_none() {
            tracing::debug!(path = %path.display(), "no event-log header or event lines");
        }
        output
    }
}

/// Delegates to an external raw converter.
#[derive(Debug, Clone)]
pub struct ExternalConverter {
    converter: RawConverter,
}

impl ExternalConverter {
    pub fn new(converter: RawConverter) -> Self {
        Self { converter }
    }
}

impl ExtractionStrategy for ExternalConverter {
    fn name(&self) -> &'static str {
        "external-converter"
    }

    fn extract(&self, path: &Path) -> Option<String> {
        match self.converter.convert(path) {
            Ok(output) => Some(output),
            Err(e) => {
                tracing::debug!(
                    converter = self.converter.command(),
                    error = %e,
                    "external conversion unavailable, falling back"
                );
                None
            }
        }
    }
}

/// Runs the strategy chain, escape stripping, and normalization.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractionConfig,
}

impl Extractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Strategies to try for `path`, in order.
    pub fn strategies_for(&self, path: &Path) -> Vec<Box<dyn ExtractionStrategy>> {
        if is_plain_text(path) {
            return vec![Box::new(PlainText)];
        }

        let mut strategies: Vec<Box<dyn ExtractionStrategy>> = Vec::with_capacity(3);
        if self.config.use_converter {
            strategies.push(Box::new(ExternalConverter::new(RawConverter::new(
                self.config.converter.clone(),
                self.config.converter_timeout(),
            ))));
        }
        strategies.push(Box::new(EventLog));
        strategies.push(Box::new(PlainText));
        strategies
    }

    /// Decode a capture to escape-free text, without normalization.
    pub fn extract_raw(&self, path: &Path) -> String {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "capture file does not exist");
            return String::new();
        }

        for strategy in self.strategies_for(path) {
            if let Some(raw) = strategy.extract(path) {
                tracing::debug!(
                    path = %path.display(),
                    strategy = strategy.name(),
                    bytes = raw.len(),
                    "extracted capture"
                );
                return strip_escape_sequences(&raw);
            }
        }

        tracing::warn!(path = %path.display(), "no strategy could read the capture");
        String::new()
    }

    /// Decode a capture and normalize it into a cleaned transcript.
    pub fn extract(&self, path: &Path) -> String {
        clean_incremental_typing(&self.extract_raw(path))
    }
}

/// Extract a cleaned transcript using the default settings.
pub fn extract_transcript(path: impl AsRef<Path>) -> String {
    Extractor::default().extract(path.as_ref())
}

fn is_plain_text(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

fn read_lossy(path: &Path) -> Option<String> {
    match fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read capture");
            None
        }
    }
}
