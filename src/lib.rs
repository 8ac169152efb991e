//! RecCli session export library
//!
//! Turns terminal-session captures into readable transcripts and exports
//! them as text, Markdown, JSON, HTML, or a copy of the recording.

pub mod asciicast;
pub mod config;
pub mod export;
pub mod files;
pub mod transcript;

pub use asciicast::{AsciicastFile, CaptureInfo, Event, EventType, Header};
pub use config::Config;
pub use export::{format_duration, ExportError, ExportFormat, ExportMetadata, Exporter};
pub use transcript::{clean_incremental_typing, extract_transcript, Extractor};
