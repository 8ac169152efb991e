//! Transcript extraction and cleanup.
//!
//! # Structure
//!
//! - `extractor` - Capture decoding via an ordered strategy chain
//! - `converter` - External `asciinema convert -f raw` runner
//! - `ansi` - Escape sequence stripping
//! - `normalize` - Incremental-typing and UI-noise removal

pub mod ansi;
pub mod converter;
pub mod extractor;
pub mod normalize;

pub use ansi::strip_escape_sequences;
pub use converter::{ConverterError, RawConverter};
pub use extractor::{
    extract_transcript, EventLog, ExternalConverter, ExtractionStrategy, Extractor, PlainText,
};
pub use normalize::{clean_incremental_typing, prompt_groups, LineKind};
