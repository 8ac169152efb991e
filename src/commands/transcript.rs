//! Transcript command handler

use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use reccli::{Config, Extractor};

use super::extraction_config;

/// Print the cleaned transcript of a capture to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(capture: &Path, no_converter: bool) -> Result<()> {
    let config = Config::load()?;
    if !capture.exists() {
        tracing::warn!(capture = %capture.display(), "capture file does not exist");
    }

    let transcript = Extractor::new(extraction_config(&config, no_converter)).extract(capture);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", transcript)?;
    Ok(())
}
