//! Command handlers for the RecCli CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod export;
pub mod formats;
pub mod transcript;

use anyhow::Result;
use std::io::{self, BufRead, Write};

use reccli::config::ExtractionConfig;
use reccli::Config;

/// Extraction settings from config, with the converter optionally disabled.
pub fn extraction_config(config: &Config, no_converter: bool) -> ExtractionConfig {
    let mut extraction = config.extraction.clone();
    if no_converter {
        extraction.use_converter = false;
    }
    extraction
}

/// Ask a yes/no question on the terminal.
///
/// Returns `false` without prompting when stdin is not a TTY.
pub fn confirm(message: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        return Ok(false);
    }

    print!("{} [y/N] ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    let response = input.trim().to_lowercase();
    response == "y" || response == "yes"
}
