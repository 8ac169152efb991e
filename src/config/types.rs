//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

/// Export defaults used when the command line does not say otherwise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Format used when neither `--format` nor the output extension decides
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Directory for exports when no `--output` path is given
    #[serde(default = "default_output_directory")]
    pub output_directory: String,
}

pub fn default_format() -> String {
    "md".to_string()
}

pub fn default_output_directory() -> String {
    "~/Documents/reccli_sessions".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            output_directory: default_output_directory(),
        }
    }
}

/// Transcript extraction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Try the external raw converter before parsing event logs by hand
    #[serde(default = "default_use_converter")]
    pub use_converter: bool,
    /// Converter executable (invoked as `<converter> convert -f raw <file> -`)
    #[serde(default = "default_converter")]
    pub converter: String,
    /// Seconds to wait for the converter before giving up
    #[serde(default = "default_converter_timeout_secs")]
    pub converter_timeout_secs: u64,
}

pub fn default_use_converter() -> bool {
    true
}

pub fn default_converter() -> String {
    "asciinema".to_string()
}

pub fn default_converter_timeout_secs() -> u64 {
    10
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            use_converter: default_use_converter(),
            converter: default_converter(),
            converter_timeout_secs: default_converter_timeout_secs(),
        }
    }
}

impl ExtractionConfig {
    /// Settings that never spawn the external converter.
    pub fn without_converter() -> Self {
        Self {
            use_converter: false,
            ..Self::default()
        }
    }

    pub fn converter_timeout(&self) -> Duration {
        Duration::from_secs(self.converter_timeout_secs)
    }
}
