//! Configuration management for RecCli

pub mod docs;
mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::export::ExportFormat;

impl Config {
    /// Get the config file path (~/.config/reccli/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    /// Load configuration from a specific file, or defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    /// Save configuration to a specific file, with documentation comments
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// TOML form of the config, annotated as `reccli config show` prints it
    pub fn to_annotated_toml(&self) -> Result<String> {
        io::to_annotated_toml(self)
    }

    /// Expand ~ in the export output directory
    pub fn output_directory(&self) -> PathBuf {
        let dir = &self.export.output_directory;
        if let Some(stripped) = dir.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(dir)
    }

    /// The configured default export format.
    ///
    /// Falls back to Markdown if the stored selector is not a known format;
    /// [`Config::load`] already rejects such files.
    pub fn default_format(&self) -> ExportFormat {
        self.export
            .default_format
            .parse()
            .unwrap_or(ExportFormat::Markdown)
    }

    /// Check values that serde cannot validate on its own.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Err(e) = self.export.default_format.parse::<ExportFormat>() {
            return Err(format!("export.default_format: {}", e));
        }
        if self.extraction.converter_timeout_secs == 0 {
            return Err("extraction.converter_timeout_secs must be at least 1".to_string());
        }
        if self.extraction.use_converter && self.extraction.converter.trim().is_empty() {
            return Err("extraction.converter must not be empty".to_string());
        }
        Ok(())
    }
}
