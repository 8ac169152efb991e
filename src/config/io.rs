//! Reading and writing the reccli config file

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::docs::annotate_config;
use super::types::Config;

/// `~/.config/reccli/config.toml`
pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("reccli").join("config.toml"))
}

/// Read and validate a config file. A missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!(path = ?path, "no config file, using defaults");
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config
        .validate()
        .map_err(|e| anyhow!("Invalid config in {:?}: {}", path, e))?;

    tracing::debug!(path = ?path, format = %config.export.default_format, "loaded config");
    Ok(config)
}

/// Serialize a config as TOML with a comment above every known section and field.
pub fn to_annotated_toml(config: &Config) -> Result<String> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    Ok(annotate_config(&toml_str))
}

/// Write a config as annotated TOML, creating parent directories.
///
/// Invalid configs are refused so a later `load_from` cannot fail on a file
/// reccli wrote itself.
pub fn save_to(config: &Config, path: &Path) -> Result<()> {
    config
        .validate()
        .map_err(|e| anyhow!("Refusing to save invalid config: {}", e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    fs::write(path, to_annotated_toml(config)?)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;
    tracing::debug!(path = ?path, "saved config");
    Ok(())
}
