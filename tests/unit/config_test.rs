//! Unit tests for config module

use reccli::{Config, ExportFormat};
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.export.default_format, "md");
    assert_eq!(config.export.output_directory, "~/Documents/reccli_sessions");
    assert!(config.extraction.use_converter);
    assert_eq!(config.extraction.converter, "asciinema");
    assert_eq!(config.extraction.converter_timeout_secs, 10);
    assert_eq!(config.default_format(), ExportFormat::Markdown);
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.export.default_format = "html".to_string();
    config.extraction.use_converter = false;
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed.export.default_format, "html");
    assert!(!parsed.extraction.use_converter);
}

#[test]
fn missing_sections_use_defaults() {
    let toml_str = r#"
[export]
default_format = "json"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.default_format(), ExportFormat::Json);
    assert_eq!(config.export.output_directory, "~/Documents/reccli_sessions");
    assert_eq!(config.extraction.converter, "asciinema");
}

#[test]
fn load_from_missing_file_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config.export.default_format, "md");
}

#[test]
fn save_and_load_roundtrip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.extraction.converter_timeout_secs = 3;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.extraction.converter_timeout_secs, 3);
    assert_eq!(loaded.extraction.converter_timeout().as_secs(), 3);
}

#[test]
fn saved_file_is_annotated_and_reloads() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    let mut config = Config::default();
    config.export.default_format = "json".to_string();
    config.save_to(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("# Export defaults\n[export]"));
    assert!(text.contains("# Seconds to wait for the converter before falling back\n"));

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.default_format(), ExportFormat::Json);
}

#[test]
fn save_refuses_invalid_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    let mut config = Config::default();
    config.extraction.converter_timeout_secs = 0;
    let err = config.save_to(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("converter_timeout_secs"));
    assert!(!path.exists());
}

#[test]
fn load_rejects_invalid_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[export]\ndefault_format = \"pdf\"\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("default_format"));
}

#[test]
fn load_rejects_malformed_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[export\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}
