//! End-to-end exports through the library API

use std::fs;

use reccli::config::ExtractionConfig;
use reccli::export::render::{FORMAT_TAG, FORMAT_VERSION};
use reccli::{ExportFormat, ExportMetadata, Exporter, Extractor};
use tempfile::TempDir;

use crate::helpers::{fixture_path, SAMPLE_TRANSCRIPT};

fn sample_exporter() -> Exporter {
    let metadata = ExportMetadata {
        session_id: Some("session-20250101-120000".to_string()),
        duration: Some("1m 23s".to_string()),
        duration_seconds: Some(83.0),
        timestamp: Some("2025-01-01T12:00:00".to_string()),
        ..ExportMetadata::default()
    };
    Exporter::with_extractor(
        fixture_path("sample.cast"),
        metadata,
        &Extractor::new(ExtractionConfig::without_converter()),
    )
}

#[test]
fn transcript_is_extracted_once_at_construction() {
    assert_eq!(sample_exporter().transcript(), SAMPLE_TRANSCRIPT);
}

#[test]
fn text_export() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("s.txt");
    assert!(sample_exporter().export(&out, "txt"));
    let doc = fs::read_to_string(&out).unwrap();
    assert!(doc.starts_with(
        "Session: session-20250101-120000\nDuration: 1m 23s\nDate: 2025-01-01T12:00:00\n\n"
    ));
    assert!(doc.ends_with(&format!("{}\n", SAMPLE_TRANSCRIPT)));
}

#[test]
fn markdown_export() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("s.md");
    assert!(sample_exporter().export(&out, "md"));
    let doc = fs::read_to_string(&out).unwrap();
    assert!(doc.starts_with("# Session: session-20250101-120000\n"));
    assert!(doc.contains(&format!("```\n{}\n```\n", SAMPLE_TRANSCRIPT)));
}

#[test]
fn json_export() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("s.json");
    assert!(sample_exporter().export(&out, "JSON"));
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["format"], FORMAT_TAG);
    assert_eq!(value["version"], FORMAT_VERSION);
    assert_eq!(value["session_id"], "session-20250101-120000");
    assert_eq!(value["duration_seconds"], 83.0);
    assert_eq!(value["terminal_output"], SAMPLE_TRANSCRIPT);
    assert_eq!(value["metadata"]["duration"], "1m 23s");
    assert!(value["source_file"]
        .as_str()
        .unwrap()
        .ends_with("sample.cast"));
}

#[test]
fn html_export() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("s.html");
    assert!(sample_exporter().export(&out, ".html"));
    let doc = fs::read_to_string(&out).unwrap();
    assert!(doc.contains("<div class=\"terminal\">Welcome to Claude Code\n&gt; hello\n"));
}

#[test]
fn cast_export_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("s.cast");
    assert!(sample_exporter().export(&out, "cast"));
    assert_eq!(
        fs::read(&out).unwrap(),
        fs::read(fixture_path("sample.cast")).unwrap()
    );
}

#[test]
fn missing_capture_still_renders_every_text_format() {
    let temp = TempDir::new().unwrap();
    let exporter = Exporter::with_extractor(
        temp.path().join("gone.cast"),
        ExportMetadata::default(),
        &Extractor::new(ExtractionConfig::without_converter()),
    );
    assert_eq!(exporter.transcript(), "");

    for format in ExportFormat::ALL {
        let out = temp.path().join(format!("out.{}", format.extension()));
        let ok = exporter.export(&out, format.extension());
        if format == ExportFormat::Cast {
            assert!(!ok);
            assert!(!out.exists());
        } else {
            assert!(ok, "{} export failed", format);
            assert!(fs::read_to_string(&out).unwrap().contains("gone"));
        }
    }

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("out.json")).unwrap()).unwrap();
    assert_eq!(json["terminal_output"], "");
    assert_eq!(json["duration"], "Unknown");
    assert!(json.get("duration_seconds").is_none());
}

#[test]
fn unknown_format_reports_failure() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("s.pdf");
    assert!(!sample_exporter().export(&out, "pdf"));
    assert!(!out.exists());
}
