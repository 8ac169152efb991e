//! Transcript extraction from capture files

use reccli::config::ExtractionConfig;
use reccli::Extractor;

use crate::helpers::{fixture_path, temp_capture, SAMPLE_TRANSCRIPT};

fn extractor() -> Extractor {
    Extractor::new(ExtractionConfig::without_converter())
}

#[test]
fn event_log_fixture_yields_clean_transcript() {
    assert_eq!(
        extractor().extract(&fixture_path("sample.cast")),
        SAMPLE_TRANSCRIPT
    );
}

#[test]
fn plain_text_fixture_yields_clean_transcript() {
    assert_eq!(
        extractor().extract(&fixture_path("sample.txt")),
        "Script started\n> git status\nOn branch main\nmodified:   src/lib.rs"
    );
}

#[test]
fn raw_extraction_only_strips_escapes() {
    assert_eq!(
        extractor().extract_raw(&fixture_path("sample_v2.cast")),
        "hello world\r\ndone\r\n"
    );
}

#[test]
fn malformed_lines_are_skipped_individually() {
    let (_dir, path) = temp_capture(
        "broken.cast",
        "{\"version\": 2}\n[0.1, \"o\", \"a\"]\n[0.2, \"o\", \nnull\n[0.3, 7, \"x\"]\n[0.4, \"o\", 5]\n[0.5, \"o\", \"b\"]\n",
    );
    assert_eq!(extractor().extract(&path), "ab");
}

#[test]
fn corrupt_header_does_not_hide_events() {
    let (_dir, path) = temp_capture(
        "cut.cast",
        "{\"version\": 3, \"term\": {\"co\n[0.1, \"o\", \"> ls\\n\"]\n[0.2, \"o\", \"src\\n\"]\n",
    );
    assert_eq!(extractor().extract(&path), "> ls\nsrc");
}

#[test]
fn missing_capture_yields_empty_transcript() {
    assert_eq!(extractor().extract(&fixture_path("does-not-exist.cast")), "");
}

#[test]
fn extract_transcript_uses_defaults() {
    let transcript = reccli::extract_transcript(fixture_path("sample.txt"));
    assert!(transcript.contains("> git status"));
    assert!(!transcript.contains("> gi\n"));
}
