//! Unit tests for asciicast parsing and probing

use reccli::asciicast::{output_stream, AsciicastFile, CaptureInfo, EventType};

use crate::helpers::{fixtures_dir, load_fixture};

#[test]
fn parse_v3_fixture() {
    let cast = AsciicastFile::parse(fixtures_dir().join("sample.cast")).unwrap();
    assert_eq!(cast.header.version, 3);
    assert_eq!(cast.header.title.as_deref(), Some("demo"));
    let term = cast.header.term.as_ref().unwrap();
    assert_eq!(term.cols, Some(80));
    assert_eq!(term.term_type.as_deref(), Some("xterm-256color"));
    assert_eq!(cast.events.len(), 17);
    assert_eq!(
        cast.events
            .iter()
            .filter(|e| e.event_type == EventType::Marker)
            .count(),
        1
    );
}

#[test]
fn v3_duration_sums_relative_times() {
    let cast = AsciicastFile::parse(fixtures_dir().join("sample.cast")).unwrap();
    assert_eq!(cast.duration(), 83.0);
}

#[test]
fn v2_duration_is_last_absolute_time() {
    let cast = AsciicastFile::parse(fixtures_dir().join("sample_v2.cast")).unwrap();
    assert_eq!(cast.header.width, Some(80));
    assert_eq!(cast.duration(), 1.25);
}

#[test]
fn output_stream_keeps_escapes_and_order() {
    let content = load_fixture("sample_v2.cast");
    assert_eq!(
        output_stream(&content).unwrap(),
        "hello \x1b[1mworld\x1b[0m\r\ndone\r\n"
    );
}

#[test]
fn output_stream_rejects_non_header_content() {
    assert_eq!(output_stream("[0.1, \"o\", \"x\"]\n"), None);
    assert_eq!(output_stream(""), None);
}

#[test]
fn probe_reports_duration_start_and_title() {
    let info = CaptureInfo::probe(&fixtures_dir().join("sample.cast")).unwrap();
    assert_eq!(info.duration_secs, 83.0);
    assert_eq!(info.title.as_deref(), Some("demo"));
    assert_eq!(info.started_at.map(|t| t.timestamp()), Some(1_735_732_800));
}

#[test]
fn probe_ignores_plain_text_captures() {
    assert!(CaptureInfo::probe(&fixtures_dir().join("sample.txt")).is_none());
}
