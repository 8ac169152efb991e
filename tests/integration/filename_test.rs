//! Tests for export filename sanitization and generation.

use std::path::Path;

use reccli::files::filename::{self, MAX_STEM_LENGTH};
use reccli::ExportFormat;

// ============================================================================
// Sanitization
// ============================================================================

#[test]
fn sanitize_replaces_whitespace_with_single_hyphen() {
    assert_eq!(filename::sanitize("my project"), "my-project");
    assert_eq!(filename::sanitize("my \t\n project"), "my-project");
    assert_eq!(filename::sanitize("a -- b"), "a-b");
}

#[test]
fn sanitize_removes_invalid_characters() {
    assert_eq!(filename::sanitize("path/to\\file"), "pathtofile");
    assert_eq!(filename::sanitize("a:b*c?d\"e<f>g|h"), "abcdefgh");
    assert_eq!(filename::sanitize("demo (final) [v2]"), "demo-final-v2");
}

#[test]
fn sanitize_transliterates_unicode() {
    assert_eq!(filename::sanitize("café"), "cafe");
    assert_eq!(filename::sanitize("Über Straße"), "Uber-Strasse");
}

#[test]
fn sanitize_trims_edges() {
    assert_eq!(filename::sanitize("  ..demo..  "), "demo");
    assert_eq!(filename::sanitize("-demo-"), "demo");
}

#[test]
fn sanitize_prefixes_windows_reserved_names() {
    assert_eq!(filename::sanitize("CON"), "_CON");
    assert_eq!(filename::sanitize("nul.txt"), "_nul.txt");
    assert_eq!(filename::sanitize("console"), "console");
}

#[test]
fn sanitize_falls_back_when_empty() {
    assert_eq!(filename::sanitize(""), "session");
    assert_eq!(filename::sanitize("///"), "session");
}

#[test]
fn sanitize_truncates_long_names() {
    let long = "a".repeat(MAX_STEM_LENGTH + 50);
    assert_eq!(filename::sanitize(&long).len(), MAX_STEM_LENGTH);
}

// ============================================================================
// Export names
// ============================================================================

#[test]
fn export_stem_rewrites_session_prefix() {
    assert_eq!(
        filename::export_stem("session-20250101-120000"),
        "session_20250101-120000"
    );
    assert_eq!(filename::export_stem("my session"), "my-session");
    assert_eq!(filename::export_stem("xsession-1"), "xsession-1");
}

#[test]
fn export_path_appends_format_extension() {
    assert_eq!(
        filename::export_path(Path::new("/exports"), "session-42", ExportFormat::Html),
        Path::new("/exports/session_42.html")
    );
    assert_eq!(
        filename::export_path(Path::new("out"), "demo", ExportFormat::Cast),
        Path::new("out/demo.cast")
    );
}
