//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Write a capture into a fresh temporary directory
pub fn temp_capture(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write capture");
    (temp_dir, path)
}

/// Join lines with `\n`
pub fn lines(text: &[&str]) -> String {
    text.join("\n")
}

/// Path of a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Cleaned transcript of the `sample.cast` fixture
pub const SAMPLE_TRANSCRIPT: &str = "Welcome to Claude Code
> hello
  ? for shortcuts
⏺ Hi! How can I help?
> ls
⏺ Bash(ls)
  src  Cargo.toml";
