//! Export filename generation and sanitization.
//!
//! Default export names are derived from the session id, which is usually a
//! capture stem like `session-20250101-120000` but may be any caller-supplied
//! string. Sanitization keeps the result portable across filesystems.

use std::path::{Path, PathBuf};

use deunicode::deunicode;

use crate::export::ExportFormat;

/// Windows reserved device names that cannot be used as filenames.
const WINDOWS_RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters that are invalid in filenames on common filesystems.
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Fallback name when sanitization produces an empty result.
const FALLBACK_NAME: &str = "session";

/// Recorder prefix rewritten in default export names.
const SESSION_PREFIX: &str = "session-";
const EXPORT_PREFIX: &str = "session_";

/// Maximum stem length, leaving room for an extension within 255 bytes.
pub const MAX_STEM_LENGTH: usize = 200;

/// Sanitizes a string for use as a filename stem.
///
/// Applies the following transformations in order:
/// 1. Unicode → ASCII transliteration
/// 2. Whitespace → hyphens
/// 3. Invalid filesystem characters and brackets removed
/// 4. Multiple hyphens collapsed to single
/// 5. Leading/trailing dots, spaces, hyphens trimmed
/// 6. Truncated to [`MAX_STEM_LENGTH`]
/// 7. Windows reserved names prefixed with `_`
/// 8. Empty results → "session" fallback
pub fn sanitize(input: &str) -> String {
    let ascii = deunicode(input);

    let mut result = String::with_capacity(ascii.len());
    let mut last_was_hyphen = false;

    for c in ascii.chars() {
        if c.is_whitespace() || c == '-' {
            if !last_was_hyphen {
                result.push('-');
                last_was_hyphen = true;
            }
        } else if INVALID_CHARS.contains(&c) {
            continue;
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            result.push(c);
            last_was_hyphen = false;
        }
        // Anything else (brackets, punctuation left by deunicode) is dropped
    }

    let trimmed = trim_edges(&result);
    let truncated: String = trimmed.chars().take(MAX_STEM_LENGTH).collect();
    let final_name = handle_reserved_name(trim_edges(&truncated));

    if final_name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        final_name
    }
}

/// Default export filename stem for a session id.
///
/// A leading `session-` becomes `session_`, then the result is sanitized.
pub fn export_stem(session_id: &str) -> String {
    let renamed = match session_id.strip_prefix(SESSION_PREFIX) {
        Some(rest) => format!("{}{}", EXPORT_PREFIX, rest),
        None => session_id.to_string(),
    };
    sanitize(&renamed)
}

/// Default export path: `<dir>/<stem>.<ext>`.
pub fn export_path(dir: &Path, session_id: &str, format: ExportFormat) -> PathBuf {
    dir.join(format!("{}.{}", export_stem(session_id), format.extension()))
}

/// Trims leading and trailing dots, spaces, and hyphens.
fn trim_edges(s: &str) -> &str {
    s.trim_matches(|c| c == '.' || c == ' ' || c == '-')
}

/// Prefixes Windows reserved names (with or without an extension) with `_`.
fn handle_reserved_name(name: &str) -> String {
    let base_name = match name.find('.') {
        Some(pos) => &name[..pos],
        None => name,
    };

    let upper = base_name.to_uppercase();
    if WINDOWS_RESERVED.contains(&upper.as_str()) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}
