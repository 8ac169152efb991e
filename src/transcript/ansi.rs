//! Escape sequence stripping.
//!
//! Removes the two sequence shapes that carry no text:
//!
//! - Two-byte escapes: `ESC` followed by one byte in `@`..=`Z` or `\`..=`_`
//! - CSI sequences: `ESC [`, parameter bytes `0`..=`?`, intermediate bytes
//!   ` `..=`/`, then one final byte `@`..=`~`
//!
//! Anything else that starts with `ESC` (an OSC title, a truncated CSI at the
//! end of a chunk) is left in place; only the matched sequences are removed.

const ESC: char = '\x1b';

/// Parser states while scanning a CSI sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CsiState {
    Params,
    Intermediates,
}

fn is_two_byte_final(c: char) -> bool {
    matches!(c, '@'..='Z' | '\\'..='_')
}

fn is_csi_param(c: char) -> bool {
    matches!(c, '0'..='?')
}

fn is_csi_intermediate(c: char) -> bool {
    matches!(c, ' '..='/')
}

fn is_csi_final(c: char) -> bool {
    matches!(c, '@'..='~')
}

/// Length in chars of the escape sequence starting at `chars[0]`, if any.
fn sequence_len(chars: &[char]) -> Option<usize> {
    debug_assert_eq!(chars.first(), Some(&ESC));
    let next = *chars.get(1)?;

    if is_two_byte_final(next) {
        return Some(2);
    }
    if next != '[' {
        return None;
    }

    let mut state = CsiState::Params;
    for (offset, &c) in chars[2..].iter().enumerate() {
        match state {
            CsiState::Params if is_csi_param(c) => continue,
            CsiState::Params | CsiState::Intermediates if is_csi_intermediate(c) => {
                state = CsiState::Intermediates;
            }
            _ if is_csi_final(c) => return Some(offset + 3),
            _ => return None,
        }
    }
    None
}

/// Strip escape sequences from terminal output.
///
/// Returns the input unchanged (apart from allocation) when it contains no
/// `ESC` character.
pub fn strip_escape_sequences(input: &str) -> String {
    if !input.contains(ESC) {
        return input.to_string();
    }

    let chars: Vec<char> = input.chars().collect();
    let mut output = String::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == ESC {
            if let Some(len) = sequence_len(&chars[i..]) {
                i += len;
                continue;
            }
        }
        output.push(chars[i]);
        i += 1;
    }
    output
}
