//! Incremental-typing normalization.
//!
//! Interactive agent UIs redraw the input line on every keystroke, so a raw
//! capture of typing `hello` contains `> h`, `> he`, `> hel`, ... before the
//! final `> hello`. This module collapses those echoes to the committed line
//! and drops transient UI chrome (spinners, separators, exit hints), keeping
//! repeated status hints only once.
//!
//! The normalizer is a pure function of its input.

use std::collections::HashSet;

/// Glyph printed when the agent starts a response.
pub const RESPONSE_MARKER: char = '⏺';

/// Maximum index distance between two prompt lines of the same group.
pub const MAX_PROMPT_GAP: usize = 10;

/// Character used to draw horizontal separator rules.
const SEPARATOR_CHAR: char = '─';

/// Spinner words and hints shown while the agent is working.
const LOADING_PHRASES: &[&str] = &[
    "Galloping",
    "Warping",
    "Deliberating",
    "Combobulating",
    "Musing",
    "Prestidigitating",
    "Finagling",
    "Whatchamacalliting",
    "(esc to interrupt)",
];

/// Hints printed when the user presses Ctrl-D or Ctrl-C once.
const EXIT_HINT_PHRASES: &[&str] = &["Press Ctrl-D", "again to exit"];

/// Footer hints that are worth keeping, but only once.
const REPEATED_UI_PHRASES: &[&str] = &["? for shortcuts", "Thinking off", "tab to toggle"];

/// Usage-limit notice, repeated on every redraw once the limit is hit.
const USAGE_LIMIT_PHRASE: &str = "Claude Opus limit reached";

/// Classification of a single transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Horizontal rule made only of `─`.
    Separator,
    /// Echoed input line starting with `>`.
    Prompt,
    /// Empty or whitespace-only.
    Blank,
    /// Spinner or "esc to interrupt" status.
    Loading,
    /// "Press Ctrl-D again to exit" style hint.
    ExitHint,
    /// Footer hint kept at most once.
    RepeatedUi,
    /// Usage-limit notice kept at most once.
    UsageLimit,
    /// Everything else.
    Content,
}

impl LineKind {
    /// Classify a line. Checks run in the order the normalizer applies them.
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim();
        if is_separator(trimmed) {
            LineKind::Separator
        } else if is_prompt(trimmed) {
            LineKind::Prompt
        } else if trimmed.is_empty() {
            LineKind::Blank
        } else if contains_any(trimmed, LOADING_PHRASES) {
            LineKind::Loading
        } else if contains_any(trimmed, EXIT_HINT_PHRASES) {
            LineKind::ExitHint
        } else if contains_any(trimmed, REPEATED_UI_PHRASES) {
            LineKind::RepeatedUi
        } else if trimmed.contains(USAGE_LIMIT_PHRASE) {
            LineKind::UsageLimit
        } else {
            LineKind::Content
        }
    }
}

fn is_separator(trimmed: &str) -> bool {
    !trimmed.is_empty() && trimmed.chars().all(|c| c == SEPARATOR_CHAR)
}

fn is_prompt(trimmed: &str) -> bool {
    trimmed.starts_with('>')
}

/// A prompt with nothing typed after the `>`.
fn is_empty_prompt(trimmed: &str) -> bool {
    trimmed == ">" || trimmed == "> "
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Partition prompt-line indices into groups of successive echoes.
///
/// Consecutive prompts stay in one group unless a line between them contains
/// [`RESPONSE_MARKER`] or they are more than [`MAX_PROMPT_GAP`] lines apart.
/// Every prompt index belongs to exactly one group, in order.
pub fn prompt_groups<S: AsRef<str>>(lines: &[S]) -> Vec<Vec<usize>> {
    let prompts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_prompt(line.as_ref().trim()))
        .map(|(i, _)| i)
        .collect();

    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut current: Vec<usize> = Vec::new();

    for &pos in &prompts {
        if let Some(&prev) = current.last() {
            let has_response = lines[prev + 1..pos]
                .iter()
                .any(|line| line.as_ref().contains(RESPONSE_MARKER));
            if has_response || pos - prev > MAX_PROMPT_GAP {
                groups.push(std::mem::take(&mut current));
            }
        }
        current.push(pos);
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Index of the prompt line a group keeps, if any.
///
/// The last member with typed content wins. A lone empty prompt is kept;
/// a group made only of several empty prompts keeps nothing.
fn kept_prompt<S: AsRef<str>>(lines: &[S], group: &[usize]) -> Option<usize> {
    group
        .iter()
        .rev()
        .copied()
        .find(|&i| !is_empty_prompt(lines[i].as_ref().trim()))
        .or_else(|| match group {
            [only] => Some(*only),
            _ => None,
        })
}

/// Remove incremental-typing artifacts and transient UI noise.
///
/// Input without any prompt line is returned unchanged. Otherwise the
/// output holds, in original order: the kept prompt of each group, the first
/// occurrence of each repeated UI hint, and every content line.
pub fn clean_incremental_typing(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();

    if !lines.iter().any(|line| is_prompt(line.trim())) {
        return content.to_string();
    }

    let kept: HashSet<usize> = prompt_groups(&lines)
        .iter()
        .filter_map(|group| kept_prompt(&lines, group))
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut cleaned: Vec<&str> = Vec::with_capacity(lines.len());

    for (i, &line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        match LineKind::classify(line) {
            LineKind::Separator | LineKind::Blank | LineKind::Loading | LineKind::ExitHint => {}
            LineKind::Prompt => {
                if kept.contains(&i) && !is_empty_prompt(trimmed) {
                    cleaned.push(line);
                }
            }
            LineKind::RepeatedUi | LineKind::UsageLimit => {
                if seen.insert(trimmed) {
                    cleaned.push(line);
                }
            }
            LineKind::Content => cleaned.push(line),
        }
    }

    cleaned.join("\n")
}
