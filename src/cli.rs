//! CLI definitions for RecCli
//!
//! This module contains the clap CLI structure definitions, separated from
//! main.rs so command handlers and tests can build the command tree.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Version string: package version plus the git commit for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ")"
);

/// Version string: package version only for release builds.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "reccli")]
#[command(about = "[ RecCli ] - export recorded terminal sessions as readable transcripts")]
#[command(
    long_about = "RecCli - export recorded terminal sessions.

RecCli turns a session capture (an asciinema .cast event log or a plain-text
script log) into a clean transcript. Escape sequences are removed, and the
keystroke-by-keystroke redraws of interactive agent prompts are collapsed to
the command that was actually submitted.

QUICK START:
    reccli export session.cast                 Export as Markdown (default)
    reccli export session.cast -f html         Export as styled HTML
    reccli export session.cast -o out.json     Format inferred from extension
    reccli transcript session.cast             Print the cleaned transcript

For more information, see: https://github.com/willluecke/RecCli"
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Enable debug logging (overrides RECCLI_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export a session capture
    #[command(long_about = "Export a session capture to a file.

The format comes from --format, else from the output file's extension,
else from [export].default_format in the config (md).

Without --output the export is written to [export].output_directory
(default ~/Documents/reccli_sessions) and named after the session id.

Metadata can be read from a JSON file with --metadata and overridden with
flags. When no duration is given, it is read from the recording itself.

FORMATS:
    txt     Plain text with a metadata header
    md      Markdown with the transcript in a code block
    json    Structured record with transcript and metadata
    html    Styled standalone page
    cast    Copy of the original recording (replayable)

EXAMPLES:
    reccli export session.cast
    reccli export session.cast -f txt -o notes.txt
    reccli export session.cast --session-id demo --duration-secs 83
    reccli export session.cast -o existing.md --force")]
    Export {
        /// Path to the capture file
        #[arg(help = "Path to the .cast or .txt capture file")]
        capture: PathBuf,
        /// Output format selector
        #[arg(long, short, help = "Output format (txt, md, json, html, cast)")]
        format: Option<String>,
        /// Output path
        #[arg(long, short, help = "Output file (default: config output directory)")]
        output: Option<PathBuf>,
        /// Session identifier
        #[arg(long, help = "Session id (default: capture file name)")]
        session_id: Option<String>,
        /// Duration in seconds
        #[arg(long, help = "Duration in seconds (formatted automatically)")]
        duration_secs: Option<f64>,
        /// Human-readable duration
        #[arg(long, help = "Duration text, e.g. \"1m 23s\" (overrides --duration-secs text)")]
        duration: Option<String>,
        /// Recording timestamp
        #[arg(long, help = "Recording timestamp, ISO-8601 (default: recording start or now)")]
        timestamp: Option<String>,
        /// Metadata JSON file
        #[arg(long, help = "JSON file with session metadata")]
        metadata: Option<PathBuf>,
        /// Overwrite an existing output file
        #[arg(long, help = "Overwrite the output file without asking")]
        force: bool,
        /// Skip the external converter
        #[arg(long, help = "Parse event logs directly instead of using asciinema")]
        no_converter: bool,
    },

    /// Print the cleaned transcript of a capture
    #[command(long_about = "Print the cleaned transcript of a capture to stdout.

This is the text every export format is built from.

EXAMPLE:
    reccli transcript session.cast | less")]
    Transcript {
        /// Path to the capture file
        #[arg(help = "Path to the .cast or .txt capture file")]
        capture: PathBuf,
        /// Skip the external converter
        #[arg(long, help = "Parse event logs directly instead of using asciinema")]
        no_converter: bool,
    },

    /// List supported export formats
    Formats,

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and edit the RecCli configuration.

Configuration is stored in ~/.config/reccli/config.toml and holds export
defaults and transcript extraction settings.

EXAMPLES:
    reccli config show      Display current configuration
    reccli config edit      Open config in $EDITOR"
    )]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate a shell completion script.

EXAMPLES:
    reccli completions bash > ~/.local/share/bash-completion/completions/reccli
    reccli completions zsh > ~/.zfunc/_reccli")]
    Completions {
        /// Target shell
        #[arg(value_enum, help = "Shell to generate completions for")]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    #[command(long_about = "Display the current configuration in TOML format.

Shows every setting, with defaults filled in and a comment above each field.

EXAMPLE:
    reccli config show")]
    Show,
    /// Open configuration file in your default editor
    #[command(long_about = "Open the configuration file in your default editor.

Uses the $EDITOR environment variable (defaults to 'vi').
Config file location: ~/.config/reccli/config.toml

EXAMPLE:
    reccli config edit
    EDITOR=nano reccli config edit")]
    Edit,
}
