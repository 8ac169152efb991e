//! Per-format artifact rendering.
//!
//! Each text format is a fixed template around the cleaned transcript and the
//! resolved metadata. The native format is not rendered at all: it is a copy
//! of the capture file.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::ExportResult;
use super::{ExportFormat, ExportMetadata};

/// Identifier written into structured-data exports.
pub const FORMAT_TAG: &str = "reccli-session";

/// Version of the structured-data layout.
pub const FORMAT_VERSION: &str = "1.0.0";

const PROJECT_URL: &str = "https://github.com/willluecke/RecCli";

/// Metadata with every fallback applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMetadata {
    pub session_id: String,
    pub duration: String,
    pub duration_seconds: Option<f64>,
    pub timestamp: String,
}

/// Everything a renderer may read.
pub struct RenderContext<'a> {
    pub transcript: &'a str,
    pub resolved: &'a ResolvedMetadata,
    pub metadata: &'a ExportMetadata,
    pub capture: &'a Path,
}

/// Output of a renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    /// Text to write to the output path.
    Document(String),
    /// File to copy byte-for-byte to the output path.
    Copy(PathBuf),
}

/// Render an artifact in the given format.
pub fn render(format: ExportFormat, ctx: &RenderContext<'_>) -> ExportResult<Artifact> {
    let doc = match format {
        ExportFormat::Text => render_text(ctx),
        ExportFormat::Markdown => render_markdown(ctx),
        ExportFormat::Json => render_json(ctx)?,
        ExportFormat::Html => render_html(ctx),
        ExportFormat::Cast => return Ok(Artifact::Copy(ctx.capture.to_path_buf())),
    };
    Ok(Artifact::Document(doc))
}

fn render_text(ctx: &RenderContext<'_>) -> String {
    let m = ctx.resolved;
    let rule = "=".repeat(60);
    format!(
        "Session: {}\nDuration: {}\nDate: {}\n\n{rule}\nTerminal Output\n{rule}\n\n{}\n",
        m.session_id, m.duration, m.timestamp, ctx.transcript
    )
}

fn render_markdown(ctx: &RenderContext<'_>) -> String {
    let m = ctx.resolved;
    format!(
        "# Session: {}\n\n**Duration:** {}\n**Date:** {}\n\n## Terminal Output\n\n```\n{}\n```\n\n---\n\n*Recorded with [RecCli]({})*\n",
        m.session_id, m.duration, m.timestamp, ctx.transcript, PROJECT_URL
    )
}

#[derive(Serialize)]
struct SessionRecord<'a> {
    format: &'static str,
    version: &'static str,
    session_id: &'a str,
    duration: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_seconds: Option<f64>,
    timestamp: &'a str,
    terminal_output: &'a str,
    metadata: &'a ExportMetadata,
    source_file: String,
}

fn render_json(ctx: &RenderContext<'_>) -> ExportResult<String> {
    let m = ctx.resolved;
    let record = SessionRecord {
        format: FORMAT_TAG,
        version: FORMAT_VERSION,
        session_id: &m.session_id,
        duration: &m.duration,
        duration_seconds: m.duration_seconds,
        timestamp: &m.timestamp,
        terminal_output: ctx.transcript,
        metadata: ctx.metadata,
        source_file: ctx.capture.display().to_string(),
    };
    Ok(serde_json::to_string_pretty(&record)?)
}

/// Escape the characters HTML treats as markup.
///
/// `&` goes first so the entities produced for `<` and `>` are not escaped
/// a second time.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn render_html(ctx: &RenderContext<'_>) -> String {
    let m = ctx.resolved;
    let session_id = &m.session_id;
    let duration = &m.duration;
    let timestamp = &m.timestamp;
    let output = escape_html(ctx.transcript);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Session: {session_id}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 1200px;
            margin: 0 auto;
            padding: 20px;
            background: #f5f5f5;
        }}
        .header {{
            background: white;
            padding: 20px;
            border-radius: 8px;
            margin-bottom: 20px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .header h1 {{
            margin: 0 0 10px 0;
            color: #333;
        }}
        .metadata {{
            color: #666;
            font-size: 14px;
        }}
        .terminal {{
            background: #1e1e1e;
            color: #d4d4d4;
            padding: 20px;
            border-radius: 8px;
            overflow-x: auto;
            box-shadow: 0 2px 4px rgba(0,0,0,0.2);
            font-family: 'Monaco', 'Menlo', 'Consolas', monospace;
            font-size: 13px;
            line-height: 1.5;
            white-space: pre-wrap;
            word-break: break-all;
        }}
        .footer {{
            text-align: center;
            margin-top: 20px;
            color: #999;
            font-size: 12px;
        }}
        .footer a {{
            color: #27ae60;
            text-decoration: none;
        }}
        .footer a:hover {{
            text-decoration: underline;
        }}
    </style>
</head>
<body>
    <div class="header">
        <h1>Session: {session_id}</h1>
        <div class="metadata">
            <strong>Duration:</strong> {duration} |
            <strong>Date:</strong> {timestamp}
        </div>
    </div>

    <div class="terminal">{output}</div>

    <div class="footer">
        Recorded with <a href="{PROJECT_URL}" target="_blank">RecCli</a>
    </div>
</body>
</html>
"#
    )
}
