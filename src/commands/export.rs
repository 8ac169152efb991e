//! Export command handler

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use reccli::files::filename;
use reccli::{
    format_duration, CaptureInfo, Config, ExportFormat, ExportMetadata, Exporter, Extractor,
};

use super::{confirm, extraction_config};

/// Timestamp layout used when filling metadata from the recording.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Arguments of `reccli export`.
#[derive(Debug, Default)]
pub struct ExportArgs {
    pub capture: PathBuf,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub session_id: Option<String>,
    pub duration_secs: Option<f64>,
    pub duration: Option<String>,
    pub timestamp: Option<String>,
    pub metadata: Option<PathBuf>,
    pub force: bool,
    pub no_converter: bool,
}

/// Handle the export command.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: ExportArgs) -> Result<()> {
    let config = Config::load()?;

    if !args.capture.exists() {
        tracing::warn!(capture = %args.capture.display(), "capture file does not exist");
    }

    let format = resolve_format(args.format.as_deref(), args.output.as_deref(), &config)?;
    let metadata = build_metadata(&args)?;

    let output = match &args.output {
        Some(path) => path.clone(),
        None => {
            let dir = config.output_directory();
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            let session_id = metadata.resolve(&args.capture).session_id;
            filename::export_path(&dir, &session_id, format)
        }
    };

    if output.exists()
        && !args.force
        && !confirm(&format!("{} exists. Overwrite?", output.display()))?
    {
        bail!(
            "Not overwriting {} (use --force to replace it)",
            output.display()
        );
    }

    let extractor = Extractor::new(extraction_config(&config, args.no_converter));
    let exporter = Exporter::with_extractor(&args.capture, metadata, &extractor);
    exporter
        .export_as(&output, format)
        .with_context(|| format!("Failed to export {}", args.capture.display()))?;

    let size = fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
    println!(
        "Exported {} ({}, {})",
        output.display(),
        format,
        humansize::format_size(size, humansize::DECIMAL)
    );
    Ok(())
}

/// Pick the export format: explicit selector, else output extension, else config.
pub fn resolve_format(
    selector: Option<&str>,
    output: Option<&Path>,
    config: &Config,
) -> Result<ExportFormat> {
    if let Some(selector) = selector {
        return Ok(selector.parse()?);
    }
    Ok(output
        .and_then(ExportFormat::from_path)
        .unwrap_or_else(|| config.default_format()))
}

/// Merge the metadata file, command-line flags, and facts probed from the capture.
pub fn build_metadata(args: &ExportArgs) -> Result<ExportMetadata> {
    let mut metadata = match &args.metadata {
        Some(path) => read_metadata(path)?,
        None => ExportMetadata::default(),
    };

    if let Some(id) = &args.session_id {
        metadata.session_id = Some(id.clone());
    }
    if let Some(secs) = args.duration_secs {
        metadata.duration_seconds = Some(secs);
        metadata.duration = Some(format_duration(secs));
    }
    if let Some(text) = &args.duration {
        metadata.duration = Some(text.clone());
    }
    if let Some(ts) = &args.timestamp {
        metadata.timestamp = Some(ts.clone());
    }

    let needs_probe = metadata.duration.is_none()
        || metadata.duration_seconds.is_none()
        || metadata.timestamp.is_none();
    if needs_probe {
        if let Some(info) = CaptureInfo::probe(&args.capture) {
            fill_from_capture(&mut metadata, &info);
        }
    }

    Ok(metadata)
}

fn fill_from_capture(metadata: &mut ExportMetadata, info: &CaptureInfo) {
    if metadata.duration.is_none() && metadata.duration_seconds.is_none() {
        metadata.duration_seconds = Some(info.duration_secs);
    }
    if metadata.duration.is_none() {
        if let Some(secs) = metadata.duration_seconds {
            metadata.duration = Some(format_duration(secs));
        }
    }
    if metadata.timestamp.is_none() {
        metadata.timestamp = info
            .started_at
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string());
    }
}

fn read_metadata(path: &Path) -> Result<ExportMetadata> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read metadata file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid metadata file {}", path.display()))
}
