//! Formats command handler

use anyhow::Result;

use reccli::ExportFormat;

/// List supported export formats.
pub fn handle() -> Result<()> {
    print!("{}", format_table());
    Ok(())
}

fn format_table() -> String {
    ExportFormat::ALL
        .iter()
        .map(|f| format!("{:<6} {}\n", f.extension(), f.description()))
        .collect()
}
