//! YAML Export functionality
//!
//! Same document as the JSON export, with a comment header for people
//! reading it by hand.

use std::io::Write;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::export::json::FullExport;

/// Export the full document to YAML format
pub fn export_full_yaml<W: Write>(export: &FullExport, writer: &mut W) -> SpendwiseResult<()> {
    write_header(export, writer).map_err(|e| SpendwiseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| SpendwiseError::Export(e.to_string()))?;

    Ok(())
}

fn write_header<W: Write>(export: &FullExport, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "# Spendwise Budget Export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer, "#")?;
    writeln!(
        writer,
        "# summary and projection are derived from inputs and recomputed on load."
    )?;
    writeln!(writer)
}
