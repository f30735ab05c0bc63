//! CLI command for data export

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::export::{csv, json, yaml, FullExport};
use crate::models::{ReturnRateProfile, MAX_HORIZON_YEARS};
use crate::storage::{BudgetInputStore, KeyValueStore};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON document with inputs, summary and projection
    Json,
    /// Projection table, one row per year
    Csv,
    /// Same document as JSON, human-readable
    Yaml,
}

/// Export options
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Return profile for the included projection
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Projection horizon in years (at most 100)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=MAX_HORIZON_YEARS as i64))]
    pub years: Option<u32>,
}

/// Handle the export command
pub fn handle_export_command<S: KeyValueStore>(
    store: &BudgetInputStore<S>,
    settings: &Settings,
    args: ExportArgs,
) -> SpendwiseResult<()> {
    let profile = match args.profile.as_deref() {
        Some(raw) => raw
            .parse::<ReturnRateProfile>()
            .map_err(SpendwiseError::Validation)?,
        None => settings.default_return_profile,
    };
    let horizon = args.years.unwrap_or(settings.default_horizon_years);
    let export = FullExport::from_inputs(store.inputs(), profile, horizon);

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SpendwiseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&export, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| SpendwiseError::Export(e.to_string()))?;
            println!("Exported {:?} to: {}", args.format, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_export(&export, args.format, &mut handle)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    export: &FullExport,
    format: ExportFormat,
    writer: &mut W,
) -> SpendwiseResult<()> {
    match format {
        ExportFormat::Json => json::export_full_json(export, writer),
        ExportFormat::Csv => csv::export_projection_csv(&export.projection, writer),
        ExportFormat::Yaml => yaml::export_full_yaml(export, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKeyValueStore;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("budget.csv");

        let mut store = BudgetInputStore::open(MemoryKeyValueStore::new());
        store.set_savings_goal_year("10000");

        handle_export_command(
            &store,
            &Settings::default(),
            ExportArgs {
                format: ExportFormat::Csv,
                output: Some(output.clone()),
                profile: Some("moderate".into()),
                years: Some(2),
            },
        )
        .unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains("2,20000.00,22781.00,2781.00"));
    }

    #[test]
    fn test_export_rejects_unknown_profile() {
        let store = BudgetInputStore::open(MemoryKeyValueStore::new());
        let err = handle_export_command(
            &store,
            &Settings::default(),
            ExportArgs {
                format: ExportFormat::Json,
                output: None,
                profile: Some("yolo".into()),
                years: None,
            },
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
