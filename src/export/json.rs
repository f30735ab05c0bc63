//! JSON Export functionality
//!
//! Exports the inputs together with the derived figures and a growth
//! projection, so the file is readable without running the calculator.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{
    BudgetInputs, BudgetInsights, BudgetSummary, GrowthProjection, ReturnRateProfile,
};
use crate::services::{BudgetEngine, GrowthProjector};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export document
#[derive(Debug, Clone, Serialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Everything the user entered
    pub inputs: BudgetInputs,

    /// Figures derived from the inputs
    pub summary: BudgetSummary,

    /// Rule-of-thumb guidance derived from the summary
    pub insights: BudgetInsights,

    /// Growth of the yearly savings goal
    pub projection: GrowthProjection,
}

impl FullExport {
    /// Build an export, projecting the yearly savings goal with `profile`
    pub fn from_inputs(
        inputs: &BudgetInputs,
        profile: ReturnRateProfile,
        horizon_years: u32,
    ) -> Self {
        let summary = BudgetEngine::compute(inputs);
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            inputs: inputs.clone(),
            summary,
            insights: summary.insights(),
            projection: GrowthProjector::project(inputs.savings_goal_year(), profile, horizon_years),
        }
    }
}

/// Write the export as pretty-printed JSON
pub fn export_full_json<W: Write>(export: &FullExport, writer: &mut W) -> SpendwiseResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| SpendwiseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| SpendwiseError::Export(e.to_string()))?;
    Ok(())
}
