//! CLI command handlers
//!
//! Bridges clap argument parsing with the input store and the calculators.
//! Handlers are generic over the key-value backend so they can be exercised
//! against the in-memory store.

pub mod export;
pub mod income;
pub mod line_items;
pub mod project;
pub mod savings;
pub mod summary;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use income::{handle_income_command, ExtraCommands, IncomeCommands, SampleCommands};
pub use line_items::{handle_expense_command, handle_subscription_command, LineItemCommands};
pub use project::{handle_project_command, ProjectArgs};
pub use savings::{handle_savings_command, SavingsArgs};
pub use summary::handle_summary_command;

use std::num::ParseIntError;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::Money;

/// Reject amounts the user clearly mistyped.
///
/// The store would quietly coerce these to zero; on the command line it is
/// friendlier to refuse them.
pub(crate) fn validate_amount(raw: &str) -> SpendwiseResult<()> {
    let amount = Money::parse(raw)
        .map_err(|e| SpendwiseError::Validation(format!("Invalid amount: {}", e)))?;
    if amount.is_negative() {
        return Err(SpendwiseError::Validation(format!(
            "Amount cannot be negative: {}",
            raw
        )));
    }
    Ok(())
}

/// Parse an id such as "exp-42" or "42"
pub(crate) fn parse_id<T>(
    raw: &str,
    parse: fn(&str) -> Result<T, ParseIntError>,
) -> SpendwiseResult<T> {
    parse(raw).map_err(|_| SpendwiseError::Validation(format!("Invalid id: {}", raw)))
}
