//! Budget summary command

use crate::config::Settings;
use crate::display::{format_income_source, format_insights, format_summary};
use crate::error::SpendwiseResult;
use crate::storage::{BudgetInputStore, KeyValueStore};

/// Print the derived figures and any warnings
pub fn handle_summary_command<S: KeyValueStore>(
    store: &BudgetInputStore<S>,
    settings: &Settings,
) -> SpendwiseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    println!("Budget Summary");
    println!("{}", "=".repeat(40));
    println!("{}", format_income_source(store.inputs(), symbol));
    println!();
    let summary = store.summary();
    println!("{}", format_summary(&summary, symbol));
    println!();
    println!("Budget Tips");
    println!("{}", "-".repeat(40));
    println!("{}", format_insights(&summary.insights(), symbol));

    if store.inputs().is_empty() {
        println!();
        println!("Tip: start with 'spendwise income paycheck <amount>'");
    }

    Ok(())
}
