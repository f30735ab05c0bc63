//! Savings goal CLI command

use clap::Args;

use super::validate_amount;
use crate::config::Settings;
use crate::display::format_money;
use crate::error::SpendwiseResult;
use crate::storage::{BudgetInputStore, KeyValueStore};

/// Set the savings goal as a yearly or a monthly figure; the other is derived
#[derive(Args, Debug)]
pub struct SavingsArgs {
    /// Yearly savings goal
    #[arg(short, long, conflicts_with = "monthly")]
    pub yearly: Option<String>,

    /// Monthly savings goal
    #[arg(short, long)]
    pub monthly: Option<String>,
}

/// Handle the savings command. With no flags, shows the current goal.
pub fn handle_savings_command<S: KeyValueStore>(
    store: &mut BudgetInputStore<S>,
    settings: &Settings,
    args: SavingsArgs,
) -> SpendwiseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    let inputs = match (args.yearly, args.monthly) {
        (Some(yearly), _) => {
            validate_amount(&yearly)?;
            store.set_savings_goal_year(&yearly)
        }
        (None, Some(monthly)) => {
            validate_amount(&monthly)?;
            store.set_savings_goal_month(&monthly)
        }
        (None, None) => store.inputs(),
    };

    println!(
        "Savings goal: {} per year ({} per month)",
        format_money(inputs.savings_goal_year(), symbol),
        format_money(inputs.savings_goal_month(), symbol)
    );

    Ok(())
}
