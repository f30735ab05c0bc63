//! Growth projection command

use clap::Args;

use super::validate_amount;
use crate::config::Settings;
use crate::display::{
    format_milestones, format_money, format_profile_comparison, format_projection_header,
    format_projection_table,
};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{coerce_amount, Money, ReturnRateProfile, MAX_HORIZON_YEARS, MILESTONE_YEARS};
use crate::services::GrowthProjector;
use crate::storage::{BudgetInputStore, KeyValueStore};

/// Options for projecting savings growth
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// conservative, moderate or aggressive
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Number of years to simulate (at most 100)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=MAX_HORIZON_YEARS as i64))]
    pub years: Option<u32>,

    /// Yearly contribution (defaults to the yearly savings goal)
    #[arg(short, long)]
    pub contribution: Option<String>,

    /// Compare the final year of every profile
    #[arg(long, conflicts_with = "profile")]
    pub compare: bool,

    /// Only show the 10, 20 and 30 year marks
    #[arg(short, long)]
    pub milestones: bool,
}

/// Resolve the contribution: explicit flag first, then the savings goal
fn contribution<S: KeyValueStore>(
    store: &BudgetInputStore<S>,
    raw: Option<&str>,
) -> SpendwiseResult<Money> {
    match raw {
        Some(raw) => {
            validate_amount(raw)?;
            Ok(coerce_amount(raw))
        }
        None => Ok(store.inputs().savings_goal_year()),
    }
}

/// Handle the project command
pub fn handle_project_command<S: KeyValueStore>(
    store: &BudgetInputStore<S>,
    settings: &Settings,
    args: ProjectArgs,
) -> SpendwiseResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let horizon = args.years.unwrap_or(settings.default_horizon_years);
    let annual = contribution(store, args.contribution.as_deref())?;

    if annual.is_zero() {
        println!("Contribution is zero, so nothing grows.");
        println!("Set a goal with 'spendwise savings --yearly <amount>' or pass --contribution.");
    }

    if args.compare {
        let all = GrowthProjector::compare_profiles(annual, horizon);
        println!(
            "Investing {} per year for {} years",
            format_money(annual, symbol),
            horizon
        );
        println!("{}", format_profile_comparison(&all, symbol));
        return Ok(());
    }

    let profile = match args.profile {
        Some(raw) => raw
            .parse::<ReturnRateProfile>()
            .map_err(SpendwiseError::Validation)?,
        None => settings.default_return_profile,
    };

    let projection = GrowthProjector::project(annual, profile, horizon);
    println!("{}", format_projection_header(&projection, symbol));
    println!();
    if args.milestones {
        println!("{}", format_milestones(&projection, &MILESTONE_YEARS, symbol));
    } else {
        println!("{}", format_projection_table(&projection, symbol));
    }

    Ok(())
}
