//! Income CLI commands
//!
//! Paycheck, income mode, variable income samples and additional streams.

use clap::Subcommand;

use super::{parse_id, validate_amount};
use crate::config::Settings;
use crate::display::{
    format_additional_incomes, format_income_source, format_money, format_samples,
};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{Frequency, IncomeField, IncomeId, IncomeMode, SampleField, SampleId};
use crate::services::BudgetEngine;
use crate::storage::{BudgetInputStore, KeyValueStore};

/// Income subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Set the bi-weekly paycheck used in fixed mode
    Paycheck {
        /// Paycheck amount (e.g., "2500" or "2500.00")
        amount: String,
    },

    /// Switch between a fixed paycheck and averaged variable income
    Mode {
        /// "fixed" or "variable"
        mode: String,
    },

    /// Monthly income samples averaged in variable mode
    #[command(subcommand)]
    Sample(SampleCommands),

    /// Additional income streams (side jobs, benefits, ...)
    #[command(subcommand)]
    Extra(ExtraCommands),

    /// Show how monthly income is currently computed
    Show,
}

/// Variable income sample subcommands
#[derive(Subcommand, Debug)]
pub enum SampleCommands {
    /// Record a month of income
    Add {
        /// Month label (e.g., "2024-01")
        period: String,
        /// Amount earned that month
        amount: String,
    },

    /// Change a recorded sample
    Update {
        /// Sample ID (e.g., "smp-17")
        id: String,
        #[arg(short, long)]
        period: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
    },

    /// Remove a sample
    #[command(alias = "delete")]
    Remove {
        /// Sample ID
        id: String,
    },

    /// List recorded samples
    #[command(alias = "ls")]
    List,
}

/// Additional income subcommands
#[derive(Subcommand, Debug)]
pub enum ExtraCommands {
    /// Add an income stream
    Add {
        /// Name of the stream
        name: String,
        /// Amount per period
        amount: String,
        /// weekly, biweekly, monthly or yearly
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
    },

    /// Change an income stream
    Update {
        /// Income ID (e.g., "inc-5")
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        frequency: Option<String>,
    },

    /// Delete an income stream
    #[command(alias = "remove")]
    Delete {
        /// Income ID
        id: String,
    },

    /// List income streams
    #[command(alias = "ls")]
    List,
}

fn parse_frequency(raw: &str) -> SpendwiseResult<Frequency> {
    raw.parse().map_err(SpendwiseError::Validation)
}

/// Handle an income command
pub fn handle_income_command<S: KeyValueStore>(
    store: &mut BudgetInputStore<S>,
    settings: &Settings,
    cmd: IncomeCommands,
) -> SpendwiseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Paycheck { amount } => {
            validate_amount(&amount)?;
            let inputs = store.set_income(&amount);
            println!(
                "Bi-weekly paycheck set to {}",
                format_money(inputs.biweekly_paycheck, symbol)
            );
            if inputs.income_mode == IncomeMode::Variable {
                println!("Note: income mode is variable, so the paycheck is not used.");
                println!("Use 'spendwise income mode fixed' to switch.");
            }
        }

        IncomeCommands::Mode { mode } => {
            let mode: IncomeMode = mode.parse().map_err(SpendwiseError::Validation)?;
            let inputs = store.set_income_mode(mode);
            println!("{}", format_income_source(inputs, symbol));
        }

        IncomeCommands::Sample(cmd) => handle_sample_command(store, symbol, cmd)?,

        IncomeCommands::Extra(cmd) => handle_extra_command(store, symbol, cmd)?,

        IncomeCommands::Show => {
            let inputs = store.inputs();
            println!("{}", format_income_source(inputs, symbol));
            println!(
                "Base monthly income:       {}",
                format_money(BudgetEngine::base_monthly_income(inputs), symbol)
            );
            println!(
                "Additional monthly income: {}",
                format_money(BudgetEngine::additional_monthly_income(inputs), symbol)
            );
        }
    }

    Ok(())
}

fn handle_sample_command<S: KeyValueStore>(
    store: &mut BudgetInputStore<S>,
    symbol: &str,
    cmd: SampleCommands,
) -> SpendwiseResult<()> {
    match cmd {
        SampleCommands::Add { period, amount } => {
            validate_amount(&amount)?;
            let inputs = store.add_variable_income_sample(period, &amount);
            if let Some(sample) = inputs.variable_income_samples.last() {
                println!(
                    "Recorded {} for {} ({})",
                    format_money(sample.amount, symbol),
                    sample.period,
                    sample.id
                );
                if !sample.is_valid() {
                    println!("Note: samples without a month or amount are left out of the average.");
                }
            }
        }

        SampleCommands::Update { id, period, amount } => {
            let sample_id = parse_id(&id, SampleId::parse)?;
            if !store
                .inputs()
                .variable_income_samples
                .iter()
                .any(|s| s.id == sample_id)
            {
                return Err(SpendwiseError::sample_not_found(id));
            }

            let mut fields = Vec::new();
            if let Some(period) = period {
                fields.push(SampleField::Period(period));
            }
            if let Some(amount) = amount {
                validate_amount(&amount)?;
                fields.push(SampleField::Amount(amount));
            }
            if fields.is_empty() {
                return Err(SpendwiseError::Validation(
                    "Nothing to update: pass --period or --amount".into(),
                ));
            }

            for field in fields {
                store.update_variable_income_sample(sample_id, field);
            }
            println!("Updated sample {}", sample_id);
        }

        SampleCommands::Remove { id } => {
            let sample_id = parse_id(&id, SampleId::parse)?;
            let before = store.inputs().variable_income_samples.len();
            if store.remove_variable_income_sample(sample_id).variable_income_samples.len() == before
            {
                return Err(SpendwiseError::sample_not_found(id));
            }
            println!("Removed sample {}", sample_id);
        }

        SampleCommands::List => {
            println!("{}", format_samples(&store.inputs().variable_income_samples, symbol));
        }
    }

    Ok(())
}

fn handle_extra_command<S: KeyValueStore>(
    store: &mut BudgetInputStore<S>,
    symbol: &str,
    cmd: ExtraCommands,
) -> SpendwiseResult<()> {
    match cmd {
        ExtraCommands::Add {
            name,
            amount,
            frequency,
        } => {
            validate_amount(&amount)?;
            let frequency = parse_frequency(&frequency)?;
            let inputs = store.add_additional_income(name, &amount, frequency);
            if let Some(income) = inputs.additional_incomes.last() {
                println!(
                    "Added income '{}' ({}): {} {} = {} per month",
                    income.name,
                    income.id,
                    format_money(income.amount, symbol),
                    income.frequency,
                    format_money(income.monthly_amount(), symbol)
                );
            }
        }

        ExtraCommands::Update {
            id,
            name,
            amount,
            frequency,
        } => {
            let income_id = parse_id(&id, IncomeId::parse)?;
            if !store
                .inputs()
                .additional_incomes
                .iter()
                .any(|i| i.id == income_id)
            {
                return Err(SpendwiseError::income_not_found(id));
            }

            let mut fields = Vec::new();
            if let Some(name) = name {
                fields.push(IncomeField::Name(name));
            }
            if let Some(amount) = amount {
                validate_amount(&amount)?;
                fields.push(IncomeField::Amount(amount));
            }
            if let Some(frequency) = frequency {
                fields.push(IncomeField::Frequency(parse_frequency(&frequency)?));
            }
            if fields.is_empty() {
                return Err(SpendwiseError::Validation(
                    "Nothing to update: pass --name, --amount or --frequency".into(),
                ));
            }

            for field in fields {
                store.update_additional_income(income_id, field);
            }
            println!("Updated income {}", income_id);
        }

        ExtraCommands::Delete { id } => {
            let income_id = parse_id(&id, IncomeId::parse)?;
            let before = store.inputs().additional_incomes.len();
            if store.delete_additional_income(income_id).additional_incomes.len() == before {
                return Err(SpendwiseError::income_not_found(id));
            }
            println!("Deleted income {}", income_id);
        }

        ExtraCommands::List => {
            println!("{}", format_additional_incomes(&store.inputs().additional_incomes, symbol));
        }
    }

    Ok(())
}
