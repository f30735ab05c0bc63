//! Expense and subscription CLI commands
//!
//! Both are plain name + monthly amount lists, so they share one
//! subcommand shape.

use clap::Subcommand;

use super::{parse_id, validate_amount};
use crate::config::Settings;
use crate::display::{format_line_items, format_money};
use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::{ExpenseId, LineItemField, SubscriptionId};
use crate::storage::{BudgetInputStore, KeyValueStore};

/// Subcommands for expenses and subscriptions
#[derive(Subcommand, Debug)]
pub enum LineItemCommands {
    /// Add an entry
    Add {
        /// Name (e.g., "Rent")
        name: String,
        /// Monthly amount
        amount: String,
    },

    /// Change an entry
    Update {
        /// Entry ID (e.g., "exp-12")
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
    },

    /// Delete an entry
    #[command(alias = "remove")]
    Delete {
        /// Entry ID
        id: String,
    },

    /// List entries with their total
    #[command(alias = "ls")]
    List,
}

fn collect_fields(name: Option<String>, amount: Option<String>) -> SpendwiseResult<Vec<LineItemField>> {
    let mut fields = Vec::new();
    if let Some(name) = name {
        fields.push(LineItemField::Name(name));
    }
    if let Some(amount) = amount {
        validate_amount(&amount)?;
        fields.push(LineItemField::Amount(amount));
    }
    if fields.is_empty() {
        return Err(SpendwiseError::Validation(
            "Nothing to update: pass --name or --amount".into(),
        ));
    }
    Ok(fields)
}

/// Handle an expense command
pub fn handle_expense_command<S: KeyValueStore>(
    store: &mut BudgetInputStore<S>,
    settings: &Settings,
    cmd: LineItemCommands,
) -> SpendwiseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        LineItemCommands::Add { name, amount } => {
            validate_amount(&amount)?;
            let inputs = store.add_expense(name, &amount);
            if let Some(expense) = inputs.expenses.last() {
                println!(
                    "Added expense '{}' ({}): {}",
                    expense.name,
                    expense.id,
                    format_money(expense.amount, symbol)
                );
            }
        }

        LineItemCommands::Update { id, name, amount } => {
            let expense_id = parse_id(&id, ExpenseId::parse)?;
            if !store.inputs().expenses.iter().any(|e| e.id == expense_id) {
                return Err(SpendwiseError::expense_not_found(id));
            }
            for field in collect_fields(name, amount)? {
                store.update_expense(expense_id, field);
            }
            println!("Updated expense {}", expense_id);
        }

        LineItemCommands::Delete { id } => {
            let expense_id = parse_id(&id, ExpenseId::parse)?;
            let before = store.inputs().expenses.len();
            if store.delete_expense(expense_id).expenses.len() == before {
                return Err(SpendwiseError::expense_not_found(id));
            }
            println!("Deleted expense {}", expense_id);
        }

        LineItemCommands::List => {
            println!(
                "{}",
                format_line_items(&store.inputs().expenses, symbol, "No expenses.")
            );
        }
    }

    Ok(())
}

/// Handle a subscription command
pub fn handle_subscription_command<S: KeyValueStore>(
    store: &mut BudgetInputStore<S>,
    settings: &Settings,
    cmd: LineItemCommands,
) -> SpendwiseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        LineItemCommands::Add { name, amount } => {
            validate_amount(&amount)?;
            let inputs = store.add_subscription(name, &amount);
            if let Some(sub) = inputs.subscriptions.last() {
                println!(
                    "Added subscription '{}' ({}): {}",
                    sub.name,
                    sub.id,
                    format_money(sub.amount, symbol)
                );
            }
        }

        LineItemCommands::Update { id, name, amount } => {
            let sub_id = parse_id(&id, SubscriptionId::parse)?;
            if !store.inputs().subscriptions.iter().any(|s| s.id == sub_id) {
                return Err(SpendwiseError::subscription_not_found(id));
            }
            for field in collect_fields(name, amount)? {
                store.update_subscription(sub_id, field);
            }
            println!("Updated subscription {}", sub_id);
        }

        LineItemCommands::Delete { id } => {
            let sub_id = parse_id(&id, SubscriptionId::parse)?;
            let before = store.inputs().subscriptions.len();
            if store.delete_subscription(sub_id).subscriptions.len() == before {
                return Err(SpendwiseError::subscription_not_found(id));
            }
            println!("Deleted subscription {}", sub_id);
        }

        LineItemCommands::List => {
            println!(
                "{}",
                format_line_items(&store.inputs().subscriptions, symbol, "No subscriptions.")
            );
        }
    }

    Ok(())
}
