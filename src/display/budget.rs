//! Budget display formatting
//!
//! Formats the summary and the editable collections as terminal tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_money, format_money_colored, truncate};
use crate::models::{
    AdditionalIncome, BudgetInputs, BudgetInsights, BudgetSummary, LineItem, VariableIncomeSample,
};

const NAME_WIDTH: usize = 32;

#[derive(Tabled)]
struct FigureRow {
    #[tabled(rename = "Figure")]
    label: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct LineItemRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Monthly")]
    amount: String,
}

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
}

#[derive(Tabled)]
struct SampleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Month")]
    period: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Counted")]
    counted: &'static str,
}

/// Format the derived figures, with any warnings underneath
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let rows = vec![
        FigureRow {
            label: "Monthly income",
            amount: format_money(summary.monthly_income, symbol),
        },
        FigureRow {
            label: "Monthly expenses",
            amount: format_money(summary.total_monthly_expenses, symbol),
        },
        FigureRow {
            label: "Left after expenses",
            amount: format_money_colored(summary.income_after_expenses, symbol),
        },
        FigureRow {
            label: "Monthly savings goal",
            amount: format_money(summary.savings_goal_month, symbol),
        },
        FigureRow {
            label: "Spending money / month",
            amount: format_money_colored(summary.discretionary_month, symbol),
        },
        FigureRow {
            label: "Spending money / week",
            amount: format_money_colored(summary.discretionary_week, symbol),
        },
        FigureRow {
            label: "Spending money / day",
            amount: format_money_colored(summary.discretionary_day, symbol),
        },
    ];

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    for warning in summary.warnings() {
        output.push_str(&format!("\nWarning: {}", warning));
    }
    output
}

/// Budget tips: expense ratio, savings and emergency fund targets, 50/30/20 split
pub fn format_insights(insights: &BudgetInsights, symbol: &str) -> String {
    let mut lines = Vec::new();

    match insights.expense_ratio_permille {
        Some(permille) => {
            let verdict = if insights.high_expenses {
                "Try to reduce this to under 70%."
            } else {
                "Expenses are at a manageable level."
            };
            lines.push(format!(
                "Expenses use {}.{}% of income. {}",
                permille / 10,
                permille % 10,
                verdict
            ));
        }
        None if insights.high_expenses => {
            lines.push("Expenses are entered but there is no income to cover them.".to_string());
        }
        None => {}
    }

    lines.push(format!(
        "Aim to save {}/month (20% of income).",
        format_money(insights.recommended_savings, symbol)
    ));
    lines.push(format!(
        "Build an emergency fund of {} (6 months of expenses).",
        format_money(insights.emergency_fund, symbol)
    ));

    if let Some(targets) = insights.targets {
        lines.push(format!(
            "50/30/20 targets: essentials up to {}, wants up to {}, savings at least {}.",
            format_money(targets.essentials, symbol),
            format_money(targets.wants, symbol),
            format_money(targets.savings, symbol)
        ));
    }

    lines.join("\n")
}

/// Format expenses or subscriptions with a total row
pub fn format_line_items<I: std::fmt::Display>(
    items: &[LineItem<I>],
    symbol: &str,
    empty_message: &str,
) -> String {
    if items.is_empty() {
        return empty_message.to_string();
    }

    let mut rows: Vec<LineItemRow> = items
        .iter()
        .map(|item| LineItemRow {
            id: item.id.to_string(),
            name: truncate(&item.name, NAME_WIDTH),
            amount: format_money(item.amount, symbol),
        })
        .collect();
    rows.push(LineItemRow {
        id: String::new(),
        name: "Total".into(),
        amount: format_money(crate::models::line_item::total(items), symbol),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format additional income streams with their monthly equivalents
pub fn format_additional_incomes(incomes: &[AdditionalIncome], symbol: &str) -> String {
    if incomes.is_empty() {
        return "No additional income streams.".to_string();
    }

    let rows: Vec<IncomeRow> = incomes
        .iter()
        .map(|income| IncomeRow {
            id: income.id.to_string(),
            name: truncate(&income.name, NAME_WIDTH),
            amount: format_money(income.amount, symbol),
            frequency: income.frequency.to_string(),
            monthly: format_money(income.monthly_amount(), symbol),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format variable income samples, marking which ones count toward the average
pub fn format_samples(samples: &[VariableIncomeSample], symbol: &str) -> String {
    if samples.is_empty() {
        return "No income samples recorded.".to_string();
    }

    let rows: Vec<SampleRow> = samples
        .iter()
        .map(|sample| SampleRow {
            id: sample.id.to_string(),
            period: if sample.period.is_empty() {
                "-".into()
            } else {
                sample.period.clone()
            },
            amount: format_money(sample.amount, symbol),
            counted: if sample.is_valid() { "yes" } else { "no" },
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// One-paragraph description of how income is currently computed
pub fn format_income_source(inputs: &BudgetInputs, symbol: &str) -> String {
    match inputs.income_mode {
        crate::models::IncomeMode::Fixed => format!(
            "Income mode: fixed (bi-weekly paycheck {})",
            format_money(inputs.biweekly_paycheck, symbol)
        ),
        crate::models::IncomeMode::Variable => {
            let counted = inputs
                .variable_income_samples
                .iter()
                .filter(|s| s.is_valid())
                .count();
            format!(
                "Income mode: variable (average of {} of {} samples)",
                counted,
                inputs.variable_income_samples.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseId, Frequency, IncomeId, Money, SampleId};

    #[test]
    fn test_summary_includes_all_figures() {
        let summary = BudgetSummary {
            monthly_income: Money::from_dollars(4000),
            discretionary_month: Money::from_dollars(250),
            ..Default::default()
        };
        let output = format_summary(&summary, "$");
        assert!(output.contains("Monthly income"));
        assert!(output.contains("$4000.00"));
        assert!(output.contains("Spending money / day"));
        assert!(!output.contains("Warning"));
    }

    #[test]
    fn test_summary_shows_warnings() {
        let summary = BudgetSummary {
            monthly_income: Money::from_dollars(1000),
            income_after_expenses: Money::from_dollars(-10),
            discretionary_month: Money::from_dollars(-10),
            ..Default::default()
        };
        assert!(format_summary(&summary, "$").contains("Warning: Expenses are higher than income"));
    }

    #[test]
    fn test_line_items_total_row() {
        let items = vec![
            Expense::new(ExpenseId::from_raw(1), "Rent", Money::from_dollars(1000)),
            Expense::new(ExpenseId::from_raw(2), "Food", Money::from_dollars(400)),
        ];
        let output = format_line_items(&items, "$", "none");
        assert!(output.contains("exp-1"));
        assert!(output.contains("Total"));
        assert!(output.contains("$1400.00"));
    }

    #[test]
    fn test_empty_collections() {
        let none: Vec<Expense> = Vec::new();
        assert_eq!(format_line_items(&none, "$", "No expenses."), "No expenses.");
        assert_eq!(format_additional_incomes(&[], "$"), "No additional income streams.");
        assert_eq!(format_samples(&[], "$"), "No income samples recorded.");
    }

    #[test]
    fn test_income_rows_show_monthly_equivalent() {
        let incomes = vec![AdditionalIncome::new(
            IncomeId::from_raw(3),
            "Tips",
            Money::from_dollars(100),
            Frequency::Weekly,
        )];
        let output = format_additional_incomes(&incomes, "$");
        assert!(output.contains("weekly"));
        assert!(output.contains("$433.00"));
    }

    #[test]
    fn test_samples_mark_counted() {
        let samples = vec![
            VariableIncomeSample::new(SampleId::from_raw(1), "2024-01", Money::from_dollars(900)),
            VariableIncomeSample::new(SampleId::from_raw(2), "", Money::from_dollars(900)),
        ];
        let output = format_samples(&samples, "$");
        assert!(output.contains("yes"));
        assert!(output.contains("no"));
    }

    #[test]
    fn test_income_source_description() {
        let mut inputs = BudgetInputs::default();
        inputs.biweekly_paycheck = Money::from_dollars(1500);
        assert_eq!(
            format_income_source(&inputs, "$"),
            "Income mode: fixed (bi-weekly paycheck $1500.00)"
        );
    }

    #[test]
    fn test_insights_text() {
        let summary = BudgetSummary {
            monthly_income: Money::from_dollars(1000),
            total_monthly_expenses: Money::from_dollars(800),
            ..Default::default()
        };
        let output = format_insights(&summary.insights(), "$");
        assert!(output.contains("Expenses use 80.0% of income. Try to reduce"));
        assert!(output.contains("$200.00/month"));
        assert!(output.contains("$4800.00"));
        assert!(output.contains("essentials up to $500.00"));
    }

    #[test]
    fn test_insights_text_without_income() {
        let summary = BudgetSummary {
            total_monthly_expenses: Money::from_dollars(100),
            ..Default::default()
        };
        let output = format_insights(&summary.insights(), "$");
        assert!(output.contains("no income"));
        assert!(!output.contains("50/30/20"));
    }
}
