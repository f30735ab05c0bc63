//! Budget engine
//!
//! Turns a `BudgetInputs` snapshot into a `BudgetSummary`. Pure: no storage,
//! no clock, no hidden state, so the same inputs always give the same figures.

use crate::models::income::WEEKS_PER_MONTH;
use crate::models::line_item;
use crate::models::{average_monthly_income, BudgetInputs, BudgetSummary, IncomeMode, Money};

/// Fixed month length used for the daily figure
pub const DAYS_PER_MONTH: i64 = 30;

/// Derives spending figures from budget inputs
pub struct BudgetEngine;

impl BudgetEngine {
    /// Compute every derived figure
    ///
    /// ```
    /// use spendwise::models::{BudgetInputs, Money};
    /// use spendwise::services::BudgetEngine;
    ///
    /// let mut inputs = BudgetInputs::default();
    /// inputs.biweekly_paycheck = Money::from_dollars(2000);
    /// let summary = BudgetEngine::compute(&inputs);
    /// assert_eq!(summary.monthly_income, Money::from_dollars(4000));
    /// ```
    pub fn compute(inputs: &BudgetInputs) -> BudgetSummary {
        let monthly_income = Self::base_monthly_income(inputs) + Self::additional_monthly_income(inputs);
        let total_monthly_expenses = Self::total_monthly_expenses(inputs);
        let income_after_expenses = monthly_income - total_monthly_expenses;

        let savings_goal_month = inputs.savings_goal_year().scale(1, 12);
        let discretionary_month = income_after_expenses - savings_goal_month;

        BudgetSummary {
            monthly_income,
            total_monthly_expenses,
            income_after_expenses,
            savings_goal_month,
            discretionary_month,
            discretionary_day: discretionary_month.scale(1, DAYS_PER_MONTH),
            discretionary_week: discretionary_month.scale(WEEKS_PER_MONTH.1, WEEKS_PER_MONTH.0),
        }
    }

    /// Paycheck-based or sample-averaged income, depending on the mode
    pub fn base_monthly_income(inputs: &BudgetInputs) -> Money {
        match inputs.income_mode {
            IncomeMode::Fixed => inputs.biweekly_paycheck * 2,
            IncomeMode::Variable => average_monthly_income(&inputs.variable_income_samples),
        }
    }

    /// All additional streams normalized to a monthly figure
    pub fn additional_monthly_income(inputs: &BudgetInputs) -> Money {
        inputs
            .additional_incomes
            .iter()
            .map(|income| income.monthly_amount())
            .sum()
    }

    /// Expenses and subscriptions together
    pub fn total_monthly_expenses(inputs: &BudgetInputs) -> Money {
        line_item::total(&inputs.expenses) + line_item::total(&inputs.subscriptions)
    }
}
