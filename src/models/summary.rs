//! Derived budget figures

use serde::Serialize;
use std::fmt;

use super::money::Money;

/// Figures derived from `BudgetInputs`. Recomputed on demand, never stored.
///
/// Negative values are meaningful: they describe a deficit budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BudgetSummary {
    pub monthly_income: Money,
    pub total_monthly_expenses: Money,
    pub income_after_expenses: Money,
    pub savings_goal_month: Money,
    pub discretionary_month: Money,
    pub discretionary_day: Money,
    pub discretionary_week: Money,
}

/// Conditions the presentation layer should flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetWarning {
    /// No income has been entered
    NoIncome,
    /// Expenses exceed income
    DeficitAfterExpenses,
    /// Expenses fit, but the savings goal does not
    SavingsGoalExceedsSurplus,
}

impl fmt::Display for BudgetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoIncome => write!(f, "No income entered yet"),
            Self::DeficitAfterExpenses => write!(f, "Expenses are higher than income"),
            Self::SavingsGoalExceedsSurplus => {
                write!(f, "Savings goal is larger than what is left after expenses")
            }
        }
    }
}

impl BudgetSummary {
    pub fn warnings(&self) -> Vec<BudgetWarning> {
        let mut warnings = Vec::new();
        if self.monthly_income.is_zero() {
            warnings.push(BudgetWarning::NoIncome);
        }
        if self.income_after_expenses.is_negative() {
            warnings.push(BudgetWarning::DeficitAfterExpenses);
        } else if self.discretionary_month.is_negative() {
            warnings.push(BudgetWarning::SavingsGoalExceedsSurplus);
        }
        warnings
    }

    /// True when there is money left to spend after expenses and savings
    pub fn is_healthy(&self) -> bool {
        !self.discretionary_month.is_negative() && self.monthly_income.is_positive()
    }

    /// Rule-of-thumb guidance derived from income and expenses
    pub fn insights(&self) -> BudgetInsights {
        let income = self.monthly_income;
        let expenses = self.total_monthly_expenses;
        let expense_ratio_permille = ratio_permille(expenses, income);

        BudgetInsights {
            expense_ratio_permille,
            high_expenses: match expense_ratio_permille {
                Some(permille) => permille > HIGH_EXPENSE_RATIO_PERCENT * 10,
                None => expenses.is_positive(),
            },
            recommended_savings: income.scale(SAVINGS_PERCENT, 100),
            emergency_fund: expenses * EMERGENCY_FUND_MONTHS,
            targets: income.is_positive().then(|| SpendingTargets {
                essentials: income.scale(ESSENTIALS_PERCENT, 100),
                wants: income.scale(WANTS_PERCENT, 100),
                savings: income.scale(SAVINGS_PERCENT, 100),
            }),
        }
    }
}

/// Expenses above this share of income are flagged
pub const HIGH_EXPENSE_RATIO_PERCENT: i64 = 70;
/// Months of expenses an emergency fund should cover
pub const EMERGENCY_FUND_MONTHS: i64 = 6;
pub const ESSENTIALS_PERCENT: i64 = 50;
pub const WANTS_PERCENT: i64 = 30;
pub const SAVINGS_PERCENT: i64 = 20;

/// Guidance shown next to the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetInsights {
    /// Expenses as tenths of a percent of income. `None` without income.
    pub expense_ratio_permille: Option<i64>,
    /// Expenses exceed 70% of income, or there are expenses and no income
    pub high_expenses: bool,
    /// 20% of monthly income
    pub recommended_savings: Money,
    /// Six months of expenses
    pub emergency_fund: Money,
    /// 50/30/20 split of income. `None` without income.
    pub targets: Option<SpendingTargets>,
}

/// The 50/30/20 split of monthly income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpendingTargets {
    pub essentials: Money,
    pub wants: Money,
    pub savings: Money,
}

fn ratio_permille(part: Money, whole: Money) -> Option<i64> {
    if !whole.is_positive() {
        return None;
    }
    let part = part.cents().max(0) as i128;
    let whole = whole.cents() as i128;
    let permille = (part * 1000 + whole / 2) / whole;
    Some(permille.min(i64::MAX as i128) as i64)
}
