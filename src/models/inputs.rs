//! The user-editable budget inputs
//!
//! `BudgetInputs` is the root aggregate everything else is derived from.
//! It is owned by the input store and handed to the engine by value or
//! reference; nothing in here performs I/O.

use serde::{Deserialize, Serialize};

use super::income::{AdditionalIncome, IncomeMode, VariableIncomeSample};
use super::line_item::{Expense, Subscription};
use super::money::{coerce_money, Money};

/// Everything the user has entered
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BudgetInputs {
    pub income_mode: IncomeMode,
    pub biweekly_paycheck: Money,
    pub variable_income_samples: Vec<VariableIncomeSample>,
    pub additional_incomes: Vec<AdditionalIncome>,
    pub expenses: Vec<Expense>,
    pub subscriptions: Vec<Subscription>,
    savings_goal_year: Money,
    savings_goal_month: Money,
}

impl BudgetInputs {
    /// Annual savings target
    pub fn savings_goal_year(&self) -> Money {
        self.savings_goal_year
    }

    /// Monthly savings target, as last entered or derived
    pub fn savings_goal_month(&self) -> Money {
        self.savings_goal_month
    }

    /// Set the annual goal; the monthly goal follows as `year / 12`
    pub fn set_savings_goal_year(&mut self, year: Money) {
        let year = coerce_money(year);
        self.savings_goal_year = year;
        self.savings_goal_month = year.scale(1, 12);
    }

    /// Set the monthly goal; the annual goal follows as `month * 12`
    pub fn set_savings_goal_month(&mut self, month: Money) {
        let month = coerce_money(month);
        self.savings_goal_month = month;
        self.savings_goal_year = month * 12;
    }

    /// Restore both goal figures verbatim, as persisted
    pub(crate) fn restore_savings_goal(&mut self, year: Money, month: Option<Money>) {
        self.set_savings_goal_year(year);
        if let Some(month) = month {
            let month = coerce_money(month);
            // Only trust the stored month if it still agrees with the year
            if (month * 12 - self.savings_goal_year).abs().cents() < 12 {
                self.savings_goal_month = month;
            }
        }
    }

    /// The highest raw ID used by any collection
    pub fn highest_id(&self) -> Option<u64> {
        let expenses = self.expenses.iter().map(|e| e.id.raw());
        let subscriptions = self.subscriptions.iter().map(|s| s.id.raw());
        let incomes = self.additional_incomes.iter().map(|i| i.id.raw());
        let samples = self.variable_income_samples.iter().map(|s| s.id.raw());
        expenses.chain(subscriptions).chain(incomes).chain(samples).max()
    }

    /// True when nothing has been entered yet
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, IncomeId, SampleId};
    use crate::models::{Frequency, LineItem};

    #[test]
    fn test_default_is_empty() {
        let inputs = BudgetInputs::default();
        assert_eq!(inputs.income_mode, IncomeMode::Fixed);
        assert!(inputs.biweekly_paycheck.is_zero());
        assert!(inputs.is_empty());
        assert_eq!(inputs.highest_id(), None);
    }

    #[test]
    fn test_yearly_goal_drives_monthly() {
        let mut inputs = BudgetInputs::default();
        inputs.set_savings_goal_year(Money::from_dollars(12000));
        assert_eq!(inputs.savings_goal_month(), Money::from_dollars(1000));
    }

    #[test]
    fn test_monthly_goal_drives_yearly() {
        let mut inputs = BudgetInputs::default();
        inputs.set_savings_goal_month(Money::from_cents(41667));
        assert_eq!(inputs.savings_goal_year(), Money::from_cents(500004));
        assert_eq!(inputs.savings_goal_month() * 12, inputs.savings_goal_year());
    }

    #[test]
    fn test_goal_consistency_within_rounding() {
        let mut inputs = BudgetInputs::default();
        inputs.set_savings_goal_year(Money::from_cents(1_000_001));
        let drift = (inputs.savings_goal_month() * 12 - inputs.savings_goal_year()).abs();
        assert!(drift.cents() <= 6);
    }

    #[test]
    fn test_negative_goal_is_clamped() {
        let mut inputs = BudgetInputs::default();
        inputs.set_savings_goal_year(Money::from_dollars(-50));
        assert!(inputs.savings_goal_year().is_zero());
        assert!(inputs.savings_goal_month().is_zero());
    }

    #[test]
    fn test_restore_ignores_inconsistent_month() {
        let mut inputs = BudgetInputs::default();
        inputs.restore_savings_goal(Money::from_dollars(1200), Some(Money::from_dollars(5)));
        assert_eq!(inputs.savings_goal_month(), Money::from_dollars(100));

        inputs.restore_savings_goal(Money::from_cents(500004), Some(Money::from_cents(41667)));
        assert_eq!(inputs.savings_goal_month(), Money::from_cents(41667));
    }

    #[test]
    fn test_highest_id_spans_collections() {
        let mut inputs = BudgetInputs::default();
        inputs
            .expenses
            .push(LineItem::new(ExpenseId::from_raw(4), "Rent", Money::zero()));
        inputs.additional_incomes.push(AdditionalIncome::new(
            IncomeId::from_raw(90),
            "Side gig",
            Money::zero(),
            Frequency::Weekly,
        ));
        inputs
            .variable_income_samples
            .push(VariableIncomeSample::new(SampleId::from_raw(12), "2024-01", Money::zero()));
        assert_eq!(inputs.highest_id(), Some(90));
    }
}
