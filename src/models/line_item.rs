//! Recurring monthly obligations
//!
//! Expenses and subscriptions share one shape and are summed the same way;
//! they only differ in which collection (and ID type) they belong to.

use serde::{Deserialize, Serialize};

use super::ids::{ExpenseId, SubscriptionId};
use super::money::Money;

/// A named monthly amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem<I> {
    pub id: I,
    #[serde(default, alias = "category")]
    pub name: String,
    #[serde(default)]
    pub amount: Money,
}

impl<I> LineItem<I> {
    pub fn new(id: I, name: impl Into<String>, amount: Money) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
        }
    }
}

/// A recurring monthly expense (rent, groceries, ...)
pub type Expense = LineItem<ExpenseId>;

/// A recurring monthly subscription (streaming, gym, ...)
pub type Subscription = LineItem<SubscriptionId>;

/// Field edits accepted for an expense or subscription
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineItemField {
    Name(String),
    /// Raw user input, coerced before storing
    Amount(String),
}

/// Sum of amounts, independent of order
pub fn total<I>(items: &[LineItem<I>]) -> Money {
    items.iter().map(|item| item.amount).sum()
}
