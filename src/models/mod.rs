//! Core data models for Spendwise
//!
//! The budget inputs users edit, the figures derived from them, and the
//! growth projection rows.

pub mod ids;
pub mod income;
pub mod inputs;
pub mod line_item;
pub mod money;
pub mod projection;
pub mod summary;

pub use ids::{ExpenseId, IdSequence, IncomeId, SampleId, SubscriptionId};
pub use income::{
    average_monthly_income, AdditionalIncome, Frequency, IncomeField, IncomeMode, SampleField,
    VariableIncomeSample,
};
pub use inputs::BudgetInputs;
pub use line_item::{Expense, LineItem, LineItemField, Subscription};
pub use money::{coerce_amount, coerce_money, Money};
pub use projection::{
    GrowthProjection, ReturnRateProfile, YearProjection, DEFAULT_HORIZON_YEARS, MAX_HORIZON_YEARS,
    MILESTONE_YEARS,
};
pub use summary::{BudgetInsights, BudgetSummary, BudgetWarning, SpendingTargets};
