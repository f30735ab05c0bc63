//! Service layer for Spendwise
//!
//! Pure computations over the budget models: the budget engine that derives
//! discretionary spending, and the growth projector for savings.

pub mod budget;
pub mod growth;

pub use budget::BudgetEngine;
pub use growth::GrowthProjector;
