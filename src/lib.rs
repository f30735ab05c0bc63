//! Spendwise - personal budgeting calculator
//!
//! Turns a handful of inputs (paycheck or sampled monthly income, extra
//! income streams, expenses, subscriptions and a savings goal) into
//! spending money per month, week and day, and projects how the savings
//! goal grows at a few fixed rates of return.
//!
//! # Architecture
//!
//! - `models`: inputs, derived figures and projections (no I/O)
//! - `services`: the budget engine and the growth projector, both pure
//! - `storage`: key-value backends and the input store built on them
//! - `config`: path resolution and user settings
//! - `display`: terminal tables
//! - `export`: JSON, YAML and CSV export
//! - `cli`: clap commands for the `spendwise` binary
//! - `error`: custom error types
//!
//! # Example
//!
//! ```
//! use spendwise::services::BudgetEngine;
//! use spendwise::storage::{BudgetInputStore, MemoryKeyValueStore};
//! use spendwise::models::Money;
//!
//! let mut store = BudgetInputStore::open(MemoryKeyValueStore::new());
//! store.set_income("2500");
//! store.add_expense("Rent", "1500");
//!
//! let summary = BudgetEngine::compute(store.inputs());
//! assert_eq!(summary.income_after_expenses, Money::from_dollars(3500));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{SpendwiseError, SpendwiseResult};
