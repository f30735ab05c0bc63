//! Terminal display formatting
//!
//! Turns models into tables for the CLI. No business logic here.

pub mod budget;
pub mod format;
pub mod projection;

pub use budget::{
    format_additional_incomes, format_income_source, format_insights, format_line_items,
    format_samples, format_summary,
};
pub use format::{format_money, format_money_colored, format_rate};
pub use projection::{
    format_milestones, format_profile_comparison, format_projection_header,
    format_projection_table,
};
