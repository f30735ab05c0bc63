//! Growth projection display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_money, format_rate};
use crate::models::{GrowthProjection, YearProjection};

#[derive(Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Contributed")]
    total_contributed: String,
    #[tabled(rename = "Earnings")]
    earnings: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Profile")]
    profile: String,
    #[tabled(rename = "Return")]
    rate: String,
    #[tabled(rename = "Contributed")]
    total_contributed: String,
    #[tabled(rename = "Earnings")]
    earnings: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

fn year_row(row: &YearProjection, symbol: &str) -> YearRow {
    YearRow {
        year: row.year,
        total_contributed: format_money(row.total_contributed, symbol),
        earnings: format_money(row.earnings, symbol),
        balance: format_money(row.balance, symbol),
    }
}

/// Headline for a projection: profile, rate and final-year figures
pub fn format_projection_header(projection: &GrowthProjection, symbol: &str) -> String {
    let mut output = format!(
        "Investing {} per year, {} ({})",
        format_money(projection.annual_contribution, symbol),
        projection.profile.label(),
        projection.profile.description(),
    );

    if let Some(last) = projection.final_year() {
        output.push_str(&format!(
            "\nAfter {} years: contributed {}, earned {}, balance {}",
            last.year,
            format_money(last.total_contributed, symbol),
            format_money(last.earnings, symbol),
            format_money(last.balance, symbol),
        ));
    }
    output
}

/// Year-by-year table
pub fn format_projection_table(projection: &GrowthProjection, symbol: &str) -> String {
    if projection.is_empty() {
        return "Nothing to project.".to_string();
    }

    let rows: Vec<YearRow> = projection.years.iter().map(|row| year_row(row, symbol)).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Only the requested milestone years
pub fn format_milestones(projection: &GrowthProjection, years: &[u32], symbol: &str) -> String {
    let rows: Vec<YearRow> = projection
        .milestones(years)
        .iter()
        .map(|row| year_row(row, symbol))
        .collect();
    if rows.is_empty() {
        return "Nothing to project.".to_string();
    }
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Final-year figures for each profile side by side
pub fn format_profile_comparison(projections: &[GrowthProjection], symbol: &str) -> String {
    let rows: Vec<ProfileRow> = projections
        .iter()
        .filter_map(|p| {
            p.final_year().map(|last| ProfileRow {
                profile: p.profile.label().to_string(),
                rate: format_rate(p.profile.annual_return()),
                total_contributed: format_money(last.total_contributed, symbol),
                earnings: format_money(last.earnings, symbol),
                balance: format_money(last.balance, symbol),
            })
        })
        .collect();

    if rows.is_empty() {
        return "Nothing to project.".to_string();
    }
    Table::new(rows).with(Style::rounded()).to_string()
}
