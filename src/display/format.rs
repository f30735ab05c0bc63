//! Formatting helpers shared by the table views

use crate::models::Money;

/// Format an amount with the configured currency symbol
pub fn format_money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}

/// Format an amount, in red when negative
pub fn format_money_colored(amount: Money, symbol: &str) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", format_money(amount, symbol))
    } else {
        format_money(amount, symbol)
    }
}

/// Format a fractional rate as a percentage ("9%")
pub fn format_rate(rate: f64) -> String {
    let pct = rate * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{:.0}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
