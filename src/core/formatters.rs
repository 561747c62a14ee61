use crate::utils::validation::{digits_only, parse_number};

pub const PHONE_DIGITS: usize = 10;

/// Field names whose number inputs are rewritten to two decimals on blur.
pub const CURRENCY_FIELDS: [&str; 2] = ["amount", "monthly_rent"];

/// Keeps the first ten digits of whatever was typed.
pub fn format_phone(raw: &str) -> String {
    digits_only(raw).chars().take(PHONE_DIGITS).collect()
}

/// Two-decimal rendering of a non-negative number, or `None` when the value
/// should be left as the user typed it.
pub fn format_currency(raw: &str) -> Option<String> {
    let value = parse_number(raw).filter(|value| *value >= 0.0)?;
    // -0 passes the filter; render it unsigned.
    let value = if value == 0.0 { 0.0 } else { value };
    Some(format!("{:.2}", value))
}
