use crate::config::toml_config::GuardRules;
use crate::utils::error::{GuardError, Result, ValidationError};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static NON_DIGIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]").expect("non-digit pattern compiles"));

pub type RuleResult = std::result::Result<(), ValidationError>;

/// Everything a form validator may consult besides the field values.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    pub rules: &'a GuardRules,
    pub today: NaiveDate,
}

impl<'a> ValidationContext<'a> {
    pub fn new(rules: &'a GuardRules, today: NaiveDate) -> Self {
        Self { rules, today }
    }
}

pub trait Validate {
    fn validate(&self, ctx: &ValidationContext<'_>) -> RuleResult;
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fails on the first blank `(name, value)` pair, in order.
pub fn require_all<F>(fields: &[(&str, &str)], missing: F) -> RuleResult
where
    F: Fn(String) -> ValidationError,
{
    match fields.iter().find(|(_, value)| is_blank(value)) {
        Some((name, _)) => Err(missing(name.to_string())),
        None => Ok(()),
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

pub fn digits_only(value: &str) -> String {
    NON_DIGIT_RE.replace_all(value, "").into_owned()
}

pub fn is_valid_phone(value: &str) -> bool {
    digits_only(value.trim()).chars().count() == 10
}

/// Parses the whole trimmed value as a finite decimal number.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

pub fn is_positive_number(value: &str) -> bool {
    parse_number(value).is_some_and(|number| number > 0.0)
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(GuardError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("Value must be at least {}, got {}", min_value, value),
        });
    }
    Ok(())
}

pub fn validate_ordered_bounds(field_name: &str, min: usize, max: usize) -> Result<()> {
    if min > max {
        return Err(GuardError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("Minimum {} is greater than maximum {}", min, max),
        });
    }
    Ok(())
}
