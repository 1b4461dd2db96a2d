//! Input validation for raw field text
//!
//! Converts what the user typed into typed values before anything reaches the
//! ledger. Balance sufficiency is a ledger rule and is not checked here.

use crate::error::ValidationError;
use crate::models::{Locale, Money, Month};

/// Require a non-blank field, returning it trimmed
pub fn require_field<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value)
    }
}

/// Parse a monthly salary: a positive decimal amount whose yearly sum fits
pub fn parse_salary(text: &str) -> Result<Money, ValidationError> {
    Money::parse(text)
        .ok()
        .filter(|salary| salary.is_positive() && salary.checked_mul(12).is_some())
        .ok_or(ValidationError::InvalidSalary)
}

/// Parse an expense amount: a positive decimal amount
pub fn parse_amount(text: &str) -> Result<Money, ValidationError> {
    Money::parse(text)
        .ok()
        .filter(Money::is_positive)
        .ok_or(ValidationError::InvalidAmount)
}

/// Parse a year made only of ASCII digits
pub fn parse_year(text: &str) -> Result<u32, ValidationError> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidYear);
    }
    text.parse().map_err(|_| ValidationError::InvalidYear)
}

/// Resolve a full, case-sensitive month name from the locale's table
pub fn parse_month(text: &str, locale: Locale) -> Result<Month, ValidationError> {
    locale
        .month_from_name(text)
        .ok_or(ValidationError::InvalidMonth)
}
