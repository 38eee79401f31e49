use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

use super::draft::{BookingDraft, Field, FieldKind};

/// Validation errors for booking form input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown booking field: {0}")]
    UnknownField(String),
    #[error("{0} is required")]
    Required(&'static str),
    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid hardcoded regex"));

/// Validates a calendar date in `YYYY-MM-DD` form (e.g. `2026-03-01`).
pub fn validate_date(date: &str) -> Result<(), ValidationError> {
    if DATE_RE.is_match(date) && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        Err(ValidationError::InvalidDate(date.to_string()))
    }
}

/// Validates a numeric amount. Sign and precision are not checked.
pub fn validate_amount(amount: &str) -> Result<(), ValidationError> {
    match amount.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && amount.trim() == amount => Ok(()),
        _ => Err(ValidationError::InvalidAmount(amount.to_string())),
    }
}

/// Checks every field of `draft`, returning one error per failing field in form order.
///
/// Empty fields report [`ValidationError::Required`]; date and amount
/// fields are format-checked only when non-empty. Check-out is not compared
/// against check-in.
pub fn validate_draft(draft: &BookingDraft) -> Vec<(Field, ValidationError)> {
    let missing = draft.missing_required();
    Field::all()
        .iter()
        .filter_map(|&field| {
            let value = draft.get(field);
            let result = if missing.contains(&field) {
                Err(ValidationError::Required(field.label()))
            } else {
                match field.kind() {
                    FieldKind::Date => validate_date(value),
                    FieldKind::Amount => validate_amount(value),
                    FieldKind::Text | FieldKind::Select => Ok(()),
                }
            };
            result.err().map(|e| (field, e))
        })
        .collect()
}
