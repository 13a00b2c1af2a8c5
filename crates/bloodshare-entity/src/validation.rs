//! Field rules shared by the `Validate` derives, and conversion of
//! validation failures into [`AppError`].

use std::borrow::Cow;

use chrono::NaiveDate;
use validator::{ValidationError, ValidationErrors};

use bloodshare_core::AppError;

/// Reject empty or whitespace-only text.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be empty")));
    }
    Ok(())
}

/// Require exactly ten digits, ignoring spaces and dashes.
pub fn ten_digit_phone(value: &str) -> Result<(), ValidationError> {
    let stripped: String = value.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    if stripped.len() == 10 && stripped.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("phone")
            .with_message(Cow::Borrowed("must be a 10-digit phone number")))
    }
}

/// Require a `YYYY-MM-DD` calendar date.
pub fn iso_date(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| ValidationError::new("date").with_message(Cow::Borrowed("must be YYYY-MM-DD")))
}

/// Flatten field errors into one validation [`AppError`], sorted by field.
pub fn into_app_error(errors: ValidationErrors) -> AppError {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {message}")
            })
        })
        .collect();
    parts.sort();
    AppError::validation(parts.join("; "))
}
