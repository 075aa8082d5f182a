// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::{Error, Result};
use ward_core::Field;

// Input length limits
pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 100_000;
pub const MAX_ADDRESS_LENGTH: usize = 500;
pub const MAX_CATEGORY_LENGTH: usize = 50;
pub const MAX_NOTE_LENGTH: usize = 50_000;
pub const MAX_REASON_LENGTH: usize = 500;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_NOTIFICATION_TITLE_LENGTH: usize = 200;
pub const MAX_NOTIFICATION_BODY_LENGTH: usize = 5_000;

fn check_length(field: &'static str, value: &str, max: usize) -> Result<()> {
    let actual = value.chars().count();
    if actual > max {
        return Err(Error::FieldTooLong { field, actual, max });
    }
    Ok(())
}

/// Trim a required value, rejecting empty input and values over `max`.
pub fn required(field: &'static str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field });
    }
    check_length(field, trimmed, max)?;
    Ok(trimmed.to_string())
}

/// Trim an optional value; blank becomes `None`.
pub fn optional(field: &'static str, value: Option<&str>, max: usize) -> Result<Option<String>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => {
            check_length(field, v, max)?;
            Ok(Some(v.to_string()))
        }
        None => Ok(None),
    }
}

pub fn validate_title(title: &str) -> Result<String> {
    required("Title", title, MAX_TITLE_LENGTH)
}

pub fn validate_note(note: &str) -> Result<String> {
    required("Note", note, MAX_NOTE_LENGTH)
}

pub fn validate_reason(reason: Option<&str>) -> Result<Option<String>> {
    optional("Reason", reason, MAX_REASON_LENGTH)
}

/// Categories are stored lower-cased; blank falls back to the default.
pub fn validate_category(category: Option<&str>) -> Result<String> {
    Ok(optional("Category", category, MAX_CATEGORY_LENGTH)?
        .map(|c| c.to_lowercase())
        .unwrap_or_else(|| ward_core::issue::DEFAULT_CATEGORY.to_string()))
}

/// Validate a new value for an editable issue field.
///
/// Description may be cleared with an empty value; other fields are required.
pub fn validate_field(field: Field, value: &str) -> Result<String> {
    match field {
        Field::Title => validate_title(value),
        Field::Description => {
            Ok(optional("Description", Some(value), MAX_DESCRIPTION_LENGTH)?.unwrap_or_default())
        }
        Field::Category => {
            required("Category", value, MAX_CATEGORY_LENGTH).map(|c| c.to_lowercase())
        }
        Field::Address => required("Address", value, MAX_ADDRESS_LENGTH),
    }
}

/// Validate a department, template or rule name.
pub fn validate_name(field: &'static str, name: &str) -> Result<String> {
    required(field, name, MAX_NAME_LENGTH)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
