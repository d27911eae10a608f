//! Request input validation.
//!
//! Enum-valued inputs arrive as strings and are checked against the database enum values so
//! that a bad value is reported as a [`ValidationError`] rather than an extractor rejection.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{BatchStatus, Role, Shift};
use sea_orm::ActiveEnum;

use crate::server::error::validation::ValidationError;

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Parse an optional shift, treating an empty string as absent.
pub fn parse_shift(raw: Option<&str>) -> Result<Option<Shift>, ValidationError> {
    match raw.map(normalize).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => Shift::try_from_value(&value)
            .map(Some)
            .map_err(|_| ValidationError::InvalidShift(value)),
    }
}

/// Parse a shift which must be present.
pub fn require_shift(raw: Option<&str>) -> Result<Shift, ValidationError> {
    parse_shift(raw)?.ok_or(ValidationError::MissingField("shift"))
}

pub fn parse_status(raw: Option<&str>) -> Result<Option<BatchStatus>, ValidationError> {
    match raw.map(normalize).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => BatchStatus::try_from_value(&value)
            .map(Some)
            .map_err(|_| ValidationError::InvalidStatus(value)),
    }
}

pub fn parse_role(raw: Option<&str>) -> Result<Option<Role>, ValidationError> {
    match raw.map(normalize).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => Role::try_from_value(&value)
            .map(Some)
            .map_err(|_| ValidationError::InvalidRole(value)),
    }
}

/// Parse an optional `YYYY-MM-DD` date.
pub fn parse_date(raw: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ValidationError::InvalidDate(value.to_string())),
    }
}

/// Require a value to be present.
pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

/// Require a non-blank string, returned trimmed.
pub fn require_text(value: Option<&str>, field: &'static str) -> Result<String, ValidationError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(ValidationError::MissingField(field))
}

/// Reject negative quantities and amounts.
pub fn non_negative<T>(value: T, field: &'static str) -> Result<T, ValidationError>
where
    T: PartialOrd + Default + std::fmt::Display + Copy,
{
    if value < T::default() {
        return Err(ValidationError::InvalidField {
            field,
            reason: format!("must not be negative, got {}", value),
        });
    }

    Ok(value)
}
