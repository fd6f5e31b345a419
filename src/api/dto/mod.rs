//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for JSON deserialization and validator for field
//! rules. Relation fields keep their wire names (`addressID`, `servicesID`, ...).
//! Response DTOs carry the persisted record plus the ids of related records.

pub mod address;
pub mod attraction;
pub mod health;
pub mod service;
pub mod ticket_info;

use crate::error::AppError;
use regex::Regex;
use std::sync::LazyLock;

/// Matches any string with at least one non-whitespace character.
pub(crate) static NOT_BLANK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S").unwrap());

/// Unwraps a field that validation already guarantees is present.
pub(crate) fn require<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{field}: must not be null")))
}

/// Extracts the record id an update request must carry.
pub(crate) fn id_for_update(id: Option<i64>) -> Result<i64, AppError> {
    id.ok_or_else(|| AppError::bad_request("Field 'id' is required for update"))
}
