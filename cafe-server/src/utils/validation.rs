//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the
//! cafe/employee CRUD handlers. Limits match what the admin UI enforces
//! client-side; the store itself has no built-in length enforcement.

use validator::ValidateEmail;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: cafe, employee
pub const MAX_NAME_LEN: usize = 100;

/// Cafe descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Cafe locations
pub const MAX_LOCATION_LEN: usize = 200;

/// Phone numbers: exactly 8 digits, leading 8 or 9
pub const PHONE_LEN: usize = 8;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate email syntax (RFC-style check via the validator crate).
pub fn validate_email(value: &str, field: &str) -> Result<(), AppError> {
    if !value.validate_email() {
        return Err(AppError::validation(format!(
            "{field} is not a valid email address"
        )));
    }
    Ok(())
}

/// Validate a local phone number: 8 digits, first digit 8 or 9.
pub fn validate_phone(value: &str, field: &str) -> Result<(), AppError> {
    let valid = value.len() == PHONE_LEN
        && value.starts_with(['8', '9'])
        && value.bytes().all(|b| b.is_ascii_digit());
    if !valid {
        return Err(AppError::validation(format!(
            "{field} must start with 8 or 9 and contain 8 digits"
        )));
    }
    Ok(())
}
