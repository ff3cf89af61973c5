//! Input validation for entry operations.

use crate::error::{InputError, Result};

/// Validate a required text field.
///
/// # Errors
///
/// Returns `InputError::EmptyField` if `value` is empty. Whitespace is a
/// value like any other.
pub fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(InputError::EmptyField { field }.into());
    }
    Ok(())
}

/// Validate the key fields and password of a new entry.
pub fn validate_entry(service: &str, username: &str, password: &str) -> Result<()> {
    require("service", service)?;
    require("username", username)?;
    require("password", password)
}
