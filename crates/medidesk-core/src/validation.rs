//! Validation utilities.
//!
//! The querier itself never validates its parameters; callers that want
//! early rejection call [`ValidateExt::validate_request`] before the query.

use crate::MedideskError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `MedideskError` on failure.
    fn validate_request(&self) -> Result<(), MedideskError> {
        self.validate().map_err(validation_errors_to_medidesk_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `MedideskError::Validation`.
///
/// Field messages are sorted by field name so the message is stable.
#[must_use]
pub fn validation_errors_to_medidesk_error(errors: ValidationErrors) -> MedideskError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let detail = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                format!("{field}: {detail}")
            })
        })
        .collect();
    messages.sort();

    MedideskError::Validation(messages.join("; "))
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates a login handle: ASCII letters, digits and underscores.
    pub fn username(value: &str) -> Result<(), ValidationError> {
        if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::new("invalid_username"));
        }
        Ok(())
    }
}
