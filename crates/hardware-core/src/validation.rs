//! Validation utilities.

use crate::{FieldError, HardwareError, HardwareResult};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `HardwareError` on failure.
    fn validate_request(&self) -> Result<(), HardwareError> {
        self.validate().map_err(validation_errors_to_hardware_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `HardwareError`.
#[must_use]
pub fn validation_errors_to_hardware_error(errors: ValidationErrors) -> HardwareError {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    HardwareError::InvalidFields {
        message,
        fields: field_errors,
    }
}

/// Unwraps a required request field, reporting it by name when absent.
///
/// Call in the order the fields are declared so the first missing one wins.
pub fn require<T>(field: &'static str, value: Option<T>) -> HardwareResult<T> {
    value.ok_or(HardwareError::MissingField(field))
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank").with_message("must not be blank".into()));
        }
        Ok(())
    }

    /// Validates that a monetary amount is finite and not negative.
    pub fn non_negative_amount(value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(
                ValidationError::new("non_negative_amount").with_message("must be a finite amount >= 0".into()),
            );
        }
        Ok(())
    }

    /// Validates that a role names a known user role.
    pub fn known_role(value: &str) -> Result<(), ValidationError> {
        value
            .parse::<crate::domain::UserRole>()
            .map(|_| ())
            .map_err(|_| ValidationError::new("unknown_role").with_message("must be Admin or Regular".into()))
    }
}
