//! Length rules shared by every form variant

use super::field::{Field, FieldErrors, FieldValues};
use thiserror::Error;

/// Minimum trimmed length for every field
pub const MIN_LENGTH: usize = 5;

/// A field that failed its rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be at least {min} characters long")]
    TooShort { field: Field, min: usize },
}

/// One entry of the explicit rule set: field, minimum length, message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub min_len: usize,
    pub message: String,
}

impl FieldRule {
    pub fn min_length(field: Field, min_len: usize) -> Self {
        Self {
            field,
            min_len,
            message: ValidationError::TooShort {
                field,
                min: min_len,
            }
            .to_string(),
        }
    }

    /// Returns the rule message when `value` is too short
    pub fn check(&self, value: &str) -> Option<&str> {
        if trimmed_len(value) < self.min_len {
            Some(&self.message)
        } else {
            None
        }
    }
}

/// Rules for every field at the given minimum length
pub fn rule_set(min_len: usize) -> Vec<FieldRule> {
    Field::ALL
        .into_iter()
        .map(|f| FieldRule::min_length(f, min_len))
        .collect()
}

fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Check a single value against the shared rule
pub fn validate_value(field: Field, value: &str, min_len: usize) -> Result<(), ValidationError> {
    if trimmed_len(value) < min_len {
        Err(ValidationError::TooShort {
            field,
            min: min_len,
        })
    } else {
        Ok(())
    }
}

/// Validate all fields. Every field appears in the result, valid ones with an
/// empty message.
pub fn validate(values: &FieldValues, min_len: usize) -> FieldErrors {
    let mut errors = FieldErrors::cleared();
    for field in Field::ALL {
        if let Err(err) = validate_value(field, values.get(field), min_len) {
            errors.set(field, err.to_string());
        }
    }
    errors
}
