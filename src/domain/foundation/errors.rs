//! Validation errors for value object construction.

use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: &'static str },

    #[error("Field '{field}' must be positive, got {actual}")]
    NotPositive { field: &'static str, actual: i64 },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: &'static str) -> Self {
        ValidationError::EmptyField { field }
    }

    /// Creates a not-positive validation error.
    pub fn not_positive(field: &'static str, actual: i64) -> Self {
        ValidationError::NotPositive { field, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_displays_correctly() {
        let err = ValidationError::empty_field("subscriber_id");
        assert_eq!(format!("{}", err), "Field 'subscriber_id' cannot be empty");
    }

    #[test]
    fn not_positive_displays_correctly() {
        let err = ValidationError::not_positive("amount", -5);
        assert_eq!(format!("{}", err), "Field 'amount' must be positive, got -5");
    }
}
