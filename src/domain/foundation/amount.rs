//! Monetary amount value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Monetary amount in the smallest currency unit (e.g. paise for INR).
///
/// Always positive; a zero or negative amount can never reach the payment
/// gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Creates an Amount from minor units, rejecting non-positive values.
    pub fn from_minor_units(minor: i64) -> Result<Self, ValidationError> {
        if minor <= 0 {
            return Err(ValidationError::not_positive("amount", minor));
        }
        Ok(Self(minor))
    }

    /// Returns the amount in minor units.
    pub fn minor_units(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
