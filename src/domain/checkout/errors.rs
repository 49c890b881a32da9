//! Checkout-specific error types.
//!
//! The taxonomy keeps distinct kinds for failures that today surface to the
//! user with the same "please try again" message. In particular,
//! `VerificationUnavailable` (we could not ask) is never conflated with
//! `VerificationDenied` (verification said no); both deny entitlement.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | MissingCredential | 500 |
//! | SubscriberRequired | 400 |
//! | InvalidAmount | 400 |
//! | BackendUnavailable | 502 |
//! | VerificationUnavailable | 502 |
//! | VerificationDenied | 402 |
//! | ConfirmationReplayed | 409 |
//! | OrderMismatch | 409 |
//! | AttemptNotFound | 404 |
//! | InvalidState | 409 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{OrderId, ValidationError};

/// Errors for the payment-order verification workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Provider credential is not configured. Fail fast, no network call.
    MissingCredential,

    /// No resolved subscriber identity; the workflow cannot start.
    SubscriberRequired,

    /// Amount is not a positive number of minor units.
    InvalidAmount { actual: i64 },

    /// Order creation call failed or timed out. Not retried automatically.
    BackendUnavailable { reason: String },

    /// The verification call itself failed; we could not ask. Surfaced as
    /// "please retry", distinct from an explicit denial.
    VerificationUnavailable { reason: String },

    /// Verification explicitly said no. No entitlement change.
    VerificationDenied { reason: String },

    /// A confirmation for this order was already accepted once.
    ConfirmationReplayed(OrderId),

    /// Confirmation does not belong to the attempt's order.
    OrderMismatch { expected: OrderId, got: OrderId },

    /// No checkout attempt is known for this order.
    AttemptNotFound(OrderId),

    /// Invalid state for the requested transition.
    InvalidState { current: String, attempted: String },

    /// Infrastructure error (stores, channels).
    Infrastructure(String),
}

impl CheckoutError {
    pub fn backend_unavailable(reason: impl Into<String>) -> Self {
        CheckoutError::BackendUnavailable {
            reason: reason.into(),
        }
    }

    pub fn verification_unavailable(reason: impl Into<String>) -> Self {
        CheckoutError::VerificationUnavailable {
            reason: reason.into(),
        }
    }

    pub fn verification_denied(reason: impl Into<String>) -> Self {
        CheckoutError::VerificationDenied {
            reason: reason.into(),
        }
    }

    pub fn invalid_state(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        CheckoutError::InvalidState {
            current: current.into(),
            attempted: attempted.into(),
        }
    }

    pub fn infrastructure(reason: impl Into<String>) -> Self {
        CheckoutError::Infrastructure(reason.into())
    }

    /// True when a fresh manual attempt may succeed (the uniform
    /// user-facing "please try again" cases).
    pub fn is_retryable_by_user(&self) -> bool {
        matches!(
            self,
            CheckoutError::BackendUnavailable { .. }
                | CheckoutError::VerificationUnavailable { .. }
                | CheckoutError::VerificationDenied { .. }
        )
    }
}

impl std::fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckoutError::MissingCredential => {
                write!(f, "Payment provider credential is not configured")
            }
            CheckoutError::SubscriberRequired => {
                write!(f, "No subscriber identity resolved for this checkout")
            }
            CheckoutError::InvalidAmount { actual } => {
                write!(f, "Checkout amount must be positive, got {}", actual)
            }
            CheckoutError::BackendUnavailable { reason } => {
                write!(f, "Order creation failed: {}", reason)
            }
            CheckoutError::VerificationUnavailable { reason } => {
                write!(f, "Payment verification could not be reached: {}", reason)
            }
            CheckoutError::VerificationDenied { reason } => {
                write!(f, "Payment verification denied: {}", reason)
            }
            CheckoutError::ConfirmationReplayed(order_id) => {
                write!(f, "Confirmation for order {} was already used", order_id)
            }
            CheckoutError::OrderMismatch { expected, got } => {
                write!(
                    f,
                    "Confirmation is for order {} but attempt owns order {}",
                    got, expected
                )
            }
            CheckoutError::AttemptNotFound(order_id) => {
                write!(f, "No checkout attempt found for order {}", order_id)
            }
            CheckoutError::InvalidState { current, attempted } => {
                write!(
                    f,
                    "Cannot {} while checkout attempt is {}",
                    attempted, current
                )
            }
            CheckoutError::Infrastructure(reason) => {
                write!(f, "Infrastructure error: {}", reason)
            }
        }
    }
}

impl std::error::Error for CheckoutError {}

impl From<ValidationError> for CheckoutError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyField { .. } => CheckoutError::SubscriberRequired,
            ValidationError::NotPositive { actual, .. } => CheckoutError::InvalidAmount { actual },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denial_and_unavailable_are_distinct_kinds() {
        let denied = CheckoutError::verification_denied("signature mismatch");
        let unavailable = CheckoutError::verification_unavailable("timeout");
        assert_ne!(denied, unavailable);
        assert!(denied.is_retryable_by_user());
        assert!(unavailable.is_retryable_by_user());
    }

    #[test]
    fn missing_credential_is_not_user_retryable() {
        assert!(!CheckoutError::MissingCredential.is_retryable_by_user());
    }

    #[test]
    fn invalid_state_displays_both_sides() {
        let err = CheckoutError::invalid_state("granted", "verify confirmation");
        assert_eq!(
            err.to_string(),
            "Cannot verify confirmation while checkout attempt is granted"
        );
    }

    #[test]
    fn validation_errors_map_to_workflow_preconditions() {
        let empty = ValidationError::empty_field("subscriber_id");
        assert_eq!(CheckoutError::from(empty), CheckoutError::SubscriberRequired);

        let negative = ValidationError::not_positive("amount", -1);
        assert_eq!(
            CheckoutError::from(negative),
            CheckoutError::InvalidAmount { actual: -1 }
        );
    }
}
