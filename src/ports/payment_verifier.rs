//! Payment verifier port - sole authority on confirmation validity.
//!
//! The outcome type keeps "verification said no" apart from "we could not
//! ask": an `Invalid` outcome is an explicit denial, while a `VerifierError`
//! means validity is unknown. Both deny entitlement (fail closed), but they
//! must never be conflated.

use async_trait::async_trait;

use crate::domain::checkout::{PaymentConfirmation, PaymentOrder};

/// Port for authoritative payment verification.
#[async_trait]
pub trait PaymentVerifier: Send + Sync {
    /// Verify a confirmation against the order it claims to settle.
    ///
    /// `Ok(Invalid { .. })` is a definitive negative answer; `Err(_)` means
    /// the question could not be answered.
    async fn verify(
        &self,
        order: &PaymentOrder,
        confirmation: &PaymentConfirmation,
    ) -> Result<VerificationOutcome, VerifierError>;
}

/// Definitive answer from the verifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Signature is genuine and tied to a completed payment.
    Valid,

    /// Verification explicitly failed.
    Invalid { reason: String },
}

impl VerificationOutcome {
    pub fn invalid(reason: impl Into<String>) -> Self {
        VerificationOutcome::Invalid {
            reason: reason.into(),
        }
    }
}

/// The verification call itself failed; validity is unknown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifierError {
    #[error("Verification call failed: {0}")]
    CallFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_verifier_is_object_safe() {
        fn _accepts_dyn(_verifier: &dyn PaymentVerifier) {}
    }

    #[test]
    fn invalid_outcome_is_not_an_error() {
        let outcome = VerificationOutcome::invalid("signature mismatch");
        assert!(matches!(outcome, VerificationOutcome::Invalid { .. }));
    }
}
