//! Razorpay payment verifier.

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::checkout::{PaymentConfirmation, PaymentOrder, SignatureVerifier};
use crate::ports::{PaymentVerifier, VerificationOutcome, VerifierError};

/// `PaymentVerifier` that checks the confirmation signature locally.
///
/// The provider signs `"{order_id}|{payment_id}"` with the key secret; the
/// secret is server-side material, so this adapter is the sole authority on
/// signature validity. A malformed or mismatched signature is a definitive
/// `Invalid` outcome, never a `CallFailed` error.
pub struct RazorpayVerifier {
    signatures: SignatureVerifier,
}

impl RazorpayVerifier {
    /// Create a verifier from the provider key secret.
    pub fn new(key_secret: SecretString) -> Self {
        Self {
            signatures: SignatureVerifier::new(key_secret),
        }
    }
}

#[async_trait]
impl PaymentVerifier for RazorpayVerifier {
    async fn verify(
        &self,
        order: &PaymentOrder,
        confirmation: &PaymentConfirmation,
    ) -> Result<VerificationOutcome, VerifierError> {
        if confirmation.order_id != order.id {
            return Ok(VerificationOutcome::invalid(
                "confirmation names a different order",
            ));
        }

        if self.signatures.is_valid(confirmation) {
            Ok(VerificationOutcome::Valid)
        } else {
            Ok(VerificationOutcome::invalid("signature mismatch"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checkout::compute_test_signature;
    use crate::domain::foundation::{Amount, OrderId, PaymentId, SubscriberId, Timestamp};

    const TEST_SECRET: &str = "test_key_secret_12345";

    fn order() -> PaymentOrder {
        PaymentOrder {
            id: OrderId::new("order_abc").unwrap(),
            subscriber_id: SubscriberId::new("college-1").unwrap(),
            amount: Amount::from_minor_units(99900).unwrap(),
            currency: "INR".to_string(),
            created_at: Timestamp::now(),
        }
    }

    fn verifier() -> RazorpayVerifier {
        RazorpayVerifier::new(SecretString::new(TEST_SECRET.to_string()))
    }

    #[tokio::test]
    async fn genuine_signature_is_valid() {
        let confirmation = PaymentConfirmation {
            order_id: OrderId::new("order_abc").unwrap(),
            payment_id: PaymentId::new("pay_def").unwrap(),
            signature: compute_test_signature(TEST_SECRET, "order_abc", "pay_def"),
        };

        let outcome = verifier().verify(&order(), &confirmation).await.unwrap();
        assert_eq!(outcome, VerificationOutcome::Valid);
    }

    #[tokio::test]
    async fn forged_signature_is_invalid_not_an_error() {
        let confirmation = PaymentConfirmation {
            order_id: OrderId::new("order_abc").unwrap(),
            payment_id: PaymentId::new("pay_def").unwrap(),
            signature: "00".repeat(32),
        };

        let outcome = verifier().verify(&order(), &confirmation).await.unwrap();
        assert!(matches!(outcome, VerificationOutcome::Invalid { .. }));
    }

    #[tokio::test]
    async fn confirmation_for_other_order_is_invalid() {
        let confirmation = PaymentConfirmation {
            order_id: OrderId::new("order_other").unwrap(),
            payment_id: PaymentId::new("pay_def").unwrap(),
            signature: compute_test_signature(TEST_SECRET, "order_other", "pay_def"),
        };

        let outcome = verifier().verify(&order(), &confirmation).await.unwrap();
        assert!(matches!(outcome, VerificationOutcome::Invalid { .. }));
    }
}
