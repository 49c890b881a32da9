//! CompleteCheckoutHandler - Command handler for confirmation verification.

use std::sync::Arc;

use crate::domain::checkout::{
    CheckoutAttempt, CheckoutError, DenyReason, EntitlementResult, NextAction, PaymentConfirmation,
};
use crate::domain::foundation::Timestamp;
use crate::ports::{
    AttemptRepository, ConfirmationStore, PaymentVerifier, SaveResult, VerificationOutcome,
};

/// Command carrying the signed confirmation from the checkout provider.
#[derive(Debug, Clone)]
pub struct CompleteCheckoutCommand {
    pub confirmation: PaymentConfirmation,
}

/// Settled outcome of a checkout attempt.
#[derive(Debug, Clone)]
pub struct CompleteCheckoutResult {
    pub attempt: CheckoutAttempt,
    pub entitlement: EntitlementResult,
    pub next_action: NextAction,
}

/// Handler for the verification role.
///
/// Fail-closed by construction: the only path to `Granted` is an explicit
/// `Valid` answer from the verifier. A failed verification call denies with
/// `VerificationUnavailable` rather than being conflated with an explicit
/// denial, and a replayed confirmation is rejected before the verifier is
/// asked at all.
pub struct CompleteCheckoutHandler {
    repository: Arc<dyn AttemptRepository>,
    confirmations: Arc<dyn ConfirmationStore>,
    verifier: Arc<dyn PaymentVerifier>,
    dashboard_redirect: String,
}

impl CompleteCheckoutHandler {
    pub fn new(
        repository: Arc<dyn AttemptRepository>,
        confirmations: Arc<dyn ConfirmationStore>,
        verifier: Arc<dyn PaymentVerifier>,
        dashboard_redirect: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            confirmations,
            verifier,
            dashboard_redirect: dashboard_redirect.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: CompleteCheckoutCommand,
    ) -> Result<CompleteCheckoutResult, CheckoutError> {
        let confirmation = cmd.confirmation;

        // 1. Load the attempt owning this order
        let mut attempt = self
            .repository
            .find_by_order_id(&confirmation.order_id)
            .await
            .map_err(|e| CheckoutError::infrastructure(e.to_string()))?
            .ok_or_else(|| CheckoutError::AttemptNotFound(confirmation.order_id.clone()))?;

        let order = attempt
            .order
            .clone()
            .ok_or_else(|| CheckoutError::AttemptNotFound(confirmation.order_id.clone()))?;

        // 2. The confirmation must name the attempt's own order
        if order.id != confirmation.order_id {
            return Err(CheckoutError::OrderMismatch {
                expected: order.id,
                got: confirmation.order_id,
            });
        }

        // 3. Replay protection, before the verifier is ever asked. A
        //    duplicate is rejected without re-verification.
        let save = self
            .confirmations
            .record(&confirmation, Timestamp::now())
            .await
            .map_err(|e| CheckoutError::infrastructure(e.to_string()))?;
        if save == SaveResult::Duplicate {
            tracing::warn!(
                order_id = %confirmation.order_id,
                payment_id = %confirmation.payment_id,
                "Replayed confirmation rejected"
            );
            return Err(CheckoutError::ConfirmationReplayed(confirmation.order_id));
        }

        // 4. Move the attempt to Verifying
        attempt.confirmation_received()?;
        self.repository
            .update(&attempt)
            .await
            .map_err(|e| CheckoutError::infrastructure(e.to_string()))?;

        // 5. Ask the sole authority, then settle fail-closed
        let entitlement = match self.verifier.verify(&order, &confirmation).await {
            Ok(VerificationOutcome::Valid) => EntitlementResult::Granted,
            Ok(VerificationOutcome::Invalid { reason }) => {
                tracing::warn!(
                    order_id = %order.id,
                    reason = %reason,
                    "Payment verification denied"
                );
                EntitlementResult::denied(DenyReason::SignatureInvalid)
            }
            Err(e) => {
                tracing::error!(
                    order_id = %order.id,
                    error = %e,
                    "Payment verification call failed"
                );
                EntitlementResult::denied(DenyReason::VerificationUnavailable)
            }
        };

        attempt.settle(entitlement.clone())?;
        self.repository
            .update(&attempt)
            .await
            .map_err(|e| CheckoutError::infrastructure(e.to_string()))?;

        // 6. One redirect per granted attempt, retry prompt otherwise
        let next_action = if entitlement.granted() {
            tracing::info!(
                order_id = %order.id,
                subscriber_id = %attempt.subscriber_id,
                "Premium entitlement granted"
            );
            NextAction::RedirectToDashboard {
                route: self.dashboard_redirect.clone(),
            }
        } else {
            NextAction::ShowRetry
        };

        Ok(CompleteCheckoutResult {
            attempt,
            entitlement,
            next_action,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAttemptRepository, InMemoryConfirmationStore};
    use crate::domain::checkout::{CheckoutState, PaymentOrder};
    use crate::domain::foundation::{Amount, OrderId, PaymentId, SubscriberId};
    use crate::ports::VerifierError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum MockAnswer {
        Valid,
        Invalid,
        CallFails,
    }

    struct MockVerifier {
        answer: MockAnswer,
        calls: AtomicUsize,
    }

    impl MockVerifier {
        fn answering(answer: MockAnswer) -> Self {
            Self {
                answer,
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PaymentVerifier for MockVerifier {
        async fn verify(
            &self,
            _order: &PaymentOrder,
            _confirmation: &PaymentConfirmation,
        ) -> Result<VerificationOutcome, VerifierError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.answer {
                MockAnswer::Valid => Ok(VerificationOutcome::Valid),
                MockAnswer::Invalid => Ok(VerificationOutcome::invalid("signature mismatch")),
                MockAnswer::CallFails => {
                    Err(VerifierError::CallFailed("backend timeout".to_string()))
                }
            }
        }
    }

    async fn awaiting_attempt(repo: &InMemoryAttemptRepository) -> PaymentOrder {
        let subscriber = SubscriberId::new("college-42").unwrap();
        let mut attempt = CheckoutAttempt::new(subscriber.clone());
        attempt.order_requested().unwrap();
        let order = PaymentOrder {
            id: OrderId::new("order_abc").unwrap(),
            subscriber_id: subscriber,
            amount: Amount::from_minor_units(99900).unwrap(),
            currency: "INR".to_string(),
            created_at: Timestamp::now(),
        };
        attempt.order_created(order.clone()).unwrap();
        repo.save(&attempt).await.unwrap();
        order
    }

    fn confirmation_for(order: &PaymentOrder) -> PaymentConfirmation {
        PaymentConfirmation {
            order_id: order.id.clone(),
            payment_id: PaymentId::new("pay_xyz").unwrap(),
            signature: "ab".repeat(32),
        }
    }

    fn handler(
        repo: Arc<InMemoryAttemptRepository>,
        verifier: Arc<MockVerifier>,
    ) -> CompleteCheckoutHandler {
        CompleteCheckoutHandler::new(
            repo,
            Arc::new(InMemoryConfirmationStore::new()),
            verifier,
            "/dashboard",
        )
    }

    #[tokio::test]
    async fn valid_verification_grants_and_redirects_once() {
        let repo = Arc::new(InMemoryAttemptRepository::new());
        let order = awaiting_attempt(&repo).await;
        let verifier = Arc::new(MockVerifier::answering(MockAnswer::Valid));
        let handler = handler(repo.clone(), verifier.clone());

        let result = handler
            .handle(CompleteCheckoutCommand {
                confirmation: confirmation_for(&order),
            })
            .await
            .unwrap();

        assert!(result.entitlement.granted());
        assert_eq!(result.attempt.state, CheckoutState::Granted);
        assert_eq!(
            result.next_action,
            NextAction::RedirectToDashboard {
                route: "/dashboard".to_string()
            }
        );
        assert_eq!(verifier.call_count(), 1);

        let stored = repo.find_by_order_id(&order.id).await.unwrap().unwrap();
        assert!(stored.has_entitlement());
    }

    #[tokio::test]
    async fn invalid_verification_denies_without_redirect() {
        let repo = Arc::new(InMemoryAttemptRepository::new());
        let order = awaiting_attempt(&repo).await;
        let verifier = Arc::new(MockVerifier::answering(MockAnswer::Invalid));
        let handler = handler(repo.clone(), verifier);

        let result = handler
            .handle(CompleteCheckoutCommand {
                confirmation: confirmation_for(&order),
            })
            .await
            .unwrap();

        assert!(!result.entitlement.granted());
        assert_eq!(
            result.entitlement,
            EntitlementResult::denied(DenyReason::SignatureInvalid)
        );
        assert_eq!(result.next_action, NextAction::ShowRetry);
    }

    #[tokio::test]
    async fn failed_verification_call_denies_as_unavailable() {
        let repo = Arc::new(InMemoryAttemptRepository::new());
        let order = awaiting_attempt(&repo).await;
        let verifier = Arc::new(MockVerifier::answering(MockAnswer::CallFails));
        let handler = handler(repo.clone(), verifier);

        let result = handler
            .handle(CompleteCheckoutCommand {
                confirmation: confirmation_for(&order),
            })
            .await
            .unwrap();

        // Fail closed, but with the "could not ask" reason kept distinct
        assert!(!result.entitlement.granted());
        assert_eq!(
            result.entitlement,
            EntitlementResult::denied(DenyReason::VerificationUnavailable)
        );
        assert_eq!(result.next_action, NextAction::ShowRetry);
    }

    #[tokio::test]
    async fn replayed_confirmation_is_rejected_without_reverification() {
        let repo = Arc::new(InMemoryAttemptRepository::new());
        let order = awaiting_attempt(&repo).await;
        let verifier = Arc::new(MockVerifier::answering(MockAnswer::Valid));
        let handler = handler(repo.clone(), verifier.clone());

        let cmd = CompleteCheckoutCommand {
            confirmation: confirmation_for(&order),
        };
        handler.handle(cmd.clone()).await.unwrap();

        let replay = handler.handle(cmd).await;
        assert!(matches!(
            replay.unwrap_err(),
            CheckoutError::ConfirmationReplayed(_)
        ));
        // The verifier was asked exactly once across both calls
        assert_eq!(verifier.call_count(), 1);

        // The attempt is still granted exactly once
        let stored = repo.find_by_order_id(&order.id).await.unwrap().unwrap();
        assert_eq!(stored.state, CheckoutState::Granted);
    }

    #[tokio::test]
    async fn unknown_order_is_not_found() {
        let repo = Arc::new(InMemoryAttemptRepository::new());
        let verifier = Arc::new(MockVerifier::answering(MockAnswer::Valid));
        let handler = handler(repo, verifier.clone());

        let result = handler
            .handle(CompleteCheckoutCommand {
                confirmation: PaymentConfirmation {
                    order_id: OrderId::new("order_ghost").unwrap(),
                    payment_id: PaymentId::new("pay_1").unwrap(),
                    signature: "ab".repeat(32),
                },
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::AttemptNotFound(_)
        ));
        assert_eq!(verifier.call_count(), 0);
    }

    #[tokio::test]
    async fn confirmation_for_abandoned_attempt_is_invalid_state() {
        let repo = Arc::new(InMemoryAttemptRepository::new());
        let order = awaiting_attempt(&repo).await;
        let mut attempt = repo.find_by_order_id(&order.id).await.unwrap().unwrap();
        attempt.abandon().unwrap();
        repo.update(&attempt).await.unwrap();

        let verifier = Arc::new(MockVerifier::answering(MockAnswer::Valid));
        let handler = handler(repo, verifier.clone());

        let result = handler
            .handle(CompleteCheckoutCommand {
                confirmation: confirmation_for(&order),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::InvalidState { .. }
        ));
        assert_eq!(verifier.call_count(), 0);
    }
}
