//! Checkout attempt aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AttemptId, SubscriberId, Timestamp};

use super::entitlement::EntitlementResult;
use super::errors::CheckoutError;
use super::order::PaymentOrder;
use super::state::CheckoutState;

/// One subscriber's attempt to purchase the premium upgrade.
///
/// The aggregate enforces the state machine in [`CheckoutState`]: each
/// transition method fails with `CheckoutError::InvalidState` unless the
/// attempt is in the expected source state. Terminal attempts never move
/// again; a retry starts a fresh aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutAttempt {
    pub id: AttemptId,
    pub subscriber_id: SubscriberId,
    pub state: CheckoutState,
    pub order: Option<PaymentOrder>,
    pub entitlement: Option<EntitlementResult>,
    pub started_at: Timestamp,
    pub settled_at: Option<Timestamp>,
}

impl CheckoutAttempt {
    /// Creates a fresh attempt in the Idle state.
    pub fn new(subscriber_id: SubscriberId) -> Self {
        Self {
            id: AttemptId::new(),
            subscriber_id,
            state: CheckoutState::Idle,
            order: None,
            entitlement: None,
            started_at: Timestamp::now(),
            settled_at: None,
        }
    }

    /// Records that order creation is in flight.
    pub fn order_requested(&mut self) -> Result<(), CheckoutError> {
        self.transition(CheckoutState::OrderRequested, "request an order")
    }

    /// Records the provider-issued order and immediately moves on to
    /// awaiting the external checkout, the workflow's single suspension
    /// point.
    pub fn order_created(&mut self, order: PaymentOrder) -> Result<(), CheckoutError> {
        self.transition(CheckoutState::OrderCreated, "attach the created order")?;
        self.order = Some(order);
        self.transition(CheckoutState::AwaitingConfirmation, "await confirmation")
    }

    /// Records that order creation failed. Terminal.
    pub fn order_failed(&mut self) -> Result<(), CheckoutError> {
        self.transition(CheckoutState::Failed, "record order failure")?;
        self.settled_at = Some(Timestamp::now());
        Ok(())
    }

    /// Records receipt of a confirmation; verification is now in flight.
    pub fn confirmation_received(&mut self) -> Result<(), CheckoutError> {
        self.transition(CheckoutState::Verifying, "verify a confirmation")
    }

    /// Settles the attempt with the verification outcome. Terminal.
    pub fn settle(&mut self, entitlement: EntitlementResult) -> Result<(), CheckoutError> {
        let target = if entitlement.granted() {
            CheckoutState::Granted
        } else {
            CheckoutState::Denied
        };
        self.transition(target, "settle entitlement")?;
        self.entitlement = Some(entitlement);
        self.settled_at = Some(Timestamp::now());
        Ok(())
    }

    /// Records that the user dismissed the checkout. Terminal, silent; no
    /// verification call is ever made for an abandoned attempt.
    pub fn abandon(&mut self) -> Result<(), CheckoutError> {
        self.transition(CheckoutState::Abandoned, "abandon the checkout")?;
        self.settled_at = Some(Timestamp::now());
        Ok(())
    }

    /// True only after an explicit grant.
    pub fn has_entitlement(&self) -> bool {
        self.state.has_entitlement()
    }

    fn transition(
        &mut self,
        target: CheckoutState,
        attempted: &'static str,
    ) -> Result<(), CheckoutError> {
        if !self.state.can_transition_to(&target) {
            return Err(CheckoutError::invalid_state(self.state.name(), attempted));
        }
        self.state = target;
        Ok(())
    }
}
