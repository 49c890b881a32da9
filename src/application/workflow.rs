//! End-to-end checkout workflow.
//!
//! Sequential composition of the three roles: create the order, await the
//! external checkout's single completion, verify and settle. There is
//! exactly one asynchronous suspension point (the checkout itself); order
//! creation and verification are never parallelized.

use std::sync::Arc;

use crate::domain::checkout::{CheckoutAttempt, CheckoutError, EntitlementResult, NextAction};
use crate::ports::{CheckoutOutcome, CheckoutProvider};

use super::handlers::{
    BeginCheckoutCommand, BeginCheckoutHandler, CancelCheckoutCommand, CancelCheckoutHandler,
    CompleteCheckoutCommand, CompleteCheckoutHandler,
};

/// How one checkout attempt ended.
#[derive(Debug, Clone)]
pub struct CheckoutReport {
    pub attempt: CheckoutAttempt,
    pub entitlement: Option<EntitlementResult>,
    pub next_action: NextAction,
}

/// One subscriber session's upgrade workflow.
pub struct CheckoutWorkflow {
    begin: Arc<BeginCheckoutHandler>,
    complete: Arc<CompleteCheckoutHandler>,
    cancel: Arc<CancelCheckoutHandler>,
    provider: Arc<dyn CheckoutProvider>,
    amount_minor: i64,
}

impl CheckoutWorkflow {
    pub fn new(
        begin: Arc<BeginCheckoutHandler>,
        complete: Arc<CompleteCheckoutHandler>,
        cancel: Arc<CancelCheckoutHandler>,
        provider: Arc<dyn CheckoutProvider>,
        amount_minor: i64,
    ) -> Self {
        Self {
            begin,
            complete,
            cancel,
            provider,
            amount_minor,
        }
    }

    /// Run one checkout attempt for a subscriber, start to settlement.
    ///
    /// Order-creation and precondition failures abort the workflow with an
    /// error; a presented checkout always settles into a report (granted,
    /// denied, or abandoned). A fresh call starts a fresh attempt; nothing
    /// is retried automatically.
    pub async fn run(&self, subscriber_id: impl Into<String>) -> Result<CheckoutReport, CheckoutError> {
        // Order Initiator
        let begun = self
            .begin
            .handle(BeginCheckoutCommand {
                subscriber_id: subscriber_id.into(),
                amount_minor: self.amount_minor,
            })
            .await?;

        // External Checkout Provider - the single suspension point
        let outcome = match self.provider.open_checkout(&begun.order).await {
            Ok(outcome) => outcome,
            Err(e) => {
                // The widget itself failed; treat as a dismissal
                tracing::error!(order_id = %begun.order.id, error = %e, "Checkout surface failed");
                CheckoutOutcome::Cancelled
            }
        };

        // Verification Service, or silent abandonment
        match outcome {
            CheckoutOutcome::Confirmed(confirmation) => {
                let settled = self
                    .complete
                    .handle(CompleteCheckoutCommand { confirmation })
                    .await?;
                Ok(CheckoutReport {
                    attempt: settled.attempt,
                    entitlement: Some(settled.entitlement),
                    next_action: settled.next_action,
                })
            }
            CheckoutOutcome::Cancelled => {
                let attempt = self
                    .cancel
                    .handle(CancelCheckoutCommand {
                        order_id: begun.order.id.clone(),
                    })
                    .await?;
                Ok(CheckoutReport {
                    attempt,
                    entitlement: None,
                    next_action: NextAction::None,
                })
            }
        }
    }
}
