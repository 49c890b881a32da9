//! `CheckoutProvider` backed by a registry of single-shot channels.
//!
//! The external checkout widget runs outside our scheduling control; its
//! completion arrives as a callback (in the HTTP deployment, a request from
//! the client). Each open checkout registers a oneshot sender keyed by
//! order id; the callback resolves it exactly once. The workflow simply
//! awaits the receiver, which models the "completes at most once, never
//! polled" contract directly.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::domain::checkout::{PaymentConfirmation, PaymentOrder};
use crate::domain::foundation::OrderId;
use crate::ports::{CheckoutOutcome, CheckoutProvider, GatewayError};

/// Registry of checkouts awaiting their single completion.
#[derive(Default)]
pub struct PendingCheckouts {
    waiting: Mutex<HashMap<OrderId, oneshot::Sender<CheckoutOutcome>>>,
}

impl PendingCheckouts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a pending checkout with a signed confirmation.
    ///
    /// Returns false if no checkout is waiting on this order (already
    /// resolved, or never opened).
    pub fn confirm(&self, confirmation: PaymentConfirmation) -> bool {
        self.resolve(
            confirmation.order_id.clone(),
            CheckoutOutcome::Confirmed(confirmation),
        )
    }

    /// Resolve a pending checkout as dismissed by the user.
    pub fn cancel(&self, order_id: &OrderId) -> bool {
        self.resolve(order_id.clone(), CheckoutOutcome::Cancelled)
    }

    fn resolve(&self, order_id: OrderId, outcome: CheckoutOutcome) -> bool {
        let sender = {
            let mut waiting = match self.waiting.lock() {
                Ok(guard) => guard,
                Err(_) => return false,
            };
            waiting.remove(&order_id)
        };

        match sender {
            Some(tx) => tx.send(outcome).is_ok(),
            None => {
                tracing::debug!(order_id = %order_id, "No pending checkout for completion");
                false
            }
        }
    }
}

#[async_trait]
impl CheckoutProvider for PendingCheckouts {
    async fn open_checkout(&self, order: &PaymentOrder) -> Result<CheckoutOutcome, GatewayError> {
        let (tx, rx) = oneshot::channel();
        {
            let mut waiting = self
                .waiting
                .lock()
                .map_err(|_| GatewayError::provider("pending checkout registry poisoned"))?;
            waiting.insert(order.id.clone(), tx);
        }

        // The single suspension point. A dropped sender (registry cleared,
        // process shutdown) reads as a dismissal.
        match rx.await {
            Ok(outcome) => Ok(outcome),
            Err(_) => Ok(CheckoutOutcome::Cancelled),
        }
    }
}
