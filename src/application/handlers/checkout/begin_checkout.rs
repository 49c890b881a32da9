//! BeginCheckoutHandler - Command handler for creating a payment order.

use std::sync::Arc;

use secrecy::ExposeSecret;

use crate::config::CheckoutConfig;
use crate::domain::checkout::{CheckoutAttempt, CheckoutError, PaymentOrder};
use crate::domain::foundation::{Amount, SubscriberId};
use crate::ports::{AttemptRepository, CreateOrderRequest, PaymentGateway};

/// Command to start a checkout attempt for a subscriber.
#[derive(Debug, Clone)]
pub struct BeginCheckoutCommand {
    pub subscriber_id: String,
    pub amount_minor: i64,
}

/// Result of a successfully created payment order.
#[derive(Debug, Clone)]
pub struct BeginCheckoutResult {
    pub attempt: CheckoutAttempt,
    pub order: PaymentOrder,
}

/// Handler for the order-initiator role.
///
/// Creates a fresh checkout attempt and asks the payment gateway for an
/// order. The provider credential is checked before anything else; a
/// missing credential fails fast without a single gateway call.
pub struct BeginCheckoutHandler {
    gateway: Arc<dyn PaymentGateway>,
    repository: Arc<dyn AttemptRepository>,
    config: CheckoutConfig,
}

impl BeginCheckoutHandler {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        repository: Arc<dyn AttemptRepository>,
        config: CheckoutConfig,
    ) -> Self {
        Self {
            gateway,
            repository,
            config,
        }
    }

    pub async fn handle(
        &self,
        cmd: BeginCheckoutCommand,
    ) -> Result<BeginCheckoutResult, CheckoutError> {
        // 1. Credential precondition - fail fast, no network call
        if self.config.key_id.is_empty() || self.config.key_secret.expose_secret().is_empty() {
            return Err(CheckoutError::MissingCredential);
        }

        // 2. Validate inputs
        let subscriber_id = SubscriberId::new(cmd.subscriber_id)?;
        let amount = Amount::from_minor_units(cmd.amount_minor)?;

        // 3. Start the attempt
        let mut attempt = CheckoutAttempt::new(subscriber_id.clone());
        attempt.order_requested()?;

        // 4. Create the order with the provider. Not retried automatically;
        //    a failure settles this attempt as Failed and the user starts a
        //    new one.
        let create = self
            .gateway
            .create_order(CreateOrderRequest {
                subscriber_id,
                amount,
                currency: self.config.currency.clone(),
                receipt: attempt.id.to_string(),
            })
            .await;

        let order = match create {
            Ok(order) => order,
            Err(e) => {
                tracing::warn!(
                    attempt_id = %attempt.id,
                    error = %e,
                    "Order creation failed"
                );
                attempt.order_failed()?;
                if let Err(save_err) = self.repository.save(&attempt).await {
                    tracing::error!(
                        attempt_id = %attempt.id,
                        error = %save_err,
                        "Failed attempt could not be persisted"
                    );
                }
                return Err(CheckoutError::backend_unavailable(e.message));
            }
        };

        // 5. Attach the order; the attempt now awaits the external checkout
        attempt.order_created(order.clone())?;

        // 6. Persist the pending attempt
        self.repository
            .save(&attempt)
            .await
            .map_err(|e| CheckoutError::infrastructure(e.to_string()))?;

        tracing::info!(
            attempt_id = %attempt.id,
            order_id = %order.id,
            amount = %order.amount,
            "Payment order created"
        );

        Ok(BeginCheckoutResult { attempt, order })
    }
}
