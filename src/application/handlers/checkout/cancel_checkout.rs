//! CancelCheckoutHandler - Command handler for abandoned checkouts.

use std::sync::Arc;

use crate::domain::checkout::{CheckoutAttempt, CheckoutError, CheckoutState};
use crate::domain::foundation::OrderId;
use crate::ports::AttemptRepository;

/// Command marking a checkout as dismissed by the user.
#[derive(Debug, Clone)]
pub struct CancelCheckoutCommand {
    pub order_id: OrderId,
}

/// Handler for user-initiated abandonment.
///
/// Silent by design: no error is shown to the user, no verification call is
/// made, and nothing is sent to the provider. The order stays pending
/// server-side until the provider expires it.
pub struct CancelCheckoutHandler {
    repository: Arc<dyn AttemptRepository>,
}

impl CancelCheckoutHandler {
    pub fn new(repository: Arc<dyn AttemptRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CancelCheckoutCommand,
    ) -> Result<CheckoutAttempt, CheckoutError> {
        let mut attempt = self
            .repository
            .find_by_order_id(&cmd.order_id)
            .await
            .map_err(|e| CheckoutError::infrastructure(e.to_string()))?
            .ok_or_else(|| CheckoutError::AttemptNotFound(cmd.order_id.clone()))?;

        // Cancelling twice is a no-op
        if attempt.state == CheckoutState::Abandoned {
            return Ok(attempt);
        }

        attempt.abandon()?;
        self.repository
            .update(&attempt)
            .await
            .map_err(|e| CheckoutError::infrastructure(e.to_string()))?;

        tracing::info!(
            attempt_id = %attempt.id,
            order_id = %cmd.order_id,
            "Checkout abandoned"
        );

        Ok(attempt)
    }
}
