//! AttemptRepository port - persistence of checkout attempts.

use async_trait::async_trait;

use crate::domain::checkout::CheckoutAttempt;
use crate::domain::foundation::OrderId;

use super::confirmation_store::StoreError;

/// Port for checkout attempt persistence.
///
/// Attempts are keyed by the provider order id once an order exists; the
/// confirmation callback only carries the order id.
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    /// Persist a new attempt.
    async fn save(&self, attempt: &CheckoutAttempt) -> Result<(), StoreError>;

    /// Persist state changes to an existing attempt.
    async fn update(&self, attempt: &CheckoutAttempt) -> Result<(), StoreError>;

    /// Find the attempt owning the given order.
    async fn find_by_order_id(
        &self,
        order_id: &OrderId,
    ) -> Result<Option<CheckoutAttempt>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AttemptRepository) {}
    }
}
