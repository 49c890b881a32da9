//! In-memory attempt repository.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::checkout::CheckoutAttempt;
use crate::domain::foundation::{AttemptId, OrderId};
use crate::ports::{AttemptRepository, StoreError};

/// Attempt repository backed by a mutex-guarded map keyed by attempt id.
///
/// Attempts that never received an order (failed order creation) are
/// persisted too; they are simply unreachable through order-id lookup.
#[derive(Default)]
pub struct InMemoryAttemptRepository {
    attempts: Mutex<HashMap<AttemptId, CheckoutAttempt>>,
}

impl InMemoryAttemptRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AttemptRepository for InMemoryAttemptRepository {
    async fn save(&self, attempt: &CheckoutAttempt) -> Result<(), StoreError> {
        let mut attempts = self
            .attempts
            .lock()
            .map_err(|_| StoreError("attempt map poisoned".to_string()))?;
        attempts.insert(attempt.id, attempt.clone());
        Ok(())
    }

    async fn update(&self, attempt: &CheckoutAttempt) -> Result<(), StoreError> {
        self.save(attempt).await
    }

    async fn find_by_order_id(
        &self,
        order_id: &OrderId,
    ) -> Result<Option<CheckoutAttempt>, StoreError> {
        let attempts = self
            .attempts
            .lock()
            .map_err(|_| StoreError("attempt map poisoned".to_string()))?;
        Ok(attempts
            .values()
            .find(|a| a.order.as_ref().is_some_and(|o| &o.id == order_id))
            .cloned())
    }
}
