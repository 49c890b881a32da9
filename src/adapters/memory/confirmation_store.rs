//! In-memory confirmation store for replay protection.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::checkout::PaymentConfirmation;
use crate::domain::foundation::{OrderId, PaymentId, Timestamp};
use crate::ports::{ConfirmationStore, SaveResult, StoreError};

/// Record of an accepted confirmation, kept for auditing.
#[derive(Debug, Clone)]
struct SeenConfirmation {
    #[allow(dead_code)]
    payment_id: PaymentId,
    #[allow(dead_code)]
    seen_at: Timestamp,
}

/// Confirmation store backed by a mutex-guarded map.
///
/// The map lock makes `record` atomic per store: two concurrent records for
/// the same order cannot both observe `New`.
#[derive(Default)]
pub struct InMemoryConfirmationStore {
    seen: Mutex<HashMap<OrderId, SeenConfirmation>>,
}

impl InMemoryConfirmationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfirmationStore for InMemoryConfirmationStore {
    async fn record(
        &self,
        confirmation: &PaymentConfirmation,
        seen_at: Timestamp,
    ) -> Result<SaveResult, StoreError> {
        let mut seen = self
            .seen
            .lock()
            .map_err(|_| StoreError("confirmation map poisoned".to_string()))?;

        if seen.contains_key(&confirmation.order_id) {
            return Ok(SaveResult::Duplicate);
        }

        seen.insert(
            confirmation.order_id.clone(),
            SeenConfirmation {
                payment_id: confirmation.payment_id.clone(),
                seen_at,
            },
        );
        Ok(SaveResult::New)
    }
}
