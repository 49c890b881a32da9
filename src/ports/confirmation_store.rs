//! ConfirmationStore port - replay protection for payment confirmations.
//!
//! A confirmation is single-use: once a confirmation has been recorded for
//! an order id, any later confirmation for the same order is a replay and
//! must be denied without re-verification. Recording happens before the
//! verifier is asked, so the workflow never re-submits an already-seen
//! confirmation.

use async_trait::async_trait;

use crate::domain::checkout::PaymentConfirmation;
use crate::domain::foundation::Timestamp;

/// Result of attempting to record a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveResult {
    /// First time this order's confirmation has been seen.
    New,

    /// A confirmation for this order was already recorded.
    Duplicate,
}

/// Port for tracking accepted confirmations.
#[async_trait]
pub trait ConfirmationStore: Send + Sync {
    /// Record a confirmation, reporting whether it was already known.
    ///
    /// Must be atomic per order id: two concurrent records for the same
    /// order may not both observe `New`.
    async fn record(
        &self,
        confirmation: &PaymentConfirmation,
        seen_at: Timestamp,
    ) -> Result<SaveResult, StoreError>;
}

/// Infrastructure failure in the confirmation store.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Confirmation store error: {0}")]
pub struct StoreError(pub String);
