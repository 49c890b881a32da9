//! Checkout provider port - the opaque third-party checkout surface.

use async_trait::async_trait;

use crate::domain::checkout::{PaymentConfirmation, PaymentOrder};

use super::payment_gateway::GatewayError;

/// Outcome of one checkout presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The user paid; here is the signed confirmation.
    Confirmed(PaymentConfirmation),

    /// The user dismissed the checkout without paying.
    Cancelled,
}

/// Port for the external checkout UI.
///
/// The implementation displays a checkout for the given order and completes
/// at most once. The workflow awaits this single completion; it never polls
/// and never blocks a thread on it. No timeout is enforced here: an
/// abandoned checkout simply never completes and the order is left pending
/// (provider-side expiry is the provider's concern).
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Present the checkout for an order and await its single completion.
    async fn open_checkout(&self, order: &PaymentOrder) -> Result<CheckoutOutcome, GatewayError>;
}
