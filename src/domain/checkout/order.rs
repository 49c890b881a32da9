//! Payment order value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Amount, OrderId, SubscriberId, Timestamp};

/// Server-issued record representing one checkout attempt.
///
/// Created by the payment gateway, immutable afterwards, and tied 1:1 to a
/// single [`CheckoutAttempt`](super::CheckoutAttempt). The id, amount, and
/// currency echo the provider's response exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOrder {
    /// Provider-assigned order identifier.
    pub id: OrderId,

    /// Subscriber the order was created for.
    pub subscriber_id: SubscriberId,

    /// Amount in the smallest currency unit, echoed from the provider.
    pub amount: Amount,

    /// ISO 4217 currency code, echoed from the provider.
    pub currency: String,

    /// When the provider created the order.
    pub created_at: Timestamp,
}
