//! Payment confirmation value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OrderId, PaymentId};

/// Signed proof of payment returned by the external checkout provider.
///
/// Transient and single-use: a confirmation must not be accepted twice for
/// the same order id. Replay protection is enforced by the verification
/// side through the confirmation store, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    /// Order the payment belongs to.
    pub order_id: OrderId,

    /// Provider-assigned payment identifier.
    pub payment_id: PaymentId,

    /// Hex-encoded HMAC-SHA256 signature over order and payment ids.
    pub signature: String,
}

impl PaymentConfirmation {
    /// The message the provider signs: `"{order_id}|{payment_id}"`.
    pub fn signed_payload(&self) -> String {
        format!("{}|{}", self.order_id, self.payment_id)
    }
}
