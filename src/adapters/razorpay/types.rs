//! Wire types for the Razorpay Orders API.

use serde::{Deserialize, Serialize};

/// Body for `POST /v1/orders`.
#[derive(Debug, Clone, Serialize)]
pub struct RazorpayOrderRequest {
    /// Amount in the smallest currency unit (paise).
    pub amount: i64,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Caller reference, echoed back by the provider.
    pub receipt: String,
}

/// Order as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayOrder {
    /// Provider order id (order_xxx).
    pub id: String,

    /// Amount in minor units, echoed.
    pub amount: i64,

    /// Currency, echoed.
    pub currency: String,

    /// Order status (created / attempted / paid).
    #[serde(default)]
    pub status: String,

    /// Unix timestamp of creation.
    pub created_at: i64,
}

/// Error envelope the provider wraps failures in.
#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayErrorBody {
    pub error: RazorpayErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayErrorDetail {
    /// Provider error code (e.g. BAD_REQUEST_ERROR).
    #[serde(default)]
    pub code: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_order_response() {
        let json = r#"{
            "id": "order_EKwxwAgItmmXdp",
            "entity": "order",
            "amount": 99900,
            "amount_paid": 0,
            "amount_due": 99900,
            "currency": "INR",
            "receipt": "attempt-1",
            "status": "created",
            "attempts": 0,
            "created_at": 1582628071
        }"#;

        let order: RazorpayOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "order_EKwxwAgItmmXdp");
        assert_eq!(order.amount, 99900);
        assert_eq!(order.currency, "INR");
        assert_eq!(order.status, "created");
    }

    #[test]
    fn parses_error_envelope() {
        let json = r#"{
            "error": {
                "code": "BAD_REQUEST_ERROR",
                "description": "The amount must be atleast INR 1.00",
                "field": "amount"
            }
        }"#;

        let body: RazorpayErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.error.code, "BAD_REQUEST_ERROR");
        assert!(body.error.description.contains("amount"));
    }
}
