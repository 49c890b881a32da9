//! HTTP DTOs for checkout endpoints.
//!
//! JSON request/response shapes at the boundary between HTTP and the
//! application layer.

use serde::{Deserialize, Serialize};

use crate::domain::checkout::{NextAction, PaymentOrder};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a payment order for the premium upgrade.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequestDto {
    /// Amount in minor units; defaults to the configured plan price.
    #[serde(default)]
    pub amount_minor: Option<i64>,
}

/// Confirmation callback payload from the checkout widget.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyPaymentRequest {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// Cancellation callback payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelCheckoutRequest {
    pub order_id: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Created order, echoing the provider's fields for the checkout widget.
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    /// Public key id the widget needs to open the checkout.
    pub key_id: String,
}

impl OrderResponse {
    pub fn from_order(order: &PaymentOrder, key_id: impl Into<String>) -> Self {
        Self {
            id: order.id.to_string(),
            amount: order.amount.minor_units(),
            currency: order.currency.clone(),
            key_id: key_id.into(),
        }
    }
}

/// Verification outcome for the client.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    /// Dashboard route, present only on a granted upgrade.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    /// Uniform user-facing message for failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerifyPaymentResponse {
    pub fn granted(next_action: &NextAction) -> Self {
        let redirect_to = match next_action {
            NextAction::RedirectToDashboard { route } => Some(route.clone()),
            _ => None,
        };
        Self {
            success: true,
            redirect_to,
            message: None,
        }
    }

    pub fn denied() -> Self {
        Self {
            success: false,
            redirect_to: None,
            message: Some("Payment verification failed! Please try again.".to_string()),
        }
    }
}

/// Cancellation acknowledgement.
#[derive(Debug, Clone, Serialize)]
pub struct CancelCheckoutResponse {
    pub state: String,
}

/// Error body shared by all checkout endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verify_request_deserializes() {
        let body = json!({
            "order_id": "order_abc",
            "payment_id": "pay_def",
            "signature": "ab".repeat(32),
        });
        let request: VerifyPaymentRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.order_id, "order_abc");
        assert_eq!(request.payment_id, "pay_def");
    }

    #[test]
    fn create_order_request_amount_is_optional() {
        let request: CreateOrderRequestDto = serde_json::from_value(json!({})).unwrap();
        assert!(request.amount_minor.is_none());

        let request: CreateOrderRequestDto =
            serde_json::from_value(json!({"amount_minor": 50000})).unwrap();
        assert_eq!(request.amount_minor, Some(50000));
    }

    #[test]
    fn granted_response_carries_only_the_redirect() {
        let response = VerifyPaymentResponse::granted(&NextAction::RedirectToDashboard {
            route: "/dashboard".to_string(),
        });
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["redirect_to"], "/dashboard");
        assert!(value.get("message").is_none());
    }

    #[test]
    fn denied_response_carries_the_retry_message() {
        let value = serde_json::to_value(VerifyPaymentResponse::denied()).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("redirect_to").is_none());
        assert_eq!(
            value["message"],
            "Payment verification failed! Please try again."
        );
    }
}
