//! Razorpay order-creation gateway.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::checkout::PaymentOrder;
use crate::domain::foundation::{Amount, OrderId, Timestamp};
use crate::ports::{CreateOrderRequest, GatewayError, GatewayErrorCode, PaymentGateway};

use super::types::{RazorpayErrorBody, RazorpayOrder, RazorpayOrderRequest};

/// Razorpay API configuration.
#[derive(Clone)]
pub struct RazorpayConfig {
    /// Key id (rzp_test_... or rzp_live_...).
    key_id: String,

    /// Key secret, used for API basic auth.
    key_secret: SecretString,

    /// Base URL for the provider API (default: https://api.razorpay.com).
    api_base_url: String,
}

impl RazorpayConfig {
    /// Create a new Razorpay configuration.
    pub fn new(key_id: impl Into<String>, key_secret: SecretString) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret,
            api_base_url: "https://api.razorpay.com".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// `PaymentGateway` backed by the Razorpay Orders API.
pub struct RazorpayGateway {
    config: RazorpayConfig,
    http_client: reqwest::Client,
}

impl RazorpayGateway {
    /// Create a new gateway with the given configuration.
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Map a non-2xx provider response to a typed gateway error.
    fn map_error_response(status: reqwest::StatusCode, error_text: &str) -> GatewayError {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return GatewayError::authentication("Invalid API credential");
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return GatewayError::new(GatewayErrorCode::RateLimitExceeded, "Rate limit exceeded");
        }

        match serde_json::from_str::<RazorpayErrorBody>(error_text) {
            Ok(parsed) => GatewayError::provider(parsed.error.description)
                .with_provider_code(parsed.error.code),
            Err(_) => GatewayError::provider(format!("Razorpay API error: {}", error_text)),
        }
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(
        &self,
        request: CreateOrderRequest,
    ) -> Result<PaymentOrder, GatewayError> {
        let url = format!("{}/v1/orders", self.config.api_base_url);

        let body = RazorpayOrderRequest {
            amount: request.amount.minor_units(),
            currency: request.currency.clone(),
            receipt: request.receipt.clone(),
        };

        let response = self
            .http_client
            .post(&url)
            .basic_auth(
                &self.config.key_id,
                Some(self.config.key_secret.expose_secret()),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                error = %error_text,
                "Razorpay create_order failed"
            );

            return Err(Self::map_error_response(status, &error_text));
        }

        let provider_order: RazorpayOrder = response
            .json()
            .await
            .map_err(|e| GatewayError::provider(format!("Failed to parse order response: {}", e)))?;

        // Echo the provider's fields exactly; never substitute our inputs
        let order = PaymentOrder {
            id: OrderId::new(provider_order.id)
                .map_err(|e| GatewayError::provider(format!("Provider returned bad id: {}", e)))?,
            subscriber_id: request.subscriber_id,
            amount: Amount::from_minor_units(provider_order.amount).map_err(|e| {
                GatewayError::provider(format!("Provider returned bad amount: {}", e))
            })?,
            currency: provider_order.currency,
            created_at: Timestamp::from_unix_seconds(provider_order.created_at)
                .unwrap_or_else(Timestamp::now),
        };

        tracing::debug!(order_id = %order.id, status = %provider_order.status, "Order created");

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> RazorpayConfig {
        RazorpayConfig::new(
            "rzp_test_abc123",
            SecretString::new("test_secret".to_string()),
        )
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn config_new_sets_default_base_url() {
        let config = test_config();
        assert_eq!(config.api_base_url, "https://api.razorpay.com");
        assert_eq!(config.key_id, "rzp_test_abc123");
    }

    #[test]
    fn config_with_base_url() {
        let config = test_config().with_base_url("http://localhost:8080");
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Error Mapping Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn unauthorized_maps_to_authentication_error() {
        let err = RazorpayGateway::map_error_response(reqwest::StatusCode::UNAUTHORIZED, "");
        assert_eq!(err.code, GatewayErrorCode::AuthenticationError);
    }

    #[test]
    fn too_many_requests_maps_to_rate_limit() {
        let err = RazorpayGateway::map_error_response(reqwest::StatusCode::TOO_MANY_REQUESTS, "");
        assert_eq!(err.code, GatewayErrorCode::RateLimitExceeded);
    }

    #[test]
    fn provider_error_envelope_is_parsed() {
        let body = r#"{"error":{"code":"BAD_REQUEST_ERROR","description":"Order amount less than minimum amount allowed"}}"#;
        let err = RazorpayGateway::map_error_response(reqwest::StatusCode::BAD_REQUEST, body);

        assert_eq!(err.code, GatewayErrorCode::ProviderError);
        assert_eq!(err.message, "Order amount less than minimum amount allowed");
        assert_eq!(err.provider_code.as_deref(), Some("BAD_REQUEST_ERROR"));
    }

    #[test]
    fn unparseable_error_body_falls_back_to_raw_text() {
        let err = RazorpayGateway::map_error_response(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "upstream timeout",
        );

        assert_eq!(err.code, GatewayErrorCode::ProviderError);
        assert!(err.message.contains("upstream timeout"));
        assert!(err.provider_code.is_none());
    }
}
