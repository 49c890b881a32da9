//! Payment gateway port for order creation.
//!
//! Defines the contract for the provider's Orders API. The gateway issues
//! an immutable [`PaymentOrder`] tied 1:1 to one checkout attempt; the
//! workflow never retries a failed creation automatically.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::checkout::PaymentOrder;
use crate::domain::foundation::{Amount, SubscriberId};

/// Port for payment order creation.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a payment order with the provider.
    ///
    /// On success the returned order echoes the provider's id, amount, and
    /// currency exactly.
    async fn create_order(&self, request: CreateOrderRequest)
        -> Result<PaymentOrder, GatewayError>;
}

/// Request to create a payment order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Subscriber purchasing the upgrade.
    pub subscriber_id: SubscriberId,

    /// Amount in the smallest currency unit.
    pub amount: Amount,

    /// ISO 4217 currency code.
    pub currency: String,

    /// Caller-chosen receipt reference (the attempt id).
    pub receipt: String,
}

/// Errors from payment gateway operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    /// Error code for categorization.
    pub code: GatewayErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Provider's error code (if available).
    pub provider_code: Option<String>,
}

impl GatewayError {
    /// Create a new gateway error.
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
        }
    }

    /// Attach the provider's own error code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::AuthenticationError, message)
    }

    /// Create a provider-side error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::ProviderError, message)
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for GatewayError {}

/// Gateway error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorCode {
    /// Network connectivity issue or timeout.
    NetworkError,

    /// API authentication failed (bad credential).
    AuthenticationError,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Provider API error.
    ProviderError,
}

impl std::fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GatewayErrorCode::NetworkError => "network_error",
            GatewayErrorCode::AuthenticationError => "authentication_error",
            GatewayErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            GatewayErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}
