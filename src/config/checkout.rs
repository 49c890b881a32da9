//! Checkout configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Checkout configuration (payment provider credentials and plan amount).
///
/// Both credentials are required before any order can be created; a missing
/// credential is a configuration error, surfaced at startup rather than on
/// the first network call.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutConfig {
    /// Provider key id (rzp_test_... or rzp_live_...). Safe to expose to
    /// the checkout widget.
    pub key_id: String,

    /// Provider key secret. Server-side only, used to verify payment
    /// signatures.
    pub key_secret: SecretString,

    /// Premium plan price in the smallest currency unit (paise for INR).
    pub amount_minor: i64,

    /// ISO 4217 currency code.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Route the client is redirected to after a granted upgrade.
    #[serde(default = "default_dashboard_redirect")]
    pub dashboard_redirect: String,
}

impl CheckoutConfig {
    /// Check if using provider test mode
    pub fn is_test_mode(&self) -> bool {
        self.key_id.starts_with("rzp_test_")
    }

    /// Check if using provider live mode
    pub fn is_live_mode(&self) -> bool {
        self.key_id.starts_with("rzp_live_")
    }

    /// Validate checkout configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.key_id.is_empty() {
            return Err(ValidationError::MissingRequired("CHECKOUT_KEY_ID"));
        }
        if self.key_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("CHECKOUT_KEY_SECRET"));
        }

        // Verify key prefix for safety
        if !self.key_id.starts_with("rzp_") {
            return Err(ValidationError::InvalidKeyId);
        }

        if self.amount_minor <= 0 {
            return Err(ValidationError::InvalidAmount);
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::InvalidCurrency);
        }
        if !self.dashboard_redirect.starts_with('/') {
            return Err(ValidationError::InvalidRedirect);
        }

        Ok(())
    }
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_dashboard_redirect() -> String {
    "/dashboard".to_string()
}
