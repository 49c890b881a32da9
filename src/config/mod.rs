//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `PREMIUM_CHECKOUT` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use premium_checkout::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod checkout;
mod error;
mod server;

pub use checkout::CheckoutConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration.
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Checkout configuration (provider credentials, amount)
    pub checkout: CheckoutConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present (development), then reads environment
    /// variables with the `PREMIUM_CHECKOUT` prefix.
    ///
    /// # Environment Variable Format
    ///
    /// - `PREMIUM_CHECKOUT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PREMIUM_CHECKOUT__CHECKOUT__KEY_ID=rzp_test_xxx` -> `checkout.key_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PREMIUM_CHECKOUT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// Must be called once at startup, before any workflow runs. A missing
    /// provider credential fails here, before any network I/O is attempted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.checkout.validate()?;
        Ok(())
    }
}
