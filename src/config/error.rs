//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid provider key id format")]
    InvalidKeyId,

    #[error("Checkout amount must be a positive number of minor units")]
    InvalidAmount,

    #[error("Invalid currency code")]
    InvalidCurrency,

    #[error("Dashboard redirect must be an absolute path")]
    InvalidRedirect,
}
