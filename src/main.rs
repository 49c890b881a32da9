//! Premium checkout service binary.
//!
//! Loads configuration from the environment, wires the Razorpay adapters
//! to the application layer, and serves the checkout HTTP API.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use premium_checkout::adapters::http::checkout::{checkout_router, CheckoutAppState};
use premium_checkout::adapters::memory::{InMemoryAttemptRepository, InMemoryConfirmationStore};
use premium_checkout::adapters::razorpay::{RazorpayConfig, RazorpayGateway, RazorpayVerifier};
use premium_checkout::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(env_filter);
    if config.server.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // Fail fast on bad configuration, before any request is accepted.
    config.validate()?;

    tracing::info!(
        environment = %config.server.environment,
        test_mode = config.checkout.is_test_mode(),
        "starting premium checkout service"
    );

    let gateway = RazorpayGateway::new(RazorpayConfig::new(
        config.checkout.key_id.clone(),
        config.checkout.key_secret.clone(),
    ));
    let verifier = RazorpayVerifier::new(config.checkout.key_secret.clone());

    let state = CheckoutAppState {
        gateway: Arc::new(gateway),
        repository: Arc::new(InMemoryAttemptRepository::new()),
        confirmations: Arc::new(InMemoryConfirmationStore::new()),
        verifier: Arc::new(verifier),
        config: config.checkout.clone(),
    };

    let app = Router::new()
        .nest("/api", checkout_router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
