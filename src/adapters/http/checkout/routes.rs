//! Axum router configuration for checkout endpoints.

use axum::{routing::post, Router};

use super::handlers::{cancel_checkout, create_order, verify_payment, CheckoutAppState};

/// Create the checkout API router.
///
/// # Routes
///
/// - `POST /orders` - Create a payment order (requires subscriber identity)
/// - `POST /verify` - Verify a signed payment confirmation
/// - `POST /cancel` - Record a dismissed checkout
pub fn checkout_routes() -> Router<CheckoutAppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/verify", post(verify_payment))
        .route("/cancel", post(cancel_checkout))
}

/// Create the complete checkout module router.
///
/// Mounts checkout routes under `/checkout`, suitable for nesting at
/// `/api`.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use crate::adapters::http::checkout::{checkout_router, CheckoutAppState};
///
/// let app_state = CheckoutAppState { /* ... */ };
/// let app = Router::new()
///     .nest("/api", checkout_router())
///     .with_state(app_state);
/// ```
pub fn checkout_router() -> Router<CheckoutAppState> {
    Router::new().nest("/checkout", checkout_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use secrecy::SecretString;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::adapters::memory::{InMemoryAttemptRepository, InMemoryConfirmationStore};
    use crate::config::CheckoutConfig;
    use crate::domain::checkout::{PaymentConfirmation, PaymentOrder};
    use crate::domain::foundation::{OrderId, Timestamp};
    use crate::ports::{
        CreateOrderRequest, GatewayError, PaymentGateway, PaymentVerifier, VerificationOutcome,
        VerifierError,
    };

    struct MockGateway;

    #[async_trait]
    impl PaymentGateway for MockGateway {
        async fn create_order(
            &self,
            request: CreateOrderRequest,
        ) -> Result<PaymentOrder, GatewayError> {
            Ok(PaymentOrder {
                id: OrderId::new("order_route_1").unwrap(),
                subscriber_id: request.subscriber_id,
                amount: request.amount,
                currency: request.currency,
                created_at: Timestamp::now(),
            })
        }
    }

    struct MockVerifier;

    #[async_trait]
    impl PaymentVerifier for MockVerifier {
        async fn verify(
            &self,
            _order: &PaymentOrder,
            _confirmation: &PaymentConfirmation,
        ) -> Result<VerificationOutcome, VerifierError> {
            Ok(VerificationOutcome::Valid)
        }
    }

    fn test_state() -> CheckoutAppState {
        CheckoutAppState {
            gateway: Arc::new(MockGateway),
            repository: Arc::new(InMemoryAttemptRepository::new()),
            confirmations: Arc::new(InMemoryConfirmationStore::new()),
            verifier: Arc::new(MockVerifier),
            config: CheckoutConfig {
                key_id: "rzp_test_router".to_string(),
                key_secret: SecretString::new("secret".to_string()),
                amount_minor: 50_000,
                currency: "INR".to_string(),
                dashboard_redirect: "/dashboard".to_string(),
            },
        }
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn create_order_requires_subscriber_identity() {
        let app = checkout_router().with_state(test_state());

        let response = app
            .oneshot(post_json("/checkout/orders", json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn create_order_returns_created_with_identity() {
        let app = checkout_router().with_state(test_state());

        let mut request = post_json("/checkout/orders", json!({}));
        request
            .headers_mut()
            .insert("x-subscriber-id", "college-42".parse().unwrap());
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn verify_unknown_order_is_not_found() {
        let app = checkout_router().with_state(test_state());

        let response = app
            .oneshot(post_json(
                "/checkout/verify",
                json!({
                    "order_id": "order_missing",
                    "payment_id": "pay_1",
                    "signature": "ab".repeat(32),
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
