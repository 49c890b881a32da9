//! HTTP handlers for checkout endpoints.
//!
//! These handlers connect axum routes to the application layer command
//! handlers. The user-facing failure message stays uniform ("please try
//! again") while the status code and error code preserve the internal
//! distinction between a denial and an unreachable verifier.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::IntoResponse;
use http::StatusCode;

use crate::application::handlers::{
    BeginCheckoutCommand, BeginCheckoutHandler, CancelCheckoutCommand, CancelCheckoutHandler,
    CompleteCheckoutCommand, CompleteCheckoutHandler,
};
use crate::config::CheckoutConfig;
use crate::domain::checkout::{CheckoutError, DenyReason, EntitlementResult, PaymentConfirmation};
use crate::domain::foundation::{OrderId, PaymentId, SubscriberId};
use crate::ports::{AttemptRepository, ConfirmationStore, PaymentGateway, PaymentVerifier};

use super::dto::{
    CancelCheckoutRequest, CancelCheckoutResponse, CreateOrderRequestDto, ErrorResponse,
    OrderResponse, VerifyPaymentRequest, VerifyPaymentResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state, cloned per request.
#[derive(Clone)]
pub struct CheckoutAppState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub repository: Arc<dyn AttemptRepository>,
    pub confirmations: Arc<dyn ConfirmationStore>,
    pub verifier: Arc<dyn PaymentVerifier>,
    pub config: CheckoutConfig,
}

impl CheckoutAppState {
    pub fn begin_handler(&self) -> BeginCheckoutHandler {
        BeginCheckoutHandler::new(
            self.gateway.clone(),
            self.repository.clone(),
            self.config.clone(),
        )
    }

    pub fn complete_handler(&self) -> CompleteCheckoutHandler {
        CompleteCheckoutHandler::new(
            self.repository.clone(),
            self.confirmations.clone(),
            self.verifier.clone(),
            self.config.dashboard_redirect.clone(),
        )
    }

    pub fn cancel_handler(&self) -> CancelCheckoutHandler {
        CancelCheckoutHandler::new(self.repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Subscriber Context
// ════════════════════════════════════════════════════════════════════════════════

/// Subscriber identity resolved from the request.
///
/// In production this comes from the authentication token; here it is
/// extracted from the `x-subscriber-id` header set by the auth layer in
/// front of this service.
#[derive(Debug, Clone)]
pub struct AuthenticatedSubscriber {
    pub subscriber_id: SubscriberId,
}

/// Rejection when no subscriber identity is present.
pub struct SubscriberRequired;

impl IntoResponse for SubscriberRequired {
    fn into_response(self) -> axum::response::Response {
        let error = ErrorResponse::new(
            "SUBSCRIBER_REQUIRED",
            "Unable to resolve subscriber information",
        );
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

#[async_trait::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthenticatedSubscriber
where
    S: Send + Sync,
{
    type Rejection = SubscriberRequired;

    async fn from_request_parts(
        parts: &mut http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("x-subscriber-id")
            .and_then(|v| v.to_str().ok())
            .ok_or(SubscriberRequired)?;

        let subscriber_id = SubscriberId::new(header).map_err(|_| SubscriberRequired)?;
        Ok(AuthenticatedSubscriber { subscriber_id })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// `POST /orders` - create a payment order for the premium upgrade.
pub async fn create_order(
    State(state): State<CheckoutAppState>,
    subscriber: AuthenticatedSubscriber,
    Json(request): Json<CreateOrderRequestDto>,
) -> impl IntoResponse {
    let amount_minor = request.amount_minor.unwrap_or(state.config.amount_minor);

    let result = state
        .begin_handler()
        .handle(BeginCheckoutCommand {
            subscriber_id: subscriber.subscriber_id.to_string(),
            amount_minor,
        })
        .await;

    match result {
        Ok(begun) => {
            let body = OrderResponse::from_order(&begun.order, state.config.key_id.clone());
            (StatusCode::CREATED, Json(body)).into_response()
        }
        Err(err) => error_response(&err),
    }
}

/// `POST /verify` - verify a signed confirmation and settle entitlement.
pub async fn verify_payment(
    State(state): State<CheckoutAppState>,
    Json(request): Json<VerifyPaymentRequest>,
) -> impl IntoResponse {
    let confirmation = match parse_confirmation(&request) {
        Ok(confirmation) => confirmation,
        Err(response) => return response,
    };

    let result = state
        .complete_handler()
        .handle(CompleteCheckoutCommand { confirmation })
        .await;

    match result {
        Ok(settled) => match &settled.entitlement {
            EntitlementResult::Granted => {
                let body = VerifyPaymentResponse::granted(&settled.next_action);
                (StatusCode::OK, Json(body)).into_response()
            }
            EntitlementResult::Denied { reason } => {
                // Same user-facing message, distinct status and code
                let err = match reason {
                    DenyReason::VerificationUnavailable => {
                        CheckoutError::verification_unavailable("verifier unreachable")
                    }
                    _ => CheckoutError::verification_denied("confirmation rejected"),
                };
                denied_response(&err)
            }
        },
        Err(err) => error_response(&err),
    }
}

/// `POST /cancel` - record a dismissed checkout. Silent for the user.
pub async fn cancel_checkout(
    State(state): State<CheckoutAppState>,
    Json(request): Json<CancelCheckoutRequest>,
) -> impl IntoResponse {
    let order_id = match OrderId::new(request.order_id) {
        Ok(id) => id,
        Err(e) => {
            let error = ErrorResponse::new("VALIDATION_FAILED", e.to_string());
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    match state
        .cancel_handler()
        .handle(CancelCheckoutCommand { order_id })
        .await
    {
        Ok(attempt) => {
            let body = CancelCheckoutResponse {
                state: attempt.state.to_string(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => error_response(&err),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Mapping
// ════════════════════════════════════════════════════════════════════════════════

fn parse_confirmation(
    request: &VerifyPaymentRequest,
) -> Result<PaymentConfirmation, axum::response::Response> {
    let bad_request = |e: &dyn std::fmt::Display| {
        let error = ErrorResponse::new("VALIDATION_FAILED", e.to_string());
        (StatusCode::BAD_REQUEST, Json(error)).into_response()
    };

    let order_id = OrderId::new(request.order_id.clone()).map_err(|e| bad_request(&e))?;
    let payment_id = PaymentId::new(request.payment_id.clone()).map_err(|e| bad_request(&e))?;
    if request.signature.trim().is_empty() {
        return Err(bad_request(&"signature cannot be empty"));
    }

    Ok(PaymentConfirmation {
        order_id,
        payment_id,
        signature: request.signature.clone(),
    })
}

/// Denied verification keeps the uniform retry message.
fn denied_response(err: &CheckoutError) -> axum::response::Response {
    let status = status_for(err);
    (status, Json(VerifyPaymentResponse::denied())).into_response()
}

fn error_response(err: &CheckoutError) -> axum::response::Response {
    let status = status_for(err);
    let error = ErrorResponse::new(code_for(err), err.to_string());
    (status, Json(error)).into_response()
}

fn status_for(err: &CheckoutError) -> StatusCode {
    match err {
        CheckoutError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
        CheckoutError::SubscriberRequired | CheckoutError::InvalidAmount { .. } => {
            StatusCode::BAD_REQUEST
        }
        CheckoutError::BackendUnavailable { .. }
        | CheckoutError::VerificationUnavailable { .. } => StatusCode::BAD_GATEWAY,
        CheckoutError::VerificationDenied { .. } => StatusCode::PAYMENT_REQUIRED,
        CheckoutError::ConfirmationReplayed(_)
        | CheckoutError::OrderMismatch { .. }
        | CheckoutError::InvalidState { .. } => StatusCode::CONFLICT,
        CheckoutError::AttemptNotFound(_) => StatusCode::NOT_FOUND,
        CheckoutError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn code_for(err: &CheckoutError) -> &'static str {
    match err {
        CheckoutError::MissingCredential => "MISSING_CREDENTIAL",
        CheckoutError::SubscriberRequired => "SUBSCRIBER_REQUIRED",
        CheckoutError::InvalidAmount { .. } => "INVALID_AMOUNT",
        CheckoutError::BackendUnavailable { .. } => "BACKEND_UNAVAILABLE",
        CheckoutError::VerificationUnavailable { .. } => "VERIFICATION_UNAVAILABLE",
        CheckoutError::VerificationDenied { .. } => "VERIFICATION_DENIED",
        CheckoutError::ConfirmationReplayed(_) => "CONFIRMATION_REPLAYED",
        CheckoutError::OrderMismatch { .. } => "ORDER_MISMATCH",
        CheckoutError::AttemptNotFound(_) => "ATTEMPT_NOT_FOUND",
        CheckoutError::InvalidState { .. } => "INVALID_STATE",
        CheckoutError::Infrastructure(_) => "INTERNAL_ERROR",
    }
}
