//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the checkout workflow and the outside world. Adapters implement them.
//!
//! - `PaymentGateway` - order creation with the payment provider
//! - `CheckoutProvider` - the opaque third-party checkout surface
//! - `PaymentVerifier` - sole authority on confirmation validity
//! - `ConfirmationStore` - replay protection for confirmations
//! - `AttemptRepository` - persistence of checkout attempts

mod attempt_repository;
mod checkout_provider;
mod confirmation_store;
mod payment_gateway;
mod payment_verifier;

pub use attempt_repository::AttemptRepository;
pub use checkout_provider::{CheckoutOutcome, CheckoutProvider};
pub use confirmation_store::{ConfirmationStore, SaveResult, StoreError};
pub use payment_gateway::{CreateOrderRequest, GatewayError, GatewayErrorCode, PaymentGateway};
pub use payment_verifier::{PaymentVerifier, VerificationOutcome, VerifierError};
