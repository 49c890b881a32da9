//! Checkout domain - one payment-order verification attempt.
//!
//! A checkout attempt is created when a subscriber asks to upgrade, owns a
//! single immutable [`PaymentOrder`], and ends in exactly one of Granted,
//! Denied, Abandoned, or Failed.

mod attempt;
mod confirmation;
mod entitlement;
mod errors;
mod order;
mod signature;
mod state;

pub use attempt::CheckoutAttempt;
pub use confirmation::PaymentConfirmation;
pub use entitlement::{DenyReason, EntitlementResult, NextAction};
pub use errors::CheckoutError;
pub use order::PaymentOrder;
pub use signature::SignatureVerifier;
pub use state::CheckoutState;

#[cfg(test)]
pub use signature::compute_test_signature;
