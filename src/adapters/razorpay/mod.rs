//! Razorpay payment provider adapters.
//!
//! - [`RazorpayGateway`] implements `PaymentGateway` over the Orders API.
//! - [`RazorpayVerifier`] implements `PaymentVerifier` with the provider's
//!   HMAC payment-signature scheme; the key secret never leaves this side.

mod gateway;
mod types;
mod verifier;

pub use gateway::{RazorpayConfig, RazorpayGateway};
pub use verifier::RazorpayVerifier;
