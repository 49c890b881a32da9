//! Foundation module - Shared domain primitives.
//!
//! Value objects and identifiers that form the vocabulary of the
//! checkout domain.

mod amount;
mod errors;
mod ids;
mod timestamp;

pub use amount::Amount;
pub use errors::ValidationError;
pub use ids::{AttemptId, OrderId, PaymentId, SubscriberId};
pub use timestamp::Timestamp;
