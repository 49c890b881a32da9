//! Checkout command handlers.

mod begin_checkout;
mod cancel_checkout;
mod complete_checkout;

pub use begin_checkout::{BeginCheckoutCommand, BeginCheckoutHandler, BeginCheckoutResult};
pub use cancel_checkout::{CancelCheckoutCommand, CancelCheckoutHandler};
pub use complete_checkout::{
    CompleteCheckoutCommand, CompleteCheckoutHandler, CompleteCheckoutResult,
};
