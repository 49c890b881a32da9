//! HTTP surface for the checkout workflow.

mod dto;
mod handlers;
mod routes;

pub use handlers::CheckoutAppState;
pub use routes::checkout_router;
