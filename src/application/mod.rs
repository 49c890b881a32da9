//! Application layer - command handlers and workflow composition.

pub mod handlers;
mod workflow;

pub use workflow::{CheckoutReport, CheckoutWorkflow};
