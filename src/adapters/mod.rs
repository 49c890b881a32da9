//! Adapters - concrete implementations of the ports.

pub mod http;
pub mod memory;
pub mod pending;
pub mod razorpay;
