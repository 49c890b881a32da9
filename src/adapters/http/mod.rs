//! HTTP adapters.

pub mod checkout;
