//! Premium Checkout - payment-order verification workflow.
//!
//! This crate implements the subscription upgrade flow: create a payment
//! order with the provider, await the external checkout outcome, verify the
//! signed confirmation, and decide entitlement fail-closed.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
