//! Command handlers, one per checkout operation.

pub mod checkout;

pub use checkout::{
    BeginCheckoutCommand, BeginCheckoutHandler, BeginCheckoutResult, CancelCheckoutCommand,
    CancelCheckoutHandler, CompleteCheckoutCommand, CompleteCheckoutHandler,
    CompleteCheckoutResult,
};
