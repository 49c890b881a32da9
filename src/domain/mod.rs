//! Domain layer - pure types and invariants.

pub mod checkout;
pub mod foundation;
