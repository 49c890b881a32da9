//! Single-shot checkout completion registry.

mod registry;

pub use registry::PendingCheckouts;
