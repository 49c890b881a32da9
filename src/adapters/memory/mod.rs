//! In-memory persistence adapters.
//!
//! Mutex-guarded maps, suitable for tests and single-process deployment.

mod attempt_repository;
mod confirmation_store;

pub use attempt_repository::InMemoryAttemptRepository;
pub use confirmation_store::InMemoryConfirmationStore;
