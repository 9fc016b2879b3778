//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod notifier;
mod repository;

pub use notifier::Notifier;
pub use repository::PaymentRepository;
