//! Repository port trait.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (Stub, InMemory) implement this trait.

use crate::domain::{Payment, PaymentId};
use crate::error::RepoError;

/// The repository port for payment records.
///
/// There is no durability guarantee behind this port: callers must not
/// assume a saved payment can be read back unless the adapter says so.
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Saves a payment, assigning it a fresh id.
    ///
    /// Mutates `payment.id` in place.
    async fn save(&self, payment: &mut Payment) -> Result<(), RepoError>;

    /// Looks up a payment by id.
    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, RepoError>;
}
