//! In-memory repository adapter.
//!
//! Keeps saved payments in a concurrent map so lookups have real semantics.
//! Nothing survives a restart.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, info};

use payments_types::{Payment, PaymentId, PaymentRepository, RepoError};

#[derive(Debug, Default)]
pub struct InMemoryPaymentRepository {
    payments: DashMap<PaymentId, Payment>,
}

impl InMemoryPaymentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored payments.
    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    /// Stores `payment` under `id`. The payment only receives the id once the
    /// slot is claimed.
    pub(crate) fn store(&self, id: PaymentId, payment: &mut Payment) -> Result<(), RepoError> {
        match self.payments.entry(id.clone()) {
            Entry::Occupied(_) => {
                return Err(RepoError::Conflict(format!(
                    "Payment {} already stored",
                    id
                )));
            }
            Entry::Vacant(slot) => {
                payment.id = Some(id.clone());
                slot.insert(payment.clone());
            }
        }

        info!(payment_id = %id, "Saved payment");
        Ok(())
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn save(&self, payment: &mut Payment) -> Result<(), RepoError> {
        self.store(PaymentId::generate(), payment)
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, RepoError> {
        let found = self.payments.get(id).map(|entry| entry.value().clone());
        debug!(payment_id = %id, found = found.is_some(), "Looked up payment");
        Ok(found)
    }
}
