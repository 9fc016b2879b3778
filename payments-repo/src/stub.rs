//! Stub repository adapter.
//!
//! Simulates a database without keeping any state: saves only hand out ids,
//! and lookups fabricate a record for whatever id they are given.

use async_trait::async_trait;
use tracing::{debug, info};

use payments_types::{DEFAULT_PAYMENT_AMOUNT, Payment, PaymentId, PaymentRepository, RepoError};

/// Stateless repository that never fails and never remembers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubPaymentRepository;

impl StubPaymentRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentRepository for StubPaymentRepository {
    async fn save(&self, payment: &mut Payment) -> Result<(), RepoError> {
        let id = PaymentId::generate();
        info!(payment_id = %id, "Saved payment");
        payment.id = Some(id);
        Ok(())
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, RepoError> {
        debug!(payment_id = %id, "Fabricating payment record");
        Ok(Some(Payment::with_id(id.clone(), DEFAULT_PAYMENT_AMOUNT)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_assigns_id() {
        let repo = StubPaymentRepository::new();
        let mut payment = Payment::new();
        payment.amount = 100;

        repo.save(&mut payment).await.unwrap();

        let id = payment.id.expect("id assigned");
        assert!(id.as_str().starts_with("PAY-"));
        assert_eq!(payment.amount, 100);
    }

    #[tokio::test]
    async fn test_find_by_id_fabricates_record() {
        let repo = StubPaymentRepository::new();

        let payment = repo
            .find_by_id(&PaymentId::new("PAY-123"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(payment.id, Some(PaymentId::new("PAY-123")));
        assert_eq!(payment.amount, 100);
    }

    #[tokio::test]
    async fn test_find_by_id_ignores_saved_state() {
        let repo = StubPaymentRepository::new();
        let mut payment = Payment::new();
        payment.amount = 7;
        repo.save(&mut payment).await.unwrap();

        let found = repo
            .find_by_id(payment.id.as_ref().unwrap())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.amount, 100);
    }
}
