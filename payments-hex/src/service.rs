//! Payment Application Service
//!
//! Orchestrates the request pipeline through the repository and notifier ports.
//! Contains NO infrastructure logic - pure business orchestration.

use payments_types::{
    AppError, DEFAULT_PAYMENT_AMOUNT, NOT_FOUND_RESPONSE, Notifier, PROCESSED_RESPONSE, Payment,
    PaymentId, PaymentRepository,
};

use crate::PaymentValidator;

/// Application service for payment operations.
///
/// Generic over `R: PaymentRepository` and `N: Notifier` - the adapters are
/// injected at construction time. This enables:
/// - Swapping repositories or notification channels without code changes
/// - Testing with recording mocks
/// - Compile-time checks for port implementation
pub struct PaymentService<R: PaymentRepository, N: Notifier> {
    repo: R,
    notifier: N,
    validator: PaymentValidator,
}

impl<R: PaymentRepository, N: Notifier> PaymentService<R, N> {
    /// Creates a new payment service from its collaborators.
    pub fn new(repo: R, notifier: N, validator: PaymentValidator) -> Self {
        Self {
            repo,
            notifier,
            validator,
        }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Returns a reference to the underlying notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Runs the request pipeline: validate, save, notify.
    ///
    /// Validation failures return before anything is saved or sent. Save and
    /// notify are not atomic: nothing is rolled back after a save.
    #[tracing::instrument(skip(self, request))]
    pub async fn process(&self, request: Option<&str>) -> Result<String, AppError> {
        self.validator.validate(request)?;

        let mut payment = Payment::new();
        payment.amount = DEFAULT_PAYMENT_AMOUNT;
        self.repo.save(&mut payment).await?;

        let id = payment
            .id
            .as_ref()
            .ok_or_else(|| AppError::Internal("Repository did not assign a payment id".into()))?;

        self.notifier
            .send(&format!("Payment processed: {}", id))
            .await;

        tracing::info!(payment_id = %id, amount = payment.amount, "Payment processed");
        Ok(PROCESSED_RESPONSE.to_string())
    }

    /// Looks up a payment and renders it, or `"Not found"`.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_id(&self, id: &str) -> Result<String, AppError> {
        let payment = self.repo.find_by_id(&PaymentId::from(id)).await?;

        Ok(match payment {
            Some(payment) => payment.to_string(),
            None => NOT_FOUND_RESPONSE.to_string(),
        })
    }
}
