//! Payment domain model.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Amount assigned to every payment created by the pipeline.
pub const DEFAULT_PAYMENT_AMOUNT: i64 = 100;

/// Last millisecond value handed out by [`PaymentId::generate`].
static LAST_ISSUED_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Opaque identifier for a Payment.
///
/// Generated ids look like `PAY-<unix-millis>`, but callers must not rely on
/// the shape: ids coming in from lookups are accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PaymentId(String);

impl PaymentId {
    /// Generates a new time-based id.
    ///
    /// Monotonic per process: when the clock has not moved past the last
    /// issued value the next id takes `last + 1`, so no two saves share an id.
    pub fn generate() -> Self {
        let now = Utc::now().timestamp_millis();
        let previous = match LAST_ISSUED_MILLIS.fetch_update(
            Ordering::AcqRel,
            Ordering::Acquire,
            |last| Some(now.max(last + 1)),
        ) {
            Ok(prev) | Err(prev) => prev,
        };
        Self(format!("PAY-{}", now.max(previous + 1)))
    }

    /// Wraps an existing id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PaymentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A payment record.
///
/// Built empty by the service, given its amount before the save, and handed
/// an id by the repository during the save. Nothing changes it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    /// Assigned by the repository; `None` until saved
    #[schema(value_type = Option<String>, example = "PAY-1718000000000")]
    pub id: Option<PaymentId>,
    /// Amount in smallest currency unit
    #[schema(example = 100)]
    pub amount: i64,
}

impl Payment {
    /// Creates an unsaved payment with no id and zero amount.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a payment that already carries an id.
    pub fn with_id(id: PaymentId, amount: i64) -> Self {
        Self {
            id: Some(id),
            amount,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }
}

/// Renders `Payment{id='<id>', amount=<amount>}`; an unsaved id renders as `null`.
impl std::fmt::Display for Payment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.id {
            Some(id) => write!(f, "Payment{{id='{}', amount={}}}", id, self.amount),
            None => write!(f, "Payment{{id='null', amount={}}}", self.amount),
        }
    }
}
