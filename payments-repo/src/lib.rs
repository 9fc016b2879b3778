//! # Payments Repository
//!
//! Concrete outbound adapters for the payments service.
//! This crate provides the repositories that implement the `PaymentRepository`
//! port and the notifiers that implement the `Notifier` port.

use async_trait::async_trait;
use payments_types::{Payment, PaymentId, PaymentRepository, RepoError};

pub mod memory;
pub mod notify;
pub mod stub;


pub use memory::InMemoryPaymentRepository;
pub use notify::{EmailNotifier, build_notifier};
pub use stub::StubPaymentRepository;

/// Which repository adapter backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryMode {
    /// Stateless: lookups fabricate a record for any id.
    #[default]
    Stub,
    /// Map-backed: lookups only find what was saved.
    InMemory,
}

impl std::fmt::Display for RepositoryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryMode::Stub => write!(f, "stub"),
            RepositoryMode::InMemory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for RepositoryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stub" => Ok(RepositoryMode::Stub),
            "memory" | "in-memory" => Ok(RepositoryMode::InMemory),
            other => Err(format!(
                "Unknown repository mode: {}. Supported: stub, memory",
                other
            )),
        }
    }
}

/// Unified repository wrapper over the available adapters.
pub enum Repo {
    Stub(StubPaymentRepository),
    InMemory(InMemoryPaymentRepository),
}

/// Build a repository for the given mode.
///
/// # Examples
///
/// ```
/// use payments_repo::{RepositoryMode, build_repo};
///
/// let repo = build_repo(RepositoryMode::InMemory);
/// assert!(matches!(repo, payments_repo::Repo::InMemory(_)));
/// ```
pub fn build_repo(mode: RepositoryMode) -> Repo {
    tracing::info!(%mode, "Building payment repository");
    match mode {
        RepositoryMode::Stub => Repo::Stub(StubPaymentRepository::new()),
        RepositoryMode::InMemory => Repo::InMemory(InMemoryPaymentRepository::new()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Implement PaymentRepository for Repo (delegation)
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for Repo {
    async fn save(&self, payment: &mut Payment) -> Result<(), RepoError> {
        match self {
            Repo::Stub(inner) => inner.save(payment).await,
            Repo::InMemory(inner) => inner.save(payment).await,
        }
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, RepoError> {
        match self {
            Repo::Stub(inner) => inner.find_by_id(id).await,
            Repo::InMemory(inner) => inner.find_by_id(id).await,
        }
    }
}
