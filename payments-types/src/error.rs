//! Error types for the payment service.

use crate::domain::NotificationChannel;

/// Domain-level errors (business rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// Notifier wiring errors.
///
/// Delivery itself has no error path; this only covers selecting a channel
/// that has no adapter yet.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification channel not enabled: {0}")]
    NotEnabled(NotificationChannel),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidRequest(msg) => AppError::InvalidRequest(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Domain(e) => e.into(),
            RepoError::Conflict(e) => AppError::Internal(e),
        }
    }
}
