//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned by `POST /api/payments` on success.
pub const PROCESSED_RESPONSE: &str = "OK";

/// Body returned by `GET /api/payments/{id}` when nothing matches.
pub const NOT_FOUND_RESPONSE: &str = "Not found";

/// Error body returned for any non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "Request cannot be empty")]
    pub error: String,
    /// HTTP status code
    #[schema(example = 400)]
    pub code: u16,
}

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".into(),
        }
    }
}
