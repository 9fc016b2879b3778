//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use payments_types::{ErrorResponse, HealthResponse, Payment};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
async fn health() {}

/// Process a payment request
///
/// The body is an opaque request string. Any non-empty body is accepted.
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "payments",
    request_body(content = String, content_type = "text/plain", example = json!("buy widget")),
    responses(
        (status = 200, description = "Payment processed", body = String, content_type = "text/plain", example = json!("OK")),
        (status = 400, description = "Request missing or empty", body = ErrorResponse),
        (status = 500, description = "Payment could not be stored", body = ErrorResponse)
    )
)]
async fn process_payment() {}

/// Get a payment by ID
#[utoipa::path(
    get,
    path = "/api/payments/{id}",
    tag = "payments",
    params(
        ("id" = String, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Formatted payment record, or `Not found`", body = String, content_type = "text/plain", example = json!("Payment{id='PAY-123', amount=100}")),
        (status = 500, description = "Lookup failed", body = ErrorResponse)
    )
)]
async fn get_payment() {}

/// OpenAPI documentation for the Payments API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payments Service API",
        version = "1.0.0",
        description = "Minimal payment pipeline: validate the request, store a payment record, send a notification.",
        license(name = "MIT"),
    ),
    paths(health, process_payment, get_payment),
    components(schemas(Payment, ErrorResponse, HealthResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment processing and lookup"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_payment_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/payments"));
        assert!(doc.paths.paths.contains_key("/api/payments/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
