//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use utoipa::OpenApi;

use payments_types::{AppError, ErrorResponse, HealthResponse, Notifier, PaymentRepository};

use crate::PaymentService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<R: PaymentRepository, N: Notifier> {
    pub service: PaymentService<R, N>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = ErrorResponse {
            error: message,
            code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::healthy())
}

/// Serves the OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Process a payment from a raw request body.
///
/// An empty body counts as a missing request; a body that is not UTF-8 is
/// rejected before reaching the service.
#[tracing::instrument(skip(state, body), fields(body_len = body.len()))]
pub async fn process_payment<R: PaymentRepository, N: Notifier>(
    State(state): State<Arc<AppState<R, N>>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let body = std::str::from_utf8(&body)
        .map_err(|_| AppError::InvalidRequest("Request body must be valid UTF-8".into()))?;
    let request = (!body.is_empty()).then_some(body);
    let status = state.service.process(request).await?;
    Ok(status)
}

/// Get a payment by ID.
#[tracing::instrument(skip(state), fields(payment_id = %id))]
pub async fn get_payment<R: PaymentRepository, N: Notifier>(
    State(state): State<Arc<AppState<R, N>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state.service.find_by_id(&id).await?;
    Ok(payment)
}
