//! # Payments Client SDK
//!
//! A typed Rust client for the Payments API.

use payments_types::{ErrorResponse, HealthResponse};
use reqwest::{Client, Url};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Payments API client.
pub struct PaymentsClient {
    base_url: String,
    http: Client,
}

impl PaymentsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(self.endpoint(&["health"])?)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Ok(false);
        }
        let body: HealthResponse = serde_json::from_str(&resp.text().await?)?;
        Ok(body.status == "healthy")
    }

    /// Submits a raw payment request. Returns the service status (`"OK"`).
    pub async fn process_payment(&self, request: &str) -> Result<String, ClientError> {
        let resp = self
            .http
            .post(self.endpoint(&["api", "payments"])?)
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(request.to_string())
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Looks up a payment. Returns the formatted record or `"Not found"`.
    pub async fn get_payment(&self, id: &str) -> Result<String, ClientError> {
        let resp = self
            .http
            .get(self.endpoint(&["api", "payments", id])?)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Appends path segments to the base URL, percent-encoding each one so
    /// ids containing `/`, `?` or `#` stay a single segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn handle_response(&self, resp: reqwest::Response) -> Result<String, ClientError> {
        let status = resp.status();
        if status.is_success() {
            Ok(resp.text().await?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(api_error(status.as_u16(), body))
        }
    }
}

/// Builds an `Api` error, preferring the JSON `error` field over the raw body.
fn api_error(status: u16, body: String) -> ClientError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error)
        .unwrap_or(body);
    ClientError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PaymentsClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = PaymentsClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_endpoint_encodes_each_segment() {
        let client = PaymentsClient::new("http://localhost:3000");
        let url = client.endpoint(&["api", "payments", "a/b?c#d"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/payments/a%2Fb%3Fc%23d"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = PaymentsClient::new("http://localhost:3000/gateway/");
        let url = client.endpoint(&["health"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/gateway/health");
    }

    #[test]
    fn test_endpoint_rejects_invalid_base() {
        let client = PaymentsClient::new("not a url");
        assert!(matches!(
            client.endpoint(&["health"]),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_api_error_extracts_json_message() {
        let err = api_error(400, r#"{"error":"Request cannot be empty","code":400}"#.into());
        assert!(matches!(
            err,
            ClientError::Api { status: 400, ref message } if message == "Request cannot be empty"
        ));
    }

    #[test]
    fn test_api_error_falls_back_to_raw_body() {
        let err = api_error(502, "Bad Gateway".into());
        assert_eq!(err.to_string(), "API error: 502 - Bad Gateway");
    }
}
