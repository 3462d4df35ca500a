//! Error types for the summary cache service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Service Error Enum ==
/// Unified error type for the summary cache service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Request body failed shape validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// URL failed the HTTPS/authority check
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Encoded key cannot be reversed to a URL
    #[error("Invalid encoded URL: {0}")]
    Decode(String),

    /// No cached summary for the requested URL
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend I/O failure or corrupted payload
    #[error("Storage error: {0}")]
    Storage(String),

    /// Upstream summarization failure
    #[error("Summarizer error: {0}")]
    Summarizer(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServiceError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServiceError::InvalidUrl(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid URL: {msg}"))
            }
            ServiceError::Decode(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid encoded URL: {msg}"))
            }
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ServiceError::Storage(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            ServiceError::Summarizer(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the summary cache service.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = vec![
            (
                ServiceError::InvalidRequest("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::InvalidUrl("ftp://x".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::Decode("???".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::NotFound("https://example.com".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                ServiceError::Storage("backend down".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ServiceError::Summarizer("upstream 500".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[tokio::test]
    async fn test_error_body_contains_message() {
        let response = ServiceError::Storage("replica offline".to_string()).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["error"].as_str().unwrap().contains("replica offline"));
    }
}
