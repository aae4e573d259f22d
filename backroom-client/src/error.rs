//! Client error types

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Client error type
///
/// Every variant renders to a display-ready message; the screen layer
/// shows `err.to_string()` verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not complete (connect, timeout, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the backend
    #[error("{message}")]
    Remote {
        status: StatusCode,
        /// Message from the response body's `error` field, or a generic
        /// fallback when the body is absent or unparseable
        message: String,
    },
}

impl ApiError {
    /// Build a remote rejection from a status and raw response body.
    pub(crate) fn remote(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| format!("request failed with status {status}"));
        Self::Remote { status, message }
    }
}

/// Error payload shape used by the backend on non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Result type for client operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_uses_error_field_from_body() {
        let err = ApiError::remote(StatusCode::BAD_REQUEST, r#"{"error":"invalid name"}"#);
        assert_eq!(err.to_string(), "invalid name");
    }

    #[test]
    fn remote_falls_back_on_unparseable_body() {
        let err = ApiError::remote(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(err.to_string(), "request failed with status 502 Bad Gateway");

        let err = ApiError::remote(StatusCode::NOT_FOUND, "");
        assert!(err.to_string().contains("404"));
    }
}
