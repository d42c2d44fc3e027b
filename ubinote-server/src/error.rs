//! Server error types with HTTP status code mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use ubinote_core::Error as CoreError;

/// Server error type wrapping the repository taxonomy and providing HTTP
/// status mapping.
///
/// Status selection looks only at the error kind, never at message text.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Repository/storage layer error
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Request failed boundary validation
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ServerError {
    /// Map error to HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 404 - the one recoverable, expected-in-normal-operation kind
            ServerError::Core(CoreError::NotFound(_)) => StatusCode::NOT_FOUND,

            // 400 - client errors
            ServerError::Core(CoreError::InvalidKey(_)) => StatusCode::BAD_REQUEST,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,

            // 500 - backend/credential/transport failures and the catch-all
            ServerError::Core(CoreError::CredentialsMissing(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServerError::Core(CoreError::Backend(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Core(CoreError::Io(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Core(CoreError::Unexpected(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Create a bad request error
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ServerError::BadRequest(msg.into())
    }
}

/// JSON error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// HTTP status code
    pub status: u16,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = ErrorResponse {
            error: self.to_string(),
            status: status.as_u16(),
        };

        let json = serde_json::to_string(&body).unwrap_or_else(|_| {
            format!(r#"{{"error":"{}","status":{}}}"#, self, status.as_u16())
        });

        (status, [("content-type", "application/json")], json).into_response()
    }
}

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_by_kind() {
        assert_eq!(
            ServerError::Core(CoreError::not_found("k")).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::Core(CoreError::invalid_key("k")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::bad_request("empty title").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::Core(CoreError::backend("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ServerError::Core(CoreError::credentials_missing("no region")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
