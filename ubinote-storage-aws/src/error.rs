//! Error types for the AWS storage backend

use thiserror::Error;

/// Errors from S3 storage operations
#[derive(Debug, Error)]
pub enum AwsStorageError {
    /// I/O or network error
    #[error("I/O error: {0}")]
    Io(String),

    /// Object not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unauthorized - invalid credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Forbidden - insufficient permissions
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Throttled - rate limited or transient server error
    #[error("Throttled: {0}")]
    Throttled(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Missing region configuration
    #[error("Missing AWS region configuration")]
    MissingRegion,

    /// S3 SDK error
    #[error("S3 error: {0}")]
    S3(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl AwsStorageError {
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn throttled(msg: impl Into<String>) -> Self {
        Self::Throttled(msg.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn s3(msg: impl Into<String>) -> Self {
        Self::S3(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Result type for AWS storage operations
pub type Result<T> = std::result::Result<T, AwsStorageError>;

// Convert to the core taxonomy. Misconfiguration folds to CredentialsMissing
// (startup-fatal); everything that isn't not-found or transport becomes an
// opaque backend failure.
impl From<AwsStorageError> for ubinote_core::Error {
    fn from(err: AwsStorageError) -> Self {
        match err {
            AwsStorageError::NotFound(msg) => ubinote_core::Error::not_found(msg),
            AwsStorageError::Io(msg) => ubinote_core::Error::io(msg),
            AwsStorageError::MissingRegion | AwsStorageError::InvalidConfig(_) => {
                ubinote_core::Error::credentials_missing(err.to_string())
            }
            _ => ubinote_core::Error::backend(err.to_string()),
        }
    }
}
