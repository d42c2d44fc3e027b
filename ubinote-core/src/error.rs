//! Error types for ubinote-core

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
///
/// Every backend failure is classified into one of these variants at the
/// call site, with the original backend message preserved for diagnostics.
/// Classification is structural (error variants, HTTP status codes) — never
/// by matching message text.
#[derive(Error, Debug)]
pub enum Error {
    /// Target key absent — expected in normal operation
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend client misconfigured (missing region/credentials).
    /// Fatal at startup, not per-call.
    #[error("Credentials missing: {0}")]
    CredentialsMissing(String),

    /// Any other backend-reported failure (permission, rate-limit,
    /// malformed request). Opaque to callers, never retried.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Malformed key rejected before any backend call
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Transport-level failure (network, timeout)
    #[error("I/O error: {0}")]
    Io(String),

    /// Anything not classified above — caught and wrapped, never allowed
    /// to crash the caller
    #[error("{0}")]
    Unexpected(String),
}

impl Error {
    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// Create a credentials missing error
    pub fn credentials_missing(msg: impl Into<String>) -> Self {
        Error::CredentialsMissing(msg.into())
    }

    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Error::Backend(msg.into())
    }

    /// Create an invalid key error
    pub fn invalid_key(msg: impl Into<String>) -> Self {
        Error::InvalidKey(msg.into())
    }

    /// Create an I/O error
    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// Create an unexpected error
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Error::Unexpected(msg.into())
    }

    /// Whether this error is the not-found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
