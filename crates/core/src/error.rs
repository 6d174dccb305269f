// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types shared by every Benchbook crate.

use thiserror::Error;

/// Result type alias using the Benchbook [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the data model, the stores and the transport layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input: non-numeric identifier, blank required field,
    /// out-of-range value, or an operation called with too few arguments.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The targeted record does not exist.
    #[error("Benchmark not found: {0}")]
    NotFound(String),

    /// Underlying persistence failure.
    #[error("Store error: {0}")]
    Store(String),

    /// Client-side request failure or unexpected HTTP status.
    #[error("Network error: {0}")]
    Network(String),

    /// A wire value could not be converted into the in-memory representation.
    #[error("Malformed wire value: {0}")]
    Wire(String),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not-found error for the given identifier.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create a store error from anything printable.
    pub fn store(err: impl std::fmt::Display) -> Self {
        Self::Store(err.to_string())
    }

    /// Create a network error from anything printable.
    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::Network(err.to_string())
    }

    /// Create a wire conversion error.
    pub fn wire(msg: impl Into<String>) -> Self {
        Self::Wire(msg.into())
    }

    /// Whether this error means the target record is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::not_found("42").to_string(),
            "Benchmark not found: 42"
        );
        assert_eq!(
            Error::validation("ID must be a number").to_string(),
            "Validation error: ID must be a number"
        );
        assert_eq!(
            Error::store("connection refused").to_string(),
            "Store error: connection refused"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::not_found("1").is_not_found());
        assert!(!Error::network("timeout").is_not_found());
    }
}
