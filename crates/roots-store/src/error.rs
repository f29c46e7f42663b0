// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Error types for the store layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when talking to the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store configuration is missing or unusable.
    #[error("Store configuration error: {0}")]
    Configuration(String),

    /// The store could not be reached.
    #[error("Store connection failed: {0}")]
    Connect(String),

    /// A query or write against the store failed.
    #[error("Store query failed: {0}")]
    Query(String),

    /// A path or filter value could not be parsed as a document id.
    #[error("Invalid document id: {0}")]
    InvalidId(String),

    /// A document could not be converted between JSON and BSON.
    #[error("Document serialization failed: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Creates a configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates a connection error.
    pub fn connect(msg: impl Into<String>) -> Self {
        Self::Connect(msg.into())
    }

    /// Creates a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Returns `true` if the error means the store itself is unavailable,
    /// as opposed to a bad request against a healthy store.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Connect(_))
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::ErrorKind;

        match err.kind.as_ref() {
            ErrorKind::ServerSelection { message, .. } => StoreError::Connect(message.clone()),
            ErrorKind::Io(io) => StoreError::Connect(io.to_string()),
            ErrorKind::Authentication { message, .. } => StoreError::Connect(message.clone()),
            _ => StoreError::Query(err.to_string()),
        }
    }
}

impl From<bson::ser::Error> for StoreError {
    fn from(err: bson::ser::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<bson::de::Error> for StoreError {
    fn from(err: bson::de::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::configuration("no credentials");
        assert_eq!(err.to_string(), "Store configuration error: no credentials");

        let err = StoreError::InvalidId("zzz".to_string());
        assert_eq!(err.to_string(), "Invalid document id: zzz");
    }

    #[test]
    fn test_is_unavailable() {
        assert!(StoreError::connect("refused").is_unavailable());
        assert!(!StoreError::query("bad filter").is_unavailable());
        assert!(!StoreError::configuration("missing uri").is_unavailable());
    }
}
