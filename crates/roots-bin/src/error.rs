// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Error types for the ROOTS binary.

use thiserror::Error;

/// Result type alias for roots-bin operations.
pub type BinResult<T> = Result<T, BinError>;

/// Errors that can occur in the ROOTS binary.
#[derive(Debug, Error)]
pub enum BinError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Initialization error.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// Runtime error.
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Health check error.
    #[error("Health check failed: {0}")]
    Health(String),

    /// API error.
    #[error("API error: {0}")]
    Api(#[from] roots_api::ApiError),

    /// Store error.
    #[error("Store error: {0}")]
    Store(#[from] roots_store::StoreError),
}

impl BinError {
    /// Creates a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates an initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::Initialization(msg.into())
    }

    /// Creates a runtime error.
    pub fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    /// Returns the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 1,
            Self::Initialization(_) => 2,
            Self::Runtime(_) => 3,
            Self::Health(_) => 4,
            Self::Api(_) => 5,
            Self::Store(_) => 6,
        }
    }
}

impl From<std::io::Error> for BinError {
    fn from(err: std::io::Error) -> Self {
        Self::Runtime(err.to_string())
    }
}

// =============================================================================
// Error Reporting
// =============================================================================

/// Reports an error with its cause chain.
pub fn report_error(error: &BinError) {
    eprintln!("Error: {}", error);

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("  Caused by: {}", cause);
        source = cause.source();
    }
}

/// Reports an error and exits with the appropriate code.
pub fn report_error_and_exit(error: BinError) -> ! {
    report_error(&error);
    std::process::exit(error.exit_code())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = BinError::config("missing secret");
        assert_eq!(err.to_string(), "Configuration error: missing secret");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(BinError::config("test").exit_code(), 1);
        assert_eq!(BinError::init("test").exit_code(), 2);
        assert_eq!(BinError::runtime("test").exit_code(), 3);
        assert_eq!(BinError::Health("test".to_string()).exit_code(), 4);
    }

    #[test]
    fn test_store_error_conversion() {
        let err: BinError = roots_store::StoreError::configuration("no uri").into();
        assert_eq!(err.exit_code(), 6);
    }
}
