// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! API error types and handling.
//!
//! This module provides the error type returned from handlers and the
//! access gate, with a fixed mapping to HTTP status codes and the JSON
//! body shape `{"title": ..., "detail": ...}` that clients depend on.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use roots_store::StoreError;

use crate::auth::AuthError;

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// ApiError
// =============================================================================

/// API error type with HTTP status code mapping.
///
/// The `reason` fields on the denial variants are for logs only; the
/// response body carries just the title, matching the wire contract.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message.
        message: String,
    },

    /// No credential was presented (401).
    #[error("Unauthorized: {reason}")]
    Unauthorized {
        /// Denial reason (not sent to the client).
        reason: String,
    },

    /// Credential invalid, expired, or identity does not own the resource (403).
    #[error("Forbidden: {reason}")]
    Forbidden {
        /// Denial reason (not sent to the client).
        reason: String,
    },

    /// Resource not found (404).
    #[error("Resource not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// Service unavailable (503).
    #[error("Service unavailable: {message}")]
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (500).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message (for logging, not user-facing).
        message: String,
    },

    /// Store error, mapped per kind.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized {
            reason: reason.into(),
        }
    }

    /// Creates a forbidden error.
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden {
            reason: reason.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Creates a service unavailable error.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(e) => match e {
                StoreError::InvalidId(_) => StatusCode::BAD_REQUEST,
                StoreError::Connect(_) => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Returns the response title for this error.
    pub fn title(&self) -> &'static str {
        match self.status_code() {
            StatusCode::BAD_REQUEST => "Bad Request",
            StatusCode::UNAUTHORIZED => "Unauthorized Access",
            StatusCode::FORBIDDEN => "Forbidden Access",
            StatusCode::NOT_FOUND => "Not Found",
            StatusCode::SERVICE_UNAVAILABLE => "Service Unavailable",
            _ => "Internal Server Error",
        }
    }

    /// Returns the user-facing detail, if any.
    ///
    /// Denials carry no detail (the title is the whole contract) and
    /// server errors never expose internals.
    pub fn detail(&self) -> Option<String> {
        match self {
            ApiError::BadRequest { message } => Some(message.clone()),
            ApiError::NotFound { resource } => Some(format!("{} was not found", resource)),
            ApiError::Store(StoreError::InvalidId(id)) => {
                Some(format!("'{}' is not a valid document id", id))
            }
            _ => None,
        }
    }

    /// Returns `true` if this error should be logged at error level.
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredential => ApiError::unauthorized("no bearer credential presented"),
            AuthError::InvalidCredential { reason } => ApiError::forbidden(reason),
            AuthError::OwnershipMismatch { requested } => {
                ApiError::forbidden(format!("verified identity does not own '{}'", requested))
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::bad_request(format!("Invalid JSON: {}", err))
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_server_error() {
            tracing::error!(error = %self, status = %status, "Server error occurred");
        } else {
            tracing::debug!(error = %self, status = %status, "Request denied");
        }

        let body = ErrorBody {
            title: self.title().to_string(),
            detail: self.detail(),
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Error Body
// =============================================================================

/// JSON body of an error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Short human-readable summary, fixed per status code.
    pub title: String,
    /// Additional detail (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            ApiError::bad_request("invalid").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("no token").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::forbidden("bad token").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::not_found("volunteer").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::internal("crash").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_titles() {
        assert_eq!(ApiError::unauthorized("x").title(), "Unauthorized Access");
        assert_eq!(ApiError::forbidden("x").title(), "Forbidden Access");
        assert_eq!(ApiError::bad_request("x").title(), "Bad Request");
        assert_eq!(ApiError::internal("x").title(), "Internal Server Error");
    }

    #[test]
    fn test_denials_carry_no_detail() {
        assert!(ApiError::unauthorized("reason stays in logs").detail().is_none());
        assert!(ApiError::forbidden("reason stays in logs").detail().is_none());
        assert!(ApiError::internal("internals stay hidden").detail().is_none());
        assert!(ApiError::bad_request("shown to caller").detail().is_some());
    }

    #[test]
    fn test_auth_error_mapping() {
        let err: ApiError = AuthError::MissingCredential.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let err: ApiError = AuthError::invalid("token expired").into();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

        let err: ApiError = AuthError::mismatch("bob@example.com").into();
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_store_error_mapping() {
        let err: ApiError = StoreError::InvalidId("zzz".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err: ApiError = StoreError::connect("refused").into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let err: ApiError = StoreError::query("bad pipeline").into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
