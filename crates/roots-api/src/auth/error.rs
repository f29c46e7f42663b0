// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Denial taxonomy for the access gate.

use thiserror::Error;

/// The three ways a request can be denied before handler logic runs.
///
/// Keeping these as an explicit result type keeps the outcomes distinct
/// and testable without going through the transport layer. Each variant is
/// terminal for the request; nothing is retried.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The request carried no bearer credential at all.
    #[error("no credential presented")]
    MissingCredential,

    /// The credential failed signature or expiry checks.
    #[error("invalid credential: {reason}")]
    InvalidCredential {
        /// Why verification failed (never the raw credential).
        reason: String,
    },

    /// The verified identity does not own the requested resource.
    #[error("verified identity does not own '{requested}'")]
    OwnershipMismatch {
        /// The owner reference taken from the request path.
        requested: String,
    },
}

impl AuthError {
    /// Creates an invalid-credential denial.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidCredential {
            reason: reason.into(),
        }
    }

    /// Creates an ownership-mismatch denial.
    pub fn mismatch(requested: impl Into<String>) -> Self {
        Self::OwnershipMismatch {
            requested: requested.into(),
        }
    }

    /// Returns `true` if the denial means the caller sent no credential.
    pub fn is_missing(&self) -> bool {
        matches!(self, AuthError::MissingCredential)
    }
}

// =============================================================================
// Tests
// =============================================================================
