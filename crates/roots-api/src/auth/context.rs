// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Verified-identity request context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Claims;

/// The verified identity attached to a request.
///
/// Built from signature-checked claims by the access gate and carried in
/// request extensions for the duration of one request. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    /// The identity the credential asserted.
    pub identity: String,
    /// Request ID for tracing.
    pub request_id: Uuid,
    /// When the credential was issued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<DateTime<Utc>>,
    /// When the credential expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl AuthContext {
    /// Creates a context from verified claims.
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            identity: claims.sub.clone(),
            request_id: Uuid::now_v7(),
            issued_at: claims.issued_at(),
            expires_at: claims.expires_at(),
        }
    }

    /// Returns `true` if this identity owns the resource denoted by `owner`.
    ///
    /// Comparison is exact byte equality. No case folding or trimming is
    /// performed: a volunteer whose stored email casing differs from the
    /// casing in their credential will be denied. This matches the
    /// documented behavior of the service, intentional or not.
    pub fn owns(&self, owner: &str) -> bool {
        self.identity == owner
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_claims() {
        let claims = Claims::new("alice@example.com", 3600);
        let ctx = AuthContext::from_claims(&claims);

        assert_eq!(ctx.identity, "alice@example.com");
        assert!(ctx.issued_at.is_some());
        assert!(ctx.expires_at.is_some());
    }

    #[test]
    fn test_ownership_is_exact_match() {
        let claims = Claims::new("alice@example.com", 3600);
        let ctx = AuthContext::from_claims(&claims);

        assert!(ctx.owns("alice@example.com"));
        assert!(!ctx.owns("bob@example.com"));
    }

    #[test]
    fn test_ownership_does_not_case_fold() {
        let claims = Claims::new("alice@example.com", 3600);
        let ctx = AuthContext::from_claims(&claims);

        assert!(!ctx.owns("Alice@example.com"));
        assert!(!ctx.owns("alice@EXAMPLE.com"));
    }

    #[test]
    fn test_ownership_does_not_trim() {
        let claims = Claims::new("alice@example.com", 3600);
        let ctx = AuthContext::from_claims(&claims);

        assert!(!ctx.owns(" alice@example.com"));
        assert!(!ctx.owns("alice@example.com "));
    }
}
