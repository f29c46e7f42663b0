// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! JWT claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for a credential.
///
/// A credential carries a single identity claim (`sub`, an email-like
/// string accepted as-is at issuance) plus the standard RFC 7519
/// bookkeeping fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the identity the credential asserts.
    pub sub: String,

    /// Expiration time (Unix timestamp).
    pub exp: i64,

    /// Issued at time (Unix timestamp).
    pub iat: i64,

    /// Issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// JWT ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl Claims {
    /// Creates new claims for an identity, expiring `ttl_secs` from now.
    pub fn new(identity: impl Into<String>, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: identity.into(),
            exp: now + ttl_secs,
            iat: now,
            iss: None,
            jti: Some(Uuid::now_v7().to_string()),
        }
    }

    /// Sets the issuer.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.iss = Some(issuer.into());
        self
    }

    /// Returns the identity the credential asserts.
    pub fn identity(&self) -> &str {
        &self.sub
    }

    /// Returns `true` if the credential has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Returns the expiration time as a `DateTime`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Returns the issued-at time as a `DateTime`.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.iat, 0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_creation() {
        let claims = Claims::new("alice@example.com", 3600);

        assert_eq!(claims.identity(), "alice@example.com");
        assert!(!claims.is_expired());
        assert!(claims.jti.is_some());
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_claims_with_issuer() {
        let claims = Claims::new("alice@example.com", 3600).with_issuer("roots");
        assert_eq!(claims.iss, Some("roots".to_string()));
    }

    #[test]
    fn test_claims_expiration() {
        let claims = Claims::new("alice@example.com", 3600);
        assert!(!claims.is_expired());
        assert!(claims.expires_at().is_some());

        let expired = Claims {
            exp: Utc::now().timestamp() - 100,
            ..Claims::new("alice@example.com", 0)
        };
        assert!(expired.is_expired());
    }

    #[test]
    fn test_identity_is_kept_verbatim() {
        // Issuance performs no normalization; casing survives untouched.
        let claims = Claims::new("Alice@Example.COM", 3600);
        assert_eq!(claims.identity(), "Alice@Example.COM");
    }
}
