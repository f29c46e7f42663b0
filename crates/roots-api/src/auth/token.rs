// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! JWT credential issuance and verification.

use std::sync::Arc;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::{AuthError, Claims};
use crate::error::{ApiError, ApiResult};

/// Default credential lifetime: 24 hours.
const DEFAULT_TTL_SECS: i64 = 86_400;

// =============================================================================
// TokenConfig
// =============================================================================

/// Configuration for credential signing and verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Secret key for signing credentials.
    #[serde(skip_serializing)]
    pub secret: String,
    /// Credential issuer.
    pub issuer: String,
    /// Credential lifetime in seconds.
    pub ttl_secs: i64,
    /// Clock skew tolerance in seconds.
    pub leeway_secs: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: String::new(), // Must be set by user
            issuer: "roots".to_string(),
            ttl_secs: DEFAULT_TTL_SECS,
            leeway_secs: 60,
        }
    }
}

impl TokenConfig {
    /// Creates a new configuration with the given secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Sets the credential lifetime in seconds.
    pub fn with_ttl_secs(mut self, ttl_secs: i64) -> Self {
        self.ttl_secs = ttl_secs;
        self
    }

    /// Sets the issuer.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Validates the configuration.
    ///
    /// An empty secret is a fatal configuration error: the process must
    /// refuse to start rather than sign with a predictable key.
    pub fn validate(&self) -> ApiResult<()> {
        if self.secret.is_empty() {
            return Err(ApiError::internal("JWT signing secret is not configured"));
        }
        if self.secret.len() < 32 {
            tracing::warn!("JWT signing secret is shorter than recommended (32 bytes)");
        }
        Ok(())
    }
}

// =============================================================================
// TokenIssuer
// =============================================================================

/// Issues and verifies signed credentials.
///
/// The issuer is built once at startup from the process-wide secret and
/// shared read-only by every request. Issuance is a pure signing
/// computation with no side effects; verification checks signature and
/// expiry and nothing else.
#[derive(Clone)]
pub struct TokenIssuer {
    config: Arc<TokenConfig>,
    encoding_key: Arc<EncodingKey>,
    decoding_key: Arc<DecodingKey>,
    validation: Arc<Validation>,
}

impl TokenIssuer {
    /// Creates a new issuer with the given configuration.
    pub fn new(config: TokenConfig) -> ApiResult<Self> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.leeway = config.leeway_secs;
        validation.validate_aud = false;

        Ok(Self {
            config: Arc::new(config),
            encoding_key: Arc::new(encoding_key),
            decoding_key: Arc::new(decoding_key),
            validation: Arc::new(validation),
        })
    }

    /// Issues a signed credential asserting `identity`.
    ///
    /// The identity string is embedded as-is; no format validation is
    /// performed here by design.
    pub fn issue(&self, identity: &str) -> ApiResult<String> {
        let claims = Claims::new(identity, self.config.ttl_secs).with_issuer(&self.config.issuer);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ApiError::internal(format!("Failed to sign credential: {}", e)))
    }

    /// Verifies a credential's signature and expiry.
    ///
    /// Every verification failure maps to [`AuthError::InvalidCredential`];
    /// distinguishing the reasons is a logging concern, not a wire one.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "credential has expired".to_string(),
                    ErrorKind::InvalidSignature => "credential signature is invalid".to_string(),
                    ErrorKind::InvalidToken => "credential format is invalid".to_string(),
                    ErrorKind::InvalidIssuer => "credential issuer is invalid".to_string(),
                    _ => format!("credential verification failed: {}", e),
                };
                AuthError::invalid(reason)
            })
    }

    /// Returns the configured credential lifetime in seconds.
    pub fn ttl_secs(&self) -> i64 {
        self.config.ttl_secs
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("issuer", &self.config.issuer)
            .field("ttl_secs", &self.config.ttl_secs)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TokenConfig {
        TokenConfig::new("test-secret-key-that-is-long-enough-for-testing")
    }

    #[test]
    fn test_empty_secret_is_fatal() {
        let result = TokenIssuer::new(TokenConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let issuer = TokenIssuer::new(test_config()).unwrap();

        let token = issuer.issue("alice@example.com").unwrap();
        let claims = issuer.verify(&token).unwrap();

        assert_eq!(claims.identity(), "alice@example.com");
    }

    #[test]
    fn test_default_ttl_is_24_hours() {
        let issuer = TokenIssuer::new(test_config()).unwrap();
        assert_eq!(issuer.ttl_secs(), 86_400);

        let token = issuer.issue("alice@example.com").unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 86_400);
    }

    #[test]
    fn test_expired_credential_is_denied() {
        // Zero leeway so a just-expired credential fails immediately.
        let mut config = test_config();
        config.leeway_secs = 0;
        let issuer = TokenIssuer::new(config.clone()).unwrap();

        let claims = Claims::new("alice@example.com", -3600).with_issuer(&config.issuer);
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        let result = issuer.verify(&token);
        assert!(matches!(result, Err(AuthError::InvalidCredential { .. })));
    }

    #[test]
    fn test_wrongly_signed_credential_is_denied() {
        let issuer_a = TokenIssuer::new(TokenConfig::new("secret-one-for-testing-purposes")).unwrap();
        let issuer_b = TokenIssuer::new(TokenConfig::new("secret-two-for-testing-purposes")).unwrap();

        let token = issuer_a.issue("alice@example.com").unwrap();
        let result = issuer_b.verify(&token);

        assert!(matches!(result, Err(AuthError::InvalidCredential { .. })));
    }

    #[test]
    fn test_malformed_credential_is_denied() {
        let issuer = TokenIssuer::new(test_config()).unwrap();

        let result = issuer.verify("not.a.credential");
        assert!(matches!(result, Err(AuthError::InvalidCredential { .. })));
    }

    #[test]
    fn test_tampered_payload_is_denied() {
        let issuer = TokenIssuer::new(test_config()).unwrap();

        let token = issuer.issue("alice@example.com").unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        let tampered = format!("{}.tampered.{}", parts[0], parts[2]);

        assert!(issuer.verify(&tampered).is_err());
    }
}
