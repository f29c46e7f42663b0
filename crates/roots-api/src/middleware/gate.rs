// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Access-gate middleware.
//!
//! A three-step linear gate in front of protected handlers:
//!
//! 1. Presence check: no bearer credential at all → 401.
//! 2. Signature/expiry check: invalid or expired credential → 403.
//! 3. Success: attach the verified identity to the request and continue.
//!
//! The gate holds no mutable state; the issuer is shared read-only. The
//! raw credential is never logged.

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    body::Body,
    http::{header, Request},
    response::{IntoResponse, Response},
};
use tower::{Layer, Service};

use crate::auth::{AuthContext, AuthError, TokenIssuer};
use crate::error::ApiError;

// =============================================================================
// AccessGateLayer
// =============================================================================

/// Layer wrapping services with the access gate.
#[derive(Clone)]
pub struct AccessGateLayer {
    issuer: Arc<TokenIssuer>,
    public_paths: Arc<HashSet<String>>,
}

impl AccessGateLayer {
    /// Creates a new gate layer.
    pub fn new(issuer: Arc<TokenIssuer>) -> Self {
        Self {
            issuer,
            public_paths: Arc::new(HashSet::new()),
        }
    }

    /// Sets the paths that bypass the gate.
    ///
    /// A trailing `*` matches any path with that prefix.
    pub fn with_public_paths(mut self, paths: Vec<String>) -> Self {
        self.public_paths = Arc::new(paths.into_iter().collect());
        self
    }

    /// Configures the service's default public surface: everything except
    /// the per-volunteer records route.
    pub fn with_default_public_paths(self) -> Self {
        self.with_public_paths(vec![
            "/".to_string(),
            "/health".to_string(),
            "/ready".to_string(),
            "/jwt".to_string(),
            "/activities".to_string(),
            "/add-activities".to_string(),
            "/volunteer-registration".to_string(),
            "/remove-volunteer/*".to_string(),
        ])
    }
}

impl<S> Layer<S> for AccessGateLayer {
    type Service = AccessGate<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AccessGate {
            inner,
            issuer: self.issuer.clone(),
            public_paths: self.public_paths.clone(),
        }
    }
}

// =============================================================================
// AccessGate
// =============================================================================

/// Middleware performing credential verification.
#[derive(Clone)]
pub struct AccessGate<S> {
    inner: S,
    issuer: Arc<TokenIssuer>,
    public_paths: Arc<HashSet<String>>,
}

impl<S> AccessGate<S> {
    /// Checks if a path bypasses the gate.
    fn is_public_path(&self, path: &str) -> bool {
        if self.public_paths.contains(path) {
            return true;
        }

        // Prefix matches for paths with parameters
        for public_path in self.public_paths.iter() {
            if public_path.ends_with('*') {
                let prefix = &public_path[..public_path.len() - 1];
                if path.starts_with(prefix) {
                    return true;
                }
            }
        }

        false
    }
}

impl<S> Service<Request<Body>> for AccessGate<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let issuer = self.issuer.clone();
        let is_public = self.is_public_path(req.uri().path());
        let mut inner = self.inner.clone();

        Box::pin(async move {
            if is_public {
                return inner.call(req).await;
            }

            // Step 1: presence check, distinct from an invalid credential
            let Some(token) = extract_bearer_token(&req) else {
                tracing::debug!("No bearer credential presented");
                return Ok(ApiError::from(AuthError::MissingCredential).into_response());
            };

            // Step 2: signature and expiry
            let claims = match issuer.verify(&token) {
                Ok(claims) => claims,
                Err(e) => {
                    tracing::debug!(error = %e, "Credential verification failed");
                    return Ok(ApiError::from(e).into_response());
                }
            };

            // Step 3: attach the verified identity and continue
            req.extensions_mut().insert(AuthContext::from_claims(&claims));

            inner.call(req).await
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token<B>(req: &Request<B>) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer ").map(|s| s.to_string()))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use axum::http::{HeaderValue, StatusCode};

    use crate::auth::TokenConfig;

    use super::*;

    fn test_issuer() -> Arc<TokenIssuer> {
        Arc::new(
            TokenIssuer::new(TokenConfig::new("test-secret-key-that-is-long-enough")).unwrap(),
        )
    }

    macro_rules! gate_service {
        ($layer:expr) => {
            $layer.layer(tower::service_fn(|_req: Request<Body>| async {
                Ok::<_, std::convert::Infallible>(StatusCode::OK.into_response())
            }))
        };
    }

    #[test]
    fn test_extract_bearer_token() {
        let mut req = Request::builder().uri("/test").body(Body::empty()).unwrap();

        // No header
        assert!(extract_bearer_token(&req).is_none());

        // Wrong scheme
        req.headers_mut()
            .insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert!(extract_bearer_token(&req).is_none());

        // Valid bearer token
        req.headers_mut().insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer credential123"),
        );
        assert_eq!(
            extract_bearer_token(&req),
            Some("credential123".to_string())
        );
    }

    #[test]
    fn test_public_paths() {
        let layer = AccessGateLayer::new(test_issuer()).with_default_public_paths();
        let gate = gate_service!(layer);

        assert!(gate.is_public_path("/"));
        assert!(gate.is_public_path("/health"));
        assert!(gate.is_public_path("/activities"));
        assert!(gate.is_public_path("/jwt"));
        assert!(gate.is_public_path("/remove-volunteer/65f0aa11bb22cc33dd44ee55"));
        assert!(!gate.is_public_path("/registered-activities/alice@example.com"));
    }

    #[tokio::test]
    async fn test_gate_denies_missing_credential_with_401() {
        let layer = AccessGateLayer::new(test_issuer());
        let mut gate = gate_service!(layer);

        let req = Request::builder()
            .uri("/registered-activities/alice@example.com")
            .body(Body::empty())
            .unwrap();

        let resp = gate.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_gate_denies_invalid_credential_with_403() {
        let layer = AccessGateLayer::new(test_issuer());
        let mut gate = gate_service!(layer);

        let req = Request::builder()
            .uri("/registered-activities/alice@example.com")
            .header(header::AUTHORIZATION, "Bearer not.a.credential")
            .body(Body::empty())
            .unwrap();

        let resp = gate.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_gate_admits_valid_credential() {
        let issuer = test_issuer();
        let token = issuer.issue("alice@example.com").unwrap();

        let layer = AccessGateLayer::new(issuer);
        let mut gate = gate_service!(layer);

        let req = Request::builder()
            .uri("/registered-activities/alice@example.com")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let resp = gate.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
