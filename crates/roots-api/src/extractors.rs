// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Custom extractors for API handlers.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::auth::{AuthContext, AuthError};
use crate::error::ApiError;

// =============================================================================
// Identity Extractor
// =============================================================================

/// Extractor for the verified identity on protected routes.
///
/// Pulls the [`AuthContext`] the access gate attached to the request.
/// Rejects with 401 if the gate did not run (a protected handler mounted
/// outside the gate is a wiring bug, surfaced as a missing credential).
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(Identity(ctx): Identity) -> impl IntoResponse {
///     format!("Hello, {}", ctx.identity)
/// }
/// ```
pub struct Identity(pub AuthContext);

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(Identity)
            .ok_or_else(|| ApiError::from(AuthError::MissingCredential))
    }
}

// =============================================================================
// Validated JSON Extractor
// =============================================================================

/// Extractor for JSON payloads.
///
/// Wraps axum's `Json` so malformed input maps into the service's error
/// body shape instead of axum's default rejection.
pub struct ValidatedJson<T>(pub T);

impl<S, T> axum::extract::FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(
        req: axum::http::Request<axum::body::Body>,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e)))?;

        Ok(ValidatedJson(value))
    }
}

// =============================================================================
// Owner Path Extractor
// =============================================================================

/// Extractor for the resource-owner reference in the request path.
///
/// The owner is an email-like string taken verbatim from the path; it is
/// compared against the verified identity without normalization.
pub struct OwnerPath(pub String);

impl<S> FromRequestParts<S> for OwnerPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(owner) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid owner path: {}", e)))?;

        Ok(OwnerPath(owner))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;

    use crate::auth::Claims;

    use super::*;

    #[tokio::test]
    async fn test_identity_requires_gate() {
        let req = Request::builder().uri("/test").body(Body::empty()).unwrap();
        let (mut parts, _) = req.into_parts();

        let result = Identity::from_request_parts(&mut parts, &()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_identity_extracts_context() {
        let claims = Claims::new("alice@example.com", 3600);
        let ctx = AuthContext::from_claims(&claims);

        let mut req = Request::builder().uri("/test").body(Body::empty()).unwrap();
        req.extensions_mut().insert(ctx);
        let (mut parts, _) = req.into_parts();

        let Identity(extracted) = Identity::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(extracted.identity, "alice@example.com");
    }
}
