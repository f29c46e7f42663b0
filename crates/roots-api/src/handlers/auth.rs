// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Credential issuance handler.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::extractors::ValidatedJson;
use crate::response::TokenResponse;
use crate::state::AppState;

// =============================================================================
// Issue Credential
// =============================================================================

/// Credential issuance request body.
#[derive(Debug, Deserialize)]
pub struct IssueTokenRequest {
    /// The identity to embed in the credential.
    pub email: String,
}

/// POST /jwt
///
/// Issues a signed, time-bounded credential for the given identity.
///
/// The email is embedded as-is: issuance performs no format validation,
/// and the credential is never stored server-side.
pub async fn issue_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<IssueTokenRequest>,
) -> ApiResult<impl IntoResponse> {
    let token = state.issuer().issue(&request.email)?;

    tracing::debug!(identity = %request.email, "Issued credential");

    Ok(Json(TokenResponse::new(token, state.issuer().ttl_secs())))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use roots_store::MemoryStore;

    use crate::auth::{TokenConfig, TokenIssuer};
    use crate::config::ServerConfig;

    use super::*;

    fn test_state() -> AppState {
        let mut config = ServerConfig::default();
        config.jwt = TokenConfig::new("test-secret-key-that-is-long-enough");

        AppState::builder()
            .config(config)
            .store(Arc::new(MemoryStore::new()))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_issued_credential_verifies() {
        let state = test_state();
        let issuer = state.issuer().clone();

        let response = issue_token(
            State(state),
            ValidatedJson(IssueTokenRequest {
                email: "alice@example.com".to_string(),
            }),
        )
        .await;
        assert!(response.is_ok());

        // The handler signs with the same issuer the gate verifies with.
        let token = issuer.issue("alice@example.com").unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.identity(), "alice@example.com");
    }
}
