// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Application state shared across handlers.

use std::sync::Arc;

use roots_store::DocumentStore;

use crate::auth::TokenIssuer;
use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};

// =============================================================================
// AppState
// =============================================================================

/// Application state shared across all handlers.
///
/// Constructed once at startup and read-only afterwards: the credential
/// issuer and the store handle are the only process-wide resources, and
/// both are shared behind `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Credential issuer/verifier.
    pub issuer: Arc<TokenIssuer>,
    /// Document store handle.
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Creates a new app state builder.
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new()
    }

    /// Returns the credential issuer.
    pub fn issuer(&self) -> &Arc<TokenIssuer> {
        &self.issuer
    }

    /// Returns the document store.
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }
}

// =============================================================================
// AppStateBuilder
// =============================================================================

/// Builder for constructing [`AppState`].
pub struct AppStateBuilder {
    config: Option<ServerConfig>,
    issuer: Option<Arc<TokenIssuer>>,
    store: Option<Arc<dyn DocumentStore>>,
}

impl AppStateBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            issuer: None,
            store: None,
        }
    }

    /// Sets the configuration.
    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the credential issuer.
    pub fn issuer(mut self, issuer: Arc<TokenIssuer>) -> Self {
        self.issuer = Some(issuer);
        self
    }

    /// Sets the document store.
    pub fn store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the state.
    ///
    /// The issuer is derived from the configuration when not supplied
    /// explicitly; a store is always required.
    pub fn build(self) -> ApiResult<AppState> {
        let config = self.config.unwrap_or_default();

        let issuer = match self.issuer {
            Some(issuer) => issuer,
            None => Arc::new(TokenIssuer::new(config.jwt.clone())?),
        };

        let store = self
            .store
            .ok_or_else(|| ApiError::internal("Document store is not configured"))?;

        Ok(AppState {
            config: Arc::new(config),
            issuer,
            store,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use roots_store::MemoryStore;

    use crate::auth::TokenConfig;

    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig::default().with_jwt(TokenConfig::new("test-secret-key-that-is-long-enough"))
    }

    #[test]
    fn test_state_builder() {
        let state = AppState::builder()
            .config(test_config())
            .store(Arc::new(MemoryStore::new()))
            .build()
            .unwrap();

        assert_eq!(state.issuer().ttl_secs(), 86_400);
    }

    #[test]
    fn test_state_builder_requires_store() {
        let result = AppState::builder().config(test_config()).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_state_builder_requires_secret() {
        // Default config has no signing secret; building the issuer fails.
        let result = AppState::builder()
            .store(Arc::new(MemoryStore::new()))
            .build();
        assert!(result.is_err());
    }
}
