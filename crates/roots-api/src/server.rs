// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! API server implementation.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use roots_store::DocumentStore;

use crate::auth::TokenIssuer;
use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use crate::handlers;
use crate::middleware::AccessGateLayer;
use crate::state::AppState;

// =============================================================================
// ApiServer
// =============================================================================

/// The API server.
///
/// This is the main entry point for creating and running the HTTP server.
pub struct ApiServer {
    state: AppState,
    config: Arc<ServerConfig>,
}

impl ApiServer {
    /// Creates a new API server with the given state.
    pub fn new(state: AppState) -> Self {
        let config = state.config.clone();
        Self { state, config }
    }

    /// Creates the router with all routes and middleware.
    pub fn router(&self) -> Router {
        let cors = create_cors_layer(&self.config);
        let gate = AccessGateLayer::new(self.state.issuer.clone()).with_default_public_paths();

        let middleware_stack = ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                self.config.request_timeout,
            ))
            .layer(cors)
            .layer(gate);

        Router::new()
            // Banner and health endpoints (public)
            .route("/", get(handlers::root))
            .route("/health", get(handlers::health))
            .route("/ready", get(handlers::ready))
            // Credential issuance (public)
            .route("/jwt", post(handlers::issue_token))
            // Activity endpoints (public)
            .route("/activities", get(handlers::list_activities))
            .route("/add-activities", post(handlers::add_activity))
            // Volunteer endpoints
            .route(
                "/registered-activities/{email}",
                get(handlers::registered_activities),
            )
            .route(
                "/volunteer-registration",
                post(handlers::volunteer_registration),
            )
            .route("/remove-volunteer/{id}", delete(handlers::remove_volunteer))
            // Apply middleware and state
            .layer(middleware_stack)
            .with_state(self.state.clone())
    }

    /// Runs the server.
    pub async fn run(self) -> ApiResult<()> {
        let addr = self.config.socket_addr();
        let router = self.router();

        info!("Starting API server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .await
            .map_err(|e| ApiError::internal(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Runs the server with graceful shutdown.
    pub async fn run_with_shutdown(
        self,
        shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> ApiResult<()> {
        let addr = self.config.socket_addr();
        let router = self.router();

        info!("Starting API server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ApiError::internal(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| ApiError::internal(format!("Server error: {}", e)))?;

        info!("API server shutdown complete");

        Ok(())
    }

    /// Returns the server address.
    pub fn addr(&self) -> SocketAddr {
        self.config.socket_addr()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates the CORS layer from configuration.
fn create_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = &config.cors;

    let mut layer = CorsLayer::new().max_age(Duration::from_secs(cors.max_age));

    if cors.allowed_origins.contains(&"*".to_string()) {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<header::HeaderValue> = cors
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer = layer.allow_origin(AllowOrigin::list(origins));
    }

    let methods: Vec<Method> = cors
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    layer = layer.allow_methods(methods);

    layer.allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
}

// =============================================================================
// Server Builder
// =============================================================================

/// Builder for creating the API server.
pub struct ApiServerBuilder {
    state_builder: crate::state::AppStateBuilder,
}

impl ApiServerBuilder {
    /// Creates a new server builder.
    pub fn new() -> Self {
        Self {
            state_builder: AppState::builder(),
        }
    }

    /// Sets the configuration.
    pub fn config(mut self, config: ServerConfig) -> Self {
        self.state_builder = self.state_builder.config(config);
        self
    }

    /// Sets the credential issuer.
    pub fn issuer(mut self, issuer: Arc<TokenIssuer>) -> Self {
        self.state_builder = self.state_builder.issuer(issuer);
        self
    }

    /// Sets the document store.
    pub fn store(mut self, store: Arc<dyn DocumentStore>) -> Self {
        self.state_builder = self.state_builder.store(store);
        self
    }

    /// Builds the server.
    pub fn build(self) -> ApiResult<ApiServer> {
        let state = self.state_builder.build()?;
        Ok(ApiServer::new(state))
    }
}

impl Default for ApiServerBuilder {
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
    fn test_server_builder() {
        let server = ApiServerBuilder::new()
            .config(test_config())
            .store(Arc::new(MemoryStore::new()))
            .build()
            .unwrap();

        assert_eq!(server.addr().port(), 5000);
    }

    #[test]
    fn test_server_builder_requires_secret() {
        let result = ApiServerBuilder::new()
            .store(Arc::new(MemoryStore::new()))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_router_creation() {
        let server = ApiServerBuilder::new()
            .config(test_config())
            .store(Arc::new(MemoryStore::new()))
            .build()
            .unwrap();

        let _router = server.router();
    }

    #[tokio::test]
    async fn test_cors_layer() {
        let config = test_config();
        let _layer = create_cors_layer(&config);
    }
}
