// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Test fixtures for driving the service end to end.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use bson::doc;
use http_body_util::BodyExt;
use serde_json::Value;

use roots_api::{ApiServer, AppState, ServerConfig, TokenConfig, TokenIssuer};
use roots_store::{DocumentStore, MemoryStore, VOLUNTEERS};

/// Signing secret used by every test instance.
pub const TEST_SECRET: &str = "integration-test-secret-key-32-bytes-long";

/// A fully wired test instance: router, store handle, and issuer.
pub struct TestService {
    /// The assembled router.
    pub router: Router,
    /// The memory store behind the router.
    pub store: Arc<MemoryStore>,
    /// The issuer the router verifies against.
    pub issuer: Arc<TokenIssuer>,
}

impl TestService {
    /// Creates a service over an empty store.
    ///
    /// Leeway is zeroed so freshly expired credentials are denied
    /// deterministically.
    pub fn new() -> Self {
        let mut jwt = TokenConfig::new(TEST_SECRET);
        jwt.leeway_secs = 0;

        let config = ServerConfig::default().with_jwt(jwt);
        let store = Arc::new(MemoryStore::new());
        let issuer = Arc::new(TokenIssuer::new(config.jwt.clone()).expect("issuer"));

        let state = AppState::builder()
            .config(config)
            .issuer(issuer.clone())
            .store(store.clone())
            .build()
            .expect("state");

        Self {
            router: ApiServer::new(state).router(),
            store,
            issuer,
        }
    }

    /// Creates a service with two volunteers already registered.
    pub async fn with_seeded_volunteers() -> Self {
        let service = Self::new();

        service
            .store
            .insert_one(
                VOLUNTEERS,
                doc! { "email": "alice@example.com", "activity": "Beach cleanup" },
            )
            .await
            .expect("seed alice");
        service
            .store
            .insert_one(
                VOLUNTEERS,
                doc! { "email": "bob@example.com", "activity": "Tree planting" },
            )
            .await
            .expect("seed bob");

        service
    }

    /// Issues a credential for `identity` with the instance's secret.
    pub fn credential_for(&self, identity: &str) -> String {
        self.issuer.issue(identity).expect("issue credential")
    }
}

impl Default for TestService {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Request Builders
// =============================================================================

/// Builds a GET request, optionally with a bearer credential.
pub fn get(path: &str, credential: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = credential {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).expect("request")
}

/// Builds a POST request with a JSON body.
pub fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

/// Builds a DELETE request.
pub fn delete(path: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(path)
        .body(Body::empty())
        .expect("request")
}

// =============================================================================
// Response Helpers
// =============================================================================

/// Collects a response body into JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("JSON body")
}

/// Collects a response body into a string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("UTF-8 body")
}
