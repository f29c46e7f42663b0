// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Health check handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::response::{ComponentStatus, HealthResponse, ReadinessResponse};
use crate::state::AppState;

// =============================================================================
// Root Banner
// =============================================================================

/// GET /
///
/// Service banner.
pub async fn root() -> &'static str {
    "Radiant Roots Server is Running"
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Simple liveness check. Returns 200 OK if the service is running.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::healthy())
}

// =============================================================================
// Readiness Check
// =============================================================================

/// GET /ready
///
/// Readiness check that verifies the document store is reachable.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let store_status = match state.store().ping().await {
        Ok(()) => ComponentStatus {
            name: "store".to_string(),
            healthy: true,
            message: None,
        },
        Err(e) => ComponentStatus {
            name: "store".to_string(),
            healthy: false,
            message: Some(e.to_string()),
        },
    };

    let ready = store_status.healthy;
    let response = ReadinessResponse {
        ready,
        components: vec![store_status],
    };

    if ready {
        (StatusCode::OK, Json(response))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response))
    }
}

// =============================================================================
// Tests
// =============================================================================
