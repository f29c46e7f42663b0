// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Volunteer collection handlers.
//!
//! The per-volunteer records route is the one protected endpoint: the
//! access gate verifies the credential, and the handler performs the
//! ownership check before touching the store.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use bson::doc;
use serde_json::Value;

use roots_store::{parse_object_id, VOLUNTEERS};

use crate::auth::AuthError;
use crate::error::ApiResult;
use crate::extractors::{Identity, OwnerPath, ValidatedJson};
use crate::response::documents_to_json;
use crate::state::AppState;

use super::activities::json_object_to_document;

// =============================================================================
// Registered Activities (protected)
// =============================================================================

/// GET /registered-activities/{email}
///
/// Returns the volunteer registrations owned by `{email}`.
///
/// Requires a verified credential whose identity equals the path owner
/// exactly (byte equality, no normalization). On mismatch the store query
/// is never executed.
pub async fn registered_activities(
    State(state): State<AppState>,
    OwnerPath(owner): OwnerPath,
    Identity(identity): Identity,
) -> ApiResult<impl IntoResponse> {
    if !identity.owns(&owner) {
        return Err(AuthError::mismatch(owner).into());
    }

    let documents = state
        .store()
        .find(VOLUNTEERS, doc! { "email": &owner })
        .await?;

    Ok(Json(documents_to_json(documents)))
}

// =============================================================================
// Volunteer Registration
// =============================================================================

/// POST /volunteer-registration
///
/// Stores the request body as a new volunteer registration.
pub async fn volunteer_registration(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<Value>,
) -> ApiResult<impl IntoResponse> {
    let document = json_object_to_document(payload)?;
    let ack = state.store().insert_one(VOLUNTEERS, document).await?;

    tracing::debug!(inserted_id = %ack.inserted_id, "Stored volunteer registration");

    Ok(Json(ack))
}

// =============================================================================
// Remove Volunteer
// =============================================================================

/// DELETE /remove-volunteer/{id}
///
/// Deletes a volunteer registration by document id.
pub async fn remove_volunteer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let oid = parse_object_id(&id)?;
    let ack = state
        .store()
        .delete_one(VOLUNTEERS, doc! { "_id": oid })
        .await?;

    tracing::debug!(id = %id, deleted = ack.deleted_count, "Removed volunteer registration");

    Ok(Json(ack))
}

// =============================================================================
// Tests
// =============================================================================
