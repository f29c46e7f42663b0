// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Activity collection handlers.

use axum::{extract::State, response::IntoResponse, Json};
use bson::doc;
use serde_json::Value;

use roots_store::ACTIVITIES;

use crate::error::{ApiError, ApiResult};
use crate::extractors::ValidatedJson;
use crate::response::documents_to_json;
use crate::state::AppState;

// =============================================================================
// List Activities
// =============================================================================

/// GET /activities
///
/// Returns every activity document.
pub async fn list_activities(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let documents = state.store().find(ACTIVITIES, doc! {}).await?;

    Ok(Json(documents_to_json(documents)))
}

// =============================================================================
// Add Activity
// =============================================================================

/// POST /add-activities
///
/// Stores the request body as a new activity document.
///
/// The payload is not validated against a schema; whatever object the
/// client sends is stored as-is.
pub async fn add_activity(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<Value>,
) -> ApiResult<impl IntoResponse> {
    let document = json_object_to_document(payload)?;
    let ack = state.store().insert_one(ACTIVITIES, document).await?;

    tracing::debug!(inserted_id = %ack.inserted_id, "Stored activity");

    Ok(Json(ack))
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Converts a JSON body into a BSON document, rejecting non-objects.
pub(crate) fn json_object_to_document(payload: Value) -> ApiResult<bson::Document> {
    if !payload.is_object() {
        return Err(ApiError::bad_request("Expected a JSON object"));
    }

    bson::to_document(&payload)
        .map_err(|e| ApiError::bad_request(format!("Unsupported document value: {}", e)))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_json_object_to_document() {
        let doc = json_object_to_document(json!({
            "title": "Tree planting",
            "spots": 12,
        }))
        .unwrap();

        assert_eq!(doc.get_str("title").unwrap(), "Tree planting");
    }

    #[test]
    fn test_non_object_payloads_are_rejected() {
        assert!(json_object_to_document(json!("just a string")).is_err());
        assert!(json_object_to_document(json!([1, 2, 3])).is_err());
        assert!(json_object_to_document(json!(null)).is_err());
    }
}
