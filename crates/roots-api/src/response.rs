// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! API response types.

use bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Token Response
// =============================================================================

/// Credential issuance response.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed credential.
    pub token: String,
    /// Token type (always "Bearer").
    pub token_type: String,
    /// Lifetime in seconds.
    pub expires_in: i64,
}

impl TokenResponse {
    /// Creates a new token response.
    pub fn new(token: String, expires_in: i64) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

// =============================================================================
// Health Responses
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Version string.
    pub version: String,
}

impl HealthResponse {
    /// Creates a healthy response.
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
            version: crate::VERSION.to_string(),
        }
    }
}

/// Readiness check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Whether the service is ready.
    pub ready: bool,
    /// Component statuses.
    pub components: Vec<ComponentStatus>,
}

/// Status of a system component.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComponentStatus {
    /// Component name.
    pub name: String,
    /// Whether the component is healthy.
    pub healthy: bool,
    /// Optional message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// Document Rendering
// =============================================================================

/// Converts stored documents into the JSON shape clients expect.
///
/// ObjectIds render as their hex form and datetimes as RFC 3339 strings,
/// rather than the extended-JSON wrappers the raw BSON serializer emits.
pub fn documents_to_json(documents: Vec<Document>) -> Vec<Value> {
    documents
        .into_iter()
        .map(|doc| bson_to_json(Bson::Document(doc)))
        .collect()
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => Value::String(
            dt.try_to_rfc3339_string()
                .unwrap_or_else(|_| dt.timestamp_millis().to_string()),
        ),
        Bson::Document(doc) => Value::Object(
            doc.into_iter()
                .map(|(key, value)| (key, bson_to_json(value)))
                .collect(),
        ),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use bson::doc;
    use bson::oid::ObjectId;

    use super::*;

    #[test]
    fn test_token_response() {
        let response = TokenResponse::new("abc.def.ghi".to_string(), 86_400);
        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 86_400);
    }

    #[test]
    fn test_health_response() {
        let response = HealthResponse::healthy();
        assert_eq!(response.status, "ok");
    }

    #[test]
    fn test_documents_render_object_ids_as_hex() {
        let oid = ObjectId::new();
        let docs = vec![doc! { "_id": oid, "email": "alice@example.com" }];

        let json = documents_to_json(docs);
        assert_eq!(json.len(), 1);
        assert_eq!(json[0]["_id"], Value::String(oid.to_hex()));
        assert_eq!(json[0]["email"], Value::String("alice@example.com".to_string()));
    }

    #[test]
    fn test_documents_render_nested_values() {
        let docs = vec![doc! {
            "title": "Tree planting",
            "tags": ["outdoor", "weekend"],
            "meta": { "spots": 12_i32 },
        }];

        let json = documents_to_json(docs);
        assert_eq!(json[0]["tags"][1], Value::String("weekend".to_string()));
        assert_eq!(json[0]["meta"]["spots"], serde_json::json!(12));
    }
}
