// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Document store traits and interfaces.
//!
//! This module defines the seam between the HTTP layer and the underlying
//! document store. Handlers depend only on [`DocumentStore`]; whether the
//! documents live in MongoDB or in process memory is an implementation
//! detail chosen at startup.

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Bson, Document};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Collection holding activity documents.
pub const ACTIVITIES: &str = "Activities";

/// Collection holding volunteer registrations.
pub const VOLUNTEERS: &str = "Volunteers";

// =============================================================================
// Acknowledgements
// =============================================================================

/// Acknowledgement returned by [`DocumentStore::insert_one`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertAck {
    /// Whether the write was acknowledged by the store.
    pub acknowledged: bool,
    /// The id assigned to the inserted document.
    pub inserted_id: String,
}

impl InsertAck {
    /// Creates an acknowledged insert result from a raw BSON id.
    pub fn acknowledged(id: &Bson) -> Self {
        let inserted_id = match id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Acknowledgement returned by [`DocumentStore::delete_one`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAck {
    /// Whether the delete was acknowledged by the store.
    pub acknowledged: bool,
    /// Number of documents removed (0 or 1).
    pub deleted_count: u64,
}

impl DeleteAck {
    /// Creates an acknowledged delete result.
    pub fn acknowledged(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

// =============================================================================
// DocumentStore
// =============================================================================

/// The document store interface consumed by the HTTP layer.
///
/// Filters are plain BSON documents matched by field equality; documents
/// are stored as-is without schema validation.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns all documents in `collection` matching `filter`.
    ///
    /// An empty filter matches every document.
    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>>;

    /// Inserts a single document into `collection`.
    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<InsertAck>;

    /// Deletes the first document in `collection` matching `filter`.
    async fn delete_one(&self, collection: &str, filter: Document) -> StoreResult<DeleteAck>;

    /// Verifies the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parses a path segment into a document [`ObjectId`].
///
/// The hex form is what clients receive in insert acknowledgements and is
/// the only accepted id format.
pub fn parse_object_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_ack_from_object_id() {
        let oid = ObjectId::new();
        let ack = InsertAck::acknowledged(&Bson::ObjectId(oid));
        assert!(ack.acknowledged);
        assert_eq!(ack.inserted_id, oid.to_hex());
    }

    #[test]
    fn test_insert_ack_from_other_bson() {
        let ack = InsertAck::acknowledged(&Bson::String("custom-id".to_string()));
        assert_eq!(ack.inserted_id, "\"custom-id\"");
    }

    #[test]
    fn test_parse_object_id() {
        let oid = ObjectId::new();
        assert_eq!(parse_object_id(&oid.to_hex()).unwrap(), oid);
        assert!(matches!(
            parse_object_id("not-a-hex-id"),
            Err(StoreError::InvalidId(_))
        ));
    }
}
