// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! In-memory document store for testing.
//!
//! This module provides a thread-safe, in-memory implementation of
//! [`DocumentStore`], intended for tests and local development where a real
//! MongoDB deployment is not available. Documents are grouped per
//! collection and matched by top-level field equality, which covers every
//! filter shape the service issues (`{}`, `{email}`, `{_id}`).
//!
//! Data is lost when the store is dropped.

use std::collections::HashMap;

use bson::oid::ObjectId;
use bson::{Bson, Document};
use parking_lot::RwLock;
use tracing::debug;

use crate::error::StoreResult;
use crate::store::{DeleteAck, DocumentStore, InsertAck};

// =============================================================================
// MemoryStore
// =============================================================================

/// An in-memory document store.
///
/// # Thread Safety
///
/// This struct is `Send + Sync`. Collections are protected by a
/// `parking_lot::RwLock`; operations are short and never hold the lock
/// across an await point.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of documents in `collection`.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Returns `true` if `collection` holds no documents.
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    /// Returns `true` if `document` matches every field of `filter`.
    ///
    /// Matching is exact BSON equality on top-level fields; string values
    /// are compared byte-for-byte with no case folding.
    fn matches(document: &Document, filter: &Document) -> bool {
        filter
            .iter()
            .all(|(key, value)| document.get(key) == Some(value))
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read();
        let documents = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| Self::matches(doc, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(documents)
    }

    async fn insert_one(&self, collection: &str, mut document: Document) -> StoreResult<InsertAck> {
        // Assign an id the way the driver would, so delete-by-id round-trips.
        if !document.contains_key("_id") {
            document.insert("_id", Bson::ObjectId(ObjectId::new()));
        }
        let id = document.get("_id").cloned().unwrap_or(Bson::Null);

        let mut collections = self.collections.write();
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);

        debug!(collection, "Inserted document into memory store");

        Ok(InsertAck::acknowledged(&id))
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> StoreResult<DeleteAck> {
        let mut collections = self.collections.write();
        let deleted = collections
            .get_mut(collection)
            .and_then(|docs| {
                docs.iter()
                    .position(|doc| Self::matches(doc, &filter))
                    .map(|index| docs.remove(index))
            })
            .is_some();

        Ok(DeleteAck::acknowledged(u64::from(deleted)))
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
