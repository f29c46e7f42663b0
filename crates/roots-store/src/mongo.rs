// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! MongoDB-backed document store.
//!
//! A single [`mongodb::Client`] is constructed at startup and shared by all
//! requests for the lifetime of the process. The driver maintains its own
//! connection pool; this wrapper only routes collection operations and maps
//! driver errors into [`StoreError`].

use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Database};
use tracing::info;

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::store::{DeleteAck, DocumentStore, InsertAck};

// =============================================================================
// MongoStore
// =============================================================================

/// Document store backed by MongoDB.
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connects to MongoDB and verifies the deployment is reachable.
    ///
    /// The client pins the stable server API (v1), matching the deployment
    /// the service is written against.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = config.app_name.clone();
        options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());

        let client = Client::with_options(options)?;
        let database = client.database(&config.database);

        let store = Self { database };
        store.ping().await?;

        info!(database = %config.database, "Connected to MongoDB");

        Ok(store)
    }

    /// Returns the underlying database handle.
    pub fn database(&self) -> &Database {
        &self.database
    }
}

#[async_trait::async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
        let cursor = self
            .database
            .collection::<Document>(collection)
            .find(filter)
            .await?;

        let documents = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> StoreResult<InsertAck> {
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;

        Ok(InsertAck::acknowledged(&result.inserted_id))
    }

    async fn delete_one(&self, collection: &str, filter: Document) -> StoreResult<DeleteAck> {
        let result = self
            .database
            .collection::<Document>(collection)
            .delete_one(filter)
            .await?;

        Ok(DeleteAck::acknowledged(result.deleted_count))
    }

    async fn ping(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
