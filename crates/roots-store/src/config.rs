// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Store configuration.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Default database name.
const DEFAULT_DATABASE: &str = "Radiant-Roots";

/// Default Atlas cluster host used when composing a URI from credentials.
const DEFAULT_CLUSTER_HOST: &str = "cluster0.4ostg1n.mongodb.net";

// =============================================================================
// StoreConfig
// =============================================================================

/// Configuration for the document store connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Full MongoDB connection URI.
    #[serde(skip_serializing)]
    pub uri: String,
    /// Database name.
    pub database: String,
    /// Application name reported to the server.
    pub app_name: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: String::new(), // Must be set by user
            database: DEFAULT_DATABASE.to_string(),
            app_name: Some("roots".to_string()),
        }
    }
}

impl StoreConfig {
    /// Creates a new configuration with the given URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Default::default()
        }
    }

    /// Sets the database name.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Loads the configuration from environment variables.
    ///
    /// `ROOTS_MONGODB_URI` takes precedence. Without it, the URI is composed
    /// from `ROOTS_DATABASE_USER` and `ROOTS_DATABASE_PASS` against the
    /// Atlas cluster (`ROOTS_DATABASE_HOST` to override). The database name
    /// comes from `ROOTS_DATABASE_NAME`.
    pub fn from_env() -> StoreResult<Self> {
        let mut config = Self::default();

        if let Ok(name) = env::var("ROOTS_DATABASE_NAME") {
            config.database = name;
        }

        if let Ok(uri) = env::var("ROOTS_MONGODB_URI") {
            config.uri = uri;
            return config.validated();
        }

        let user = env::var("ROOTS_DATABASE_USER").map_err(|_| {
            StoreError::configuration(
                "ROOTS_MONGODB_URI or ROOTS_DATABASE_USER/ROOTS_DATABASE_PASS must be set",
            )
        })?;
        let pass = env::var("ROOTS_DATABASE_PASS").map_err(|_| {
            StoreError::configuration("ROOTS_DATABASE_PASS must be set alongside ROOTS_DATABASE_USER")
        })?;
        let host =
            env::var("ROOTS_DATABASE_HOST").unwrap_or_else(|_| DEFAULT_CLUSTER_HOST.to_string());

        config.uri = format!(
            "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority",
            user, pass, host
        );

        config.validated()
    }

    /// Validates the configuration.
    pub fn validated(self) -> StoreResult<Self> {
        if self.uri.is_empty() {
            return Err(StoreError::configuration("connection URI is empty"));
        }
        if self.database.is_empty() {
            return Err(StoreError::configuration("database name is empty"));
        }
        Ok(self)
    }
}

// =============================================================================
// Tests
// =============================================================================
