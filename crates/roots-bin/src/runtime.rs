// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Service runtime orchestration.
//!
//! This module wires all components together in startup order:
//!
//! - Configuration loading and validation (fatal on a missing secret)
//! - Document store construction and reachability check
//! - API server with the access gate
//! - Graceful shutdown coordination

use std::sync::Arc;

use tracing::info;

use roots_api::{ApiServerBuilder, ServerConfig};
use roots_store::{DocumentStore, MemoryStore, MongoStore, StoreConfig};

use crate::error::BinResult;
use crate::shutdown::ShutdownCoordinator;

// =============================================================================
// StoreBackend
// =============================================================================

/// Which document store backend to run against.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    /// MongoDB, configured from the environment.
    Mongo(StoreConfig),
    /// In-process memory store (development and tests).
    Memory,
}

// =============================================================================
// ServiceRuntime
// =============================================================================

/// The main service runtime.
///
/// The runtime owns startup ordering: configuration errors surface before
/// the store connects, store connectivity is verified before the listener
/// binds, and the server runs until the shutdown coordinator fires.
pub struct ServiceRuntime {
    server_config: ServerConfig,
    backend: StoreBackend,
    shutdown: ShutdownCoordinator,
}

impl ServiceRuntime {
    /// Creates a new runtime.
    pub fn new(server_config: ServerConfig, backend: StoreBackend) -> Self {
        Self {
            server_config,
            backend,
            shutdown: ShutdownCoordinator::new(),
        }
    }

    /// Returns the shutdown coordinator.
    pub fn shutdown(&self) -> &ShutdownCoordinator {
        &self.shutdown
    }

    /// Runs the service until shutdown is signaled.
    pub async fn run(self) -> BinResult<()> {
        info!("Starting ROOTS service v{}", crate::VERSION);

        let store = self.build_store().await?;

        let server = ApiServerBuilder::new()
            .config(self.server_config.clone())
            .store(store)
            .build()?;

        self.shutdown.listen_for_signals();

        info!("ROOTS service is ready ({})", server.addr());

        server
            .run_with_shutdown(self.shutdown.shutdown_signal())
            .await?;

        info!("ROOTS service shutdown complete");

        Ok(())
    }

    /// Constructs the configured store backend and verifies it.
    async fn build_store(&self) -> BinResult<Arc<dyn DocumentStore>> {
        match &self.backend {
            StoreBackend::Mongo(config) => {
                let store = MongoStore::connect(config).await?;
                Ok(Arc::new(store))
            }
            StoreBackend::Memory => {
                info!("Using in-memory document store");
                Ok(Arc::new(MemoryStore::new()))
            }
        }
    }
}

// =============================================================================
// RuntimeBuilder
// =============================================================================

/// Builder for constructing the service runtime.
pub struct RuntimeBuilder {
    server_config: Option<ServerConfig>,
    backend: Option<StoreBackend>,
    port_override: Option<u16>,
}

impl RuntimeBuilder {
    /// Creates a new runtime builder.
    pub fn new() -> Self {
        Self {
            server_config: None,
            backend: None,
            port_override: None,
        }
    }

    /// Sets the server configuration directly.
    pub fn server_config(mut self, config: ServerConfig) -> Self {
        self.server_config = Some(config);
        self
    }

    /// Sets the store backend directly.
    pub fn backend(mut self, backend: StoreBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Overrides the port from the CLI.
    pub fn port(mut self, port: Option<u16>) -> Self {
        self.port_override = port;
        self
    }

    /// Selects the in-memory store backend.
    pub fn memory_store(mut self, enabled: bool) -> Self {
        if enabled {
            self.backend = Some(StoreBackend::Memory);
        }
        self
    }

    /// Builds the runtime, loading any unset configuration from the
    /// environment.
    pub fn build(self) -> BinResult<ServiceRuntime> {
        let mut server_config = match self.server_config {
            Some(config) => config,
            None => ServerConfig::from_env()?,
        };

        if let Some(port) = self.port_override {
            server_config.port = port;
        }

        let backend = match self.backend {
            Some(backend) => backend,
            None => StoreBackend::Mongo(StoreConfig::from_env()?),
        };

        Ok(ServiceRuntime::new(server_config, backend))
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
