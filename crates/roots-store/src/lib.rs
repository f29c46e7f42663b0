// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # roots-store
//!
//! Document store access layer for the ROOTS volunteer service.
//!
//! This crate defines the [`DocumentStore`] seam the HTTP layer talks to,
//! together with two implementations:
//!
//! - [`MongoStore`]: the production backend, a thin wrapper over the
//!   MongoDB driver with a single client built at startup.
//! - [`MemoryStore`]: an in-memory backend for tests and local development.
//!
//! Documents are opaque BSON; the service performs no schema validation on
//! activity or volunteer payloads.

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod config;
mod error;
mod memory;
mod mongo;
mod store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{parse_object_id, DeleteAck, DocumentStore, InsertAck, ACTIVITIES, VOLUNTEERS};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
