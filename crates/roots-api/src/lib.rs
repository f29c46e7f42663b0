// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # roots-api
//!
//! REST API server for the ROOTS volunteer service.
//!
//! This crate provides the HTTP layer: JWT credential issuance and
//! verification, the access-gate middleware protecting per-volunteer
//! routes, and the CRUD handlers over the activity and volunteer
//! collections.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod server;
pub mod state;

pub use auth::{AuthContext, AuthError, Claims, TokenConfig, TokenIssuer};
pub use config::{CorsConfig, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use middleware::AccessGateLayer;
pub use response::TokenResponse;
pub use server::{ApiServer, ApiServerBuilder};
pub use state::AppState;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
