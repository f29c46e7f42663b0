// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! API handlers for all endpoints.
//!
//! This module contains the handler implementations for all API endpoints:
//!
//! - [`auth`]: credential issuance
//! - [`activities`]: activity collection endpoints
//! - [`volunteers`]: volunteer collection endpoints, including the
//!   protected per-volunteer records route
//! - [`health`]: liveness and readiness endpoints

mod activities;
mod auth;
mod health;
mod volunteers;

pub use activities::*;
pub use auth::*;
pub use health::*;
pub use volunteers::*;
