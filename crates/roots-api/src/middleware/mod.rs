// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Middleware implementations for the API server.
//!
//! The only custom middleware is the access gate:
//!
//! - [`AccessGate`]: credential verification before protected handlers

mod gate;

pub use gate::{AccessGate, AccessGateLayer};
