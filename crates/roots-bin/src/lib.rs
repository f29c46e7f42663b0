// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # roots-bin
//!
//! CLI binary for the ROOTS volunteer service.
//!
//! This crate provides the main binary entry point, including:
//!
//! - CLI argument parsing with clap
//! - Service runtime orchestration
//! - Graceful shutdown handling
//! - Logging initialization
//! - Command implementations (run, version, health)
//!
//! ## Usage
//!
//! ```bash
//! # Start the service (default command)
//! roots
//!
//! # Start on a specific port with the in-memory store
//! roots run --port 8080 --memory-store
//!
//! # Show version
//! roots version
//!
//! # Check a running instance
//! roots health
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod shutdown;

// =============================================================================
// Re-exports
// =============================================================================

pub use cli::{Cli, Commands};
pub use error::{BinError, BinResult};
pub use logging::init_logging;
pub use runtime::{ServiceRuntime, RuntimeBuilder};
pub use shutdown::ShutdownCoordinator;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
