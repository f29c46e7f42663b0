// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! CLI command implementations.
//!
//! This module contains the implementation of all CLI commands:
//!
//! - `run`: Start the service
//! - `version`: Show version information
//! - `health`: Check a running instance

mod health;
mod run;
mod version;

pub use health::health_check;
pub use run::run;
pub use version::version;

use crate::cli::{Cli, Commands};
use crate::error::BinResult;

/// Executes the appropriate command based on CLI arguments.
pub async fn execute(cli: Cli) -> BinResult<()> {
    match cli.effective_command() {
        Commands::Run(args) => run::run(&cli, args).await,
        Commands::Version => version::version(&cli),
        Commands::Health(args) => health::health_check(&cli, args).await,
    }
}
