// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! ROOTS - REST backend for the Radiant Roots volunteer service.
//!
//! Main binary entry point.

use roots_bin::{commands, error, init_logging, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    init_logging(cli.effective_log_level(), cli.log_format);

    if let Err(e) = commands::execute(cli).await {
        error::report_error_and_exit(e);
    }
}
