// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Implementation of the `health` command.

use std::time::{Duration, Instant};

use crate::cli::{Cli, HealthArgs};
use crate::error::{BinError, BinResult};

/// Executes the `health` command against a running instance.
///
/// This is a connectivity check, not a full HTTP health probe: the service
/// answers `/health` as soon as it accepts connections, so a successful
/// TCP connect to the API address is sufficient here.
pub async fn health_check(_cli: &Cli, args: HealthArgs) -> BinResult<()> {
    let timeout = Duration::from_secs(args.timeout);
    let start = Instant::now();

    let result = tokio::time::timeout(timeout, tokio::net::TcpStream::connect(&args.addr)).await;

    match result {
        Ok(Ok(_stream)) => {
            println!(
                "OK: {} accepted a connection in {} ms",
                args.addr,
                start.elapsed().as_millis()
            );
            Ok(())
        }
        Ok(Err(e)) => Err(BinError::Health(format!(
            "{} refused the connection: {}",
            args.addr, e
        ))),
        Err(_) => Err(BinError::Health(format!(
            "{} did not answer within {}s",
            args.addr, args.timeout
        ))),
    }
}

// =============================================================================
// Tests
// =============================================================================
