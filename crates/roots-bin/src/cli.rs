// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! CLI argument parsing and command definitions.
//!
//! This module provides the command-line interface for ROOTS using clap.
//! It supports multiple subcommands:
//!
//! - `run`: Start the service (default)
//! - `version`: Show version information
//! - `health`: Check a running instance

use clap::{Args, Parser, Subcommand};

// =============================================================================
// Main CLI Structure
// =============================================================================

/// ROOTS - REST backend for the Radiant Roots volunteer service.
#[derive(Parser, Debug)]
#[command(
    name = "roots",
    author = "Sylvex <contact@sylvex.io>",
    version = crate::VERSION,
    about = "REST backend for the Radiant Roots volunteer service",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        default_value = "info",
        env = "ROOTS_LOG_LEVEL",
        global = true
    )]
    pub log_level: String,

    /// Log format (text, json)
    #[arg(long, default_value = "text", env = "ROOTS_LOG_FORMAT", global = true)]
    pub log_format: LogFormat,

    /// Enable quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// =============================================================================
// Subcommands
// =============================================================================

/// Available subcommands for the ROOTS CLI.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the service
    ///
    /// This is the default command when no subcommand is specified.
    /// It connects to the document store and serves the REST API until
    /// a shutdown signal arrives.
    Run(RunArgs),

    /// Show detailed version information
    Version,

    /// Check the health of a running instance
    ///
    /// Verifies the configured API address accepts connections.
    Health(HealthArgs),
}

// =============================================================================
// Command Arguments
// =============================================================================

/// Arguments for the `run` command.
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Port to bind (overrides ROOTS_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Use the in-memory store instead of MongoDB (development only)
    #[arg(long, env = "ROOTS_MEMORY_STORE")]
    pub memory_store: bool,
}

/// Arguments for the `health` command.
#[derive(Args, Debug, Clone)]
pub struct HealthArgs {
    /// Address of the running instance
    #[arg(short, long, default_value = "127.0.0.1:5000", env = "ROOTS_HEALTH_ADDR")]
    pub addr: String,

    /// Timeout for the check in seconds
    #[arg(short, long, default_value = "10")]
    pub timeout: u64,
}

impl Default for HealthArgs {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:5000".to_string(),
            timeout: 10,
        }
    }
}

// =============================================================================
// Enums
// =============================================================================

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for structured logging
    Json,
}

// =============================================================================
// Helper Methods
// =============================================================================

impl Cli {
    /// Parse CLI arguments from the command line.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective command, defaulting to `Run` if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Run(RunArgs::default()))
    }

    /// Get the effective log level based on flags.
    pub fn effective_log_level(&self) -> &str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
