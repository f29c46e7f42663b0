// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! API server configuration.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::auth::TokenConfig;
use crate::error::{ApiError, ApiResult};

// =============================================================================
// ServerConfig
// =============================================================================

/// Configuration for the API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: IpAddr,
    /// Server port.
    pub port: u16,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Credential signing configuration.
    pub jwt: TokenConfig,
    /// Request timeout.
    #[serde(with = "duration_secs")]
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)),
            port: 5000,
            cors: CorsConfig::default(),
            jwt: TokenConfig::default(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ServerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the configuration from environment variables.
    ///
    /// Reads `ROOTS_HOST`, `ROOTS_PORT`, `ROOTS_JWT_SECRET`, and
    /// `ROOTS_JWT_TTL_SECS`. The signing secret is required; a missing
    /// secret is a fatal configuration error.
    pub fn from_env() -> ApiResult<Self> {
        let mut config = Self::default();

        if let Ok(host) = env::var("ROOTS_HOST") {
            config.host = host
                .parse()
                .map_err(|_| ApiError::internal(format!("ROOTS_HOST is not an IP address: {}", host)))?;
        }

        if let Ok(port) = env::var("ROOTS_PORT") {
            config.port = port
                .parse()
                .map_err(|_| ApiError::internal(format!("ROOTS_PORT is not a port number: {}", port)))?;
        }

        config.jwt.secret = env::var("ROOTS_JWT_SECRET")
            .map_err(|_| ApiError::internal("ROOTS_JWT_SECRET must be set"))?;

        if let Ok(ttl) = env::var("ROOTS_JWT_TTL_SECS") {
            config.jwt.ttl_secs = ttl.parse().map_err(|_| {
                ApiError::internal(format!("ROOTS_JWT_TTL_SECS is not a number: {}", ttl))
            })?;
        }

        Ok(config)
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Sets the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the credential signing configuration.
    pub fn with_jwt(mut self, jwt: TokenConfig) -> Self {
        self.jwt = jwt;
        self
    }
}

// =============================================================================
// CorsConfig
// =============================================================================

/// CORS (Cross-Origin Resource Sharing) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins.
    pub allowed_origins: Vec<String>,
    /// Allowed methods.
    pub allowed_methods: Vec<String>,
    /// Max age for preflight cache (seconds).
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        // The service is consumed by a browser frontend on another origin;
        // wide-open CORS is the deployed behavior.
        Self::permissive()
    }
}

impl CorsConfig {
    /// Creates a permissive CORS configuration.
    pub fn permissive() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec![
                "GET".to_string(),
                "POST".to_string(),
                "DELETE".to_string(),
                "OPTIONS".to_string(),
            ],
            max_age: 3600,
        }
    }

    /// Creates a restrictive CORS configuration for a known frontend.
    pub fn strict(origins: Vec<String>) -> Self {
        Self {
            allowed_origins: origins,
            allowed_methods: vec!["GET".to_string(), "POST".to_string(), "DELETE".to_string()],
            max_age: 3600,
        }
    }
}

// =============================================================================
// duration_secs module for Duration
// =============================================================================

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

// =============================================================================
// Tests
// =============================================================================
