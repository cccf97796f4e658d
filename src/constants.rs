// ABOUTME: Service-level constants for configuration keys, defaults and HTTP routes
// ABOUTME: Nutrition constants shared with the engine live in nutricalc-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Environment variable names are collected in one place so the config
//! loader, the binaries and the tests agree on them.

pub use nutricalc_core::constants::{energy, locale, states};

/// Service identity
pub mod service_names {
    /// Service name reported in logs and health responses
    pub const NUTRICALC_SERVER: &str = "nutricalc-server";
    /// Crate name used as the log filter target
    pub const CRATE_TARGET: &str = "nutricalc_server";
}

/// Environment variable names
pub mod env_vars {
    /// Listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// SQLite connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Log filter
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Log output format
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Engine strict mode
    pub const STRICT_MODE: &str = "NUTRITION_STRICT_MODE";
    /// Heuristic yield switch
    pub const DISABLE_YIELD_GUESS: &str = "NUTRITION_DISABLE_YIELD_GUESS";
    /// Locale used when a request names none
    pub const DEFAULT_LOCALE: &str = "NUTRITION_DEFAULT_LOCALE";
    /// Lookup cache switch
    pub const CACHE_ENABLED: &str = "NUTRITION_CACHE_ENABLED";
    /// Lookup cache capacity
    pub const CACHE_MAX_ENTRIES: &str = "NUTRITION_CACHE_MAX_ENTRIES";
    /// Lookup cache entry lifetime
    pub const CACHE_TTL_SECS: &str = "NUTRITION_CACHE_TTL_SECS";
}

/// Default configuration values
pub mod defaults {
    /// Default listen port
    pub const HTTP_PORT: u16 = 8080;
    /// Default bind address
    pub const HOST: &str = "127.0.0.1";
    /// Default database location
    pub const DATABASE_URL: &str = "sqlite:./data/nutrition.db";
    /// Default log level
    pub const LOG_LEVEL: &str = "info";
    /// Default log format
    pub const LOG_FORMAT: &str = "pretty";
    /// Default deployment environment
    pub const ENVIRONMENT: &str = "development";
}

/// Lookup cache defaults
pub mod cache {
    /// Maximum cached lookups before LRU eviction
    pub const DEFAULT_MAX_ENTRIES: usize = 10_000;
    /// Cached lookup lifetime in seconds
    pub const DEFAULT_TTL_SECS: u64 = 3600;
}

/// HTTP route paths
pub mod routes {
    /// Calculation endpoint
    pub const NUTRITION_CALC: &str = "/nutrition/calc";
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Readiness probe
    pub const READY: &str = "/ready";
}

/// HTTP limits
pub mod http {
    /// Maximum accepted request body in bytes
    pub const MAX_BODY_BYTES: usize = 1024 * 1024;
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}
