// ABOUTME: Main library entry point for the nutrition calculation service
// ABOUTME: Wires configuration, logging, the SQLite food store, caching and HTTP routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutricalc Server
//!
//! Turns free-text food lists ("arroz", 150 g; "leite", 200 ml) into
//! per-item nutrient breakdowns and request totals.
//!
//! ## Architecture
//!
//! - **`nutricalc-core`**: error taxonomy and wire models
//! - **`nutricalc-engine`**: resolution chain, quantity rules, cooking
//!   corrections and energy derivation over a `FoodStore`
//! - **this crate**: environment configuration, structured logging, the
//!   SQLite food repository, a read-through lookup cache and the HTTP surface
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutricalc_server::config::ServerConfig;
//! use nutricalc_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Nutricalc server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Read-through lookup cache for food stores
pub mod cache;

/// Configuration management
pub mod config;

/// Service constants
pub mod constants;

/// SQLite food reference tables
pub mod database;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared server resources
pub mod resources;

/// HTTP routes
pub mod routes;

/// HTTP server assembly
pub mod server;

/// Demo reference data for the seeding binary and local development
pub mod seed;

pub use nutricalc_core::models;
pub use nutricalc_engine as engine;
