// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven server, database, engine and cache configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables; there are no config files.
//! The engine receives its switches as an explicit `EngineConfig` built from
//! [`environment::ServerConfig::to_engine_config`].

/// Environment and server configuration
pub mod environment;

pub use environment::{
    CacheSettings, DatabaseConfig, DatabaseUrl, Environment, NutritionConfig, ServerConfig,
};
