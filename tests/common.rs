// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, seeded in-memory databases and server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `nutricalc_server`

use std::env;
use std::sync::{Arc, Once};

use nutricalc_server::config::{DatabaseUrl, ServerConfig};
use nutricalc_server::database::Database;
use nutricalc_server::resources::ServerResources;
use nutricalc_server::seed::seed_demo_data;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Configuration pointing at an in-memory database
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.database.url = DatabaseUrl::Memory;
    config
}

/// Empty in-memory database with the schema created
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new(&DatabaseUrl::Memory).await.unwrap()
}

/// In-memory database loaded with the demo reference data
pub async fn create_seeded_database() -> Database {
    let database = create_test_database().await;
    seed_demo_data(&database.foods()).await.unwrap();
    database
}

/// Server resources over a seeded in-memory database
pub async fn create_test_server_resources(config: ServerConfig) -> Arc<ServerResources> {
    let database = create_seeded_database().await;
    Arc::new(ServerResources::new(database, config))
}

/// Assert two floats agree to within rounding noise
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
