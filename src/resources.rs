// ABOUTME: Shared server resources handed to every HTTP handler
// ABOUTME: Builds the food store stack and the engine once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use nutricalc_engine::{FoodStore, NutritionEngine};
use tracing::info;

use crate::cache::{CacheConfig, CachingFoodStore};
use crate::config::ServerConfig;
use crate::database::Database;

/// Resources shared across requests
#[derive(Debug)]
pub struct ServerResources {
    /// Calculation engine over the configured food store
    pub engine: NutritionEngine,
    /// Food database, used for readiness checks
    pub database: Database,
    /// Loaded configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Assemble the store stack and engine from configuration
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        let repository = database.foods();
        let store: Arc<dyn FoodStore> = if config.cache.enabled {
            info!(
                max_entries = config.cache.max_entries,
                ttl_secs = config.cache.ttl_secs,
                "Food lookup cache enabled"
            );
            Arc::new(CachingFoodStore::new(
                repository,
                &CacheConfig::from(&config.cache),
            ))
        } else {
            Arc::new(repository)
        };

        let engine = NutritionEngine::new(store, config.to_engine_config());
        Self {
            engine,
            database,
            config,
        }
    }
}
