// ABOUTME: SQLite database management for the food reference tables
// ABOUTME: Opens the pool, creates the schema and answers readiness pings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! Holds the reference data the engine resolves against: canonical foods,
//! normalized aliases and cooking yield factors. The service only reads
//! these tables; writes exist for fixtures and the `seed-foods` binary.

/// Food store implementation over the reference tables
pub mod foods;

pub use foods::FoodRepository;

use std::fs;
use std::str::FromStr;

use nutricalc_core::errors::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::config::DatabaseUrl;

/// Pool size for file databases
const MAX_FILE_CONNECTIONS: u32 = 5;

/// Database manager for the food reference tables
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a connection pool and create the schema
    ///
    /// An in-memory database uses a single connection so every query sees
    /// the same tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn new(url: &DatabaseUrl) -> AppResult<Self> {
        if let DatabaseUrl::SQLite { path } = url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::database(format!(
                        "Cannot create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let options =
            SqliteConnectOptions::from_str(&url.to_connection_string())?.create_if_missing(true);
        let pool_options = if url.is_memory() {
            // The schema lives only as long as its one connection
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(MAX_FILE_CONNECTIONS)
        };
        let pool = pool_options.connect_with(options).await?;

        let db = Self { pool };
        db.migrate().await?;

        info!(database = %url, "Food database ready");
        Ok(db)
    }

    /// Close every pooled connection, flushing pending writes
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Create the reference tables and indexes
    ///
    /// # Errors
    ///
    /// Returns an error if table or index creation fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_foods (
                id TEXT PRIMARY KEY,
                canonical_name TEXT NOT NULL,
                name_normalized TEXT NOT NULL,
                locale TEXT NOT NULL DEFAULT 'pt-BR',
                state TEXT NOT NULL DEFAULT 'raw',
                kcal REAL NOT NULL DEFAULT 0,
                protein_g REAL NOT NULL DEFAULT 0,
                fat_g REAL NOT NULL DEFAULT 0,
                carbs_g REAL NOT NULL DEFAULT 0,
                fiber_g REAL NOT NULL DEFAULT 0,
                sodium_mg REAL NOT NULL DEFAULT 0,
                density_g_ml REAL,
                edible_portion_factor REAL,
                oil_absorption_factor REAL,
                UNIQUE (name_normalized, locale, state)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_aliases (
                alias_normalized TEXT PRIMARY KEY,
                food_id TEXT NOT NULL REFERENCES nutrition_foods(id) ON DELETE CASCADE
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_yields (
                food_id TEXT NOT NULL REFERENCES nutrition_foods(id) ON DELETE CASCADE,
                from_state TEXT NOT NULL,
                to_state TEXT NOT NULL,
                factor REAL NOT NULL CHECK (factor > 0),
                PRIMARY KEY (food_id, from_state, to_state)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_nutrition_foods_locale ON nutrition_foods(locale)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_nutrition_aliases_food ON nutrition_aliases(food_id)",
        )
        .execute(&self.pool)
        .await?;

        debug!("Food reference schema up to date");
        Ok(())
    }

    /// Check that the database answers queries
    ///
    /// # Errors
    ///
    /// Returns an error if the probe query fails
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Food store over this database
    #[must_use]
    pub fn foods(&self) -> FoodRepository {
        FoodRepository::new(self.pool.clone())
    }
}
