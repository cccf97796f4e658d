// ABOUTME: Read-only lookup interface over canonical foods, aliases and yield factors
// ABOUTME: Implemented by the SQLite repository, the read-through cache and an in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// In-memory reference data store
pub mod memory;

pub use memory::InMemoryFoodStore;

use async_trait::async_trait;
use nutricalc_core::errors::AppResult;
use nutricalc_core::models::{CanonicalFood, FoodMatch, YieldFactor};

/// Reference data queries consumed by the engine
///
/// Every method is a read; the engine never writes reference data. Errors
/// are infrastructure failures, never "not found" (that is `Ok(None)` or an
/// empty list).
#[async_trait]
pub trait FoodStore: Send + Sync {
    /// Food id for an exact normalized alias
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be queried
    async fn find_alias(&self, alias_normalized: &str) -> AppResult<Option<String>>;

    /// Similarity-ranked search over canonical names in `locale`, best first
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be queried
    async fn search_similar(
        &self,
        query: &str,
        locale: &str,
        limit: usize,
    ) -> AppResult<Vec<FoodMatch>>;

    /// Case-insensitive substring search over canonical names in `locale`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be queried
    async fn search_contains(
        &self,
        needle: &str,
        locale: &str,
        limit: usize,
    ) -> AppResult<Vec<CanonicalFood>>;

    /// Food record by id
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be queried
    async fn get_food(&self, id: &str) -> AppResult<Option<CanonicalFood>>;

    /// Stored yield factor for a state transition
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be queried
    async fn get_yield(
        &self,
        food_id: &str,
        from_state: &str,
        to_state: &str,
    ) -> AppResult<Option<YieldFactor>>;
}
