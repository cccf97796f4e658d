// ABOUTME: In-memory FoodStore holding canonical foods, aliases and yields in plain collections
// ABOUTME: Backs unit tests and benchmarks; mirrors the SQLite repository's query semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;

use async_trait::async_trait;
use nutricalc_core::errors::AppResult;
use nutricalc_core::models::{CanonicalFood, FoodMatch, YieldFactor};

use super::FoodStore;
use crate::normalizer::normalize;
use crate::similarity::{rank_matches, trigram_similarity, SIMILARITY_THRESHOLD};

/// Reference data held in memory
///
/// Built once with the `with_*` methods and then only read.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFoodStore {
    foods: Vec<CanonicalFood>,
    aliases: HashMap<String, String>,
    yields: HashMap<(String, String, String), f64>,
}

impl InMemoryFoodStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a food record, replacing any record with the same id
    #[must_use]
    pub fn with_food(mut self, food: CanonicalFood) -> Self {
        self.foods.retain(|existing| existing.id != food.id);
        self.foods.push(food);
        self
    }

    /// Map an alias (normalized on insert) to a food id
    #[must_use]
    pub fn with_alias(mut self, alias: &str, food_id: &str) -> Self {
        self.aliases.insert(normalize(alias), food_id.to_owned());
        self
    }

    /// Register a yield factor for a state transition
    #[must_use]
    pub fn with_yield(
        mut self,
        food_id: &str,
        from_state: &str,
        to_state: &str,
        factor: f64,
    ) -> Self {
        self.yields.insert(
            (food_id.to_owned(), from_state.to_owned(), to_state.to_owned()),
            factor,
        );
        self
    }

    /// Number of food records
    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Whether the store holds no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[async_trait]
impl FoodStore for InMemoryFoodStore {
    async fn find_alias(&self, alias_normalized: &str) -> AppResult<Option<String>> {
        Ok(self.aliases.get(alias_normalized).cloned())
    }

    async fn search_similar(
        &self,
        query: &str,
        locale: &str,
        limit: usize,
    ) -> AppResult<Vec<FoodMatch>> {
        let mut matches: Vec<FoodMatch> = self
            .foods
            .iter()
            .filter(|food| food.locale == locale)
            .map(|food| FoodMatch {
                id: food.id.clone(),
                canonical_name: food.canonical_name.clone(),
                similarity: trigram_similarity(query, &food.canonical_name),
            })
            .filter(|candidate| candidate.similarity >= SIMILARITY_THRESHOLD)
            .collect();

        rank_matches(&mut matches);
        matches.truncate(limit);
        Ok(matches)
    }

    async fn search_contains(
        &self,
        needle: &str,
        locale: &str,
        limit: usize,
    ) -> AppResult<Vec<CanonicalFood>> {
        let needle = needle.to_lowercase();
        let mut hits: Vec<CanonicalFood> = self
            .foods
            .iter()
            .filter(|food| {
                food.locale == locale && food.canonical_name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        hits.sort_by(|a, b| a.canonical_name.cmp(&b.canonical_name));
        hits.truncate(limit);
        Ok(hits)
    }

    async fn get_food(&self, id: &str) -> AppResult<Option<CanonicalFood>> {
        Ok(self.foods.iter().find(|food| food.id == id).cloned())
    }

    async fn get_yield(
        &self,
        food_id: &str,
        from_state: &str,
        to_state: &str,
    ) -> AppResult<Option<YieldFactor>> {
        let key = (food_id.to_owned(), from_state.to_owned(), to_state.to_owned());
        Ok(self.yields.get(&key).map(|factor| YieldFactor {
            food_id: food_id.to_owned(),
            from_state: from_state.to_owned(),
            to_state: to_state.to_owned(),
            factor: *factor,
        }))
    }
}
