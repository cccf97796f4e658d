// ABOUTME: Multi-stage food resolver chaining alias, similarity and substring strategies
// ABOUTME: Short-circuits on the first match and replaces zero-macro placeholder rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Resolution stages
pub mod strategies;

pub use strategies::{
    AliasStrategy, ContainsStrategy, ResolveStrategy, SimilarityStrategy, CONTAINS_LIMIT,
    PLACEHOLDER_FALLBACK_LIMIT,
};

use std::fmt;

use nutricalc_core::errors::AppResult;
use nutricalc_core::models::{CanonicalFood, MatchSource};
use tracing::debug;

use crate::normalizer::normalize;
use crate::store::FoodStore;

/// Search terms for one item
#[derive(Debug, Clone)]
pub struct ResolveQuery<'a> {
    /// Name after synonym substitution, used for substring search
    pub search_name: &'a str,
    /// Normalized `search_name`, used for alias and similarity lookups
    pub alias_key: String,
    /// Locale scope for name searches
    pub locale: &'a str,
}

impl<'a> ResolveQuery<'a> {
    /// Build a query, normalizing the alias key
    #[must_use]
    pub fn new(search_name: &'a str, locale: &'a str) -> Self {
        Self {
            search_name,
            alias_key: normalize(search_name),
            locale,
        }
    }
}

/// A resolved food and the stage that found it
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Matched record
    pub food: CanonicalFood,
    /// Stage that produced the record
    pub source: MatchSource,
}

/// Ordered chain of resolution strategies
pub struct FoodResolver {
    strategies: Vec<Box<dyn ResolveStrategy>>,
}

impl FoodResolver {
    /// Resolver with a custom chain
    #[must_use]
    pub fn new(strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
        Self { strategies }
    }

    /// Alias, then similarity, then substring
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(AliasStrategy),
            Box::new(SimilarityStrategy),
            Box::new(ContainsStrategy),
        ])
    }

    /// Resolve `search_name` in `locale`
    ///
    /// Returns `Ok(None)` when no stage matches. When the chosen record has
    /// no macros at all, a wider substring search looks for a non-zero
    /// replacement and wins if it finds one.
    ///
    /// # Errors
    ///
    /// Returns an error if a store lookup fails in a stage that cannot degrade
    pub async fn resolve(
        &self,
        store: &dyn FoodStore,
        search_name: &str,
        locale: &str,
    ) -> AppResult<Option<Resolution>> {
        let query = ResolveQuery::new(search_name, locale);

        let mut found = None;
        for strategy in &self.strategies {
            if let Some(food) = strategy.resolve(store, &query).await? {
                found = Some(Resolution {
                    food,
                    source: strategy.source(),
                });
                break;
            }
        }

        let Some(resolution) = found else {
            return Ok(None);
        };
        if resolution.food.has_macros() {
            return Ok(Some(resolution));
        }

        debug!(
            food_id = %resolution.food.id,
            stage = resolution.source.as_str(),
            "Matched a zero-macro placeholder, searching for a replacement"
        );
        match strategies::placeholder_replacement(store, &query).await? {
            Some(food) => Ok(Some(Resolution {
                food,
                source: MatchSource::PlaceholderFallback,
            })),
            None => Ok(Some(resolution)),
        }
    }
}

impl Default for FoodResolver {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for FoodResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stages: Vec<_> = self.strategies.iter().map(|s| s.source().as_str()).collect();
        f.debug_struct("FoodResolver").field("stages", &stages).finish()
    }
}
