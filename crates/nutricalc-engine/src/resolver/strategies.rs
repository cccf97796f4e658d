// ABOUTME: Individual food resolution stages: alias, trigram similarity and substring search
// ABOUTME: Each stage returns an optional match so the resolver can short-circuit on success
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use nutricalc_core::errors::AppResult;
use nutricalc_core::models::{CanonicalFood, MatchSource};
use tracing::warn;

use super::ResolveQuery;
use crate::similarity::SIMILARITY_LIMIT;
use crate::state::state_priority;
use crate::store::FoodStore;

/// Candidates fetched by the substring stage
pub const CONTAINS_LIMIT: usize = 10;

/// Candidates fetched by the corrective placeholder search
pub const PLACEHOLDER_FALLBACK_LIMIT: usize = 20;

/// One stage of the resolution chain
#[async_trait]
pub trait ResolveStrategy: Send + Sync {
    /// Stage reported on items this strategy resolves
    fn source(&self) -> MatchSource;

    /// Try to resolve the query
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails and the stage cannot degrade
    async fn resolve(
        &self,
        store: &dyn FoodStore,
        query: &ResolveQuery<'_>,
    ) -> AppResult<Option<CanonicalFood>>;
}

/// Exact lookup of the normalized name in the alias table
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasStrategy;

#[async_trait]
impl ResolveStrategy for AliasStrategy {
    fn source(&self) -> MatchSource {
        MatchSource::Alias
    }

    async fn resolve(
        &self,
        store: &dyn FoodStore,
        query: &ResolveQuery<'_>,
    ) -> AppResult<Option<CanonicalFood>> {
        if query.alias_key.is_empty() {
            return Ok(None);
        }
        let Some(food_id) = store.find_alias(&query.alias_key).await? else {
            return Ok(None);
        };
        store.get_food(&food_id).await
    }
}

/// Top hit of the trigram similarity search
///
/// A failing search is logged and treated as no match.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityStrategy;

#[async_trait]
impl ResolveStrategy for SimilarityStrategy {
    fn source(&self) -> MatchSource {
        MatchSource::Fuzzy
    }

    async fn resolve(
        &self,
        store: &dyn FoodStore,
        query: &ResolveQuery<'_>,
    ) -> AppResult<Option<CanonicalFood>> {
        if query.alias_key.is_empty() {
            return Ok(None);
        }
        let matches = match store
            .search_similar(&query.alias_key, query.locale, SIMILARITY_LIMIT)
            .await
        {
            Ok(matches) => matches,
            Err(e) => {
                warn!(
                    query = %query.alias_key,
                    locale = %query.locale,
                    error = %e,
                    "Similarity search failed, continuing with substring search"
                );
                return Ok(None);
            }
        };

        match matches.first() {
            Some(best) => store.get_food(&best.id).await,
            None => Ok(None),
        }
    }
}

/// Substring search ranked by preparation state, skipping zero-macro rows
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainsStrategy;

#[async_trait]
impl ResolveStrategy for ContainsStrategy {
    fn source(&self) -> MatchSource {
        MatchSource::Substring
    }

    async fn resolve(
        &self,
        store: &dyn FoodStore,
        query: &ResolveQuery<'_>,
    ) -> AppResult<Option<CanonicalFood>> {
        let needle = query.search_name.trim();
        if needle.is_empty() {
            return Ok(None);
        }
        let candidates = store
            .search_contains(needle, query.locale, CONTAINS_LIMIT)
            .await?;

        let with_macros: Vec<CanonicalFood> = candidates
            .iter()
            .filter(|food| food.has_macros())
            .cloned()
            .collect();
        let pool = if with_macros.is_empty() {
            candidates
        } else {
            with_macros
        };

        Ok(pick_by_state_priority(pool))
    }
}

/// Re-run the substring search for a non-zero replacement of a placeholder row
///
/// # Errors
///
/// Returns an error if the substring search fails
pub async fn placeholder_replacement(
    store: &dyn FoodStore,
    query: &ResolveQuery<'_>,
) -> AppResult<Option<CanonicalFood>> {
    let needle = query.search_name.trim();
    if needle.is_empty() {
        return Ok(None);
    }
    let candidates = store
        .search_contains(needle, query.locale, PLACEHOLDER_FALLBACK_LIMIT)
        .await?;

    Ok(pick_by_state_priority(
        candidates.into_iter().filter(CanonicalFood::has_macros).collect(),
    ))
}

/// First candidate after a stable sort by state priority
#[must_use]
pub fn pick_by_state_priority(mut candidates: Vec<CanonicalFood>) -> Option<CanonicalFood> {
    candidates.sort_by_key(|food| state_priority(&food.state));
    candidates.into_iter().next()
}
