// ABOUTME: Read-through lookup cache placed in front of any food store
// ABOUTME: Caches alias, similarity and food-by-id lookups; substring and yield lookups bypass it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// In-memory cache implementation
pub mod memory;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use nutricalc_core::errors::AppResult;
use nutricalc_core::models::{CanonicalFood, FoodMatch, YieldFactor};
use nutricalc_engine::FoodStore;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{trace, warn};

use crate::config::CacheSettings;
use memory::InMemoryCache;

/// Cache sizing and lifetime
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum entries before LRU eviction
    pub max_entries: usize,
    /// Entry lifetime
    pub ttl: Duration,
}

impl From<&CacheSettings> for CacheConfig {
    fn from(settings: &CacheSettings) -> Self {
        Self {
            max_entries: settings.max_entries,
            ttl: Duration::from_secs(settings.ttl_secs),
        }
    }
}

/// Cached lookup identity
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Alias table lookup by normalized alias
    Alias(String),
    /// Similarity search
    Similar {
        /// Normalized query
        query: String,
        /// Locale scope
        locale: String,
        /// Result limit
        limit: usize,
    },
    /// Food record by id
    Food(String),
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alias(alias) => write!(f, "alias:{alias}"),
            Self::Similar {
                query,
                locale,
                limit,
            } => write!(f, "similar:{locale}:{limit}:{query}"),
            Self::Food(id) => write!(f, "food:{id}"),
        }
    }
}

/// Food store wrapper that remembers lookups
///
/// Reference data is read-only while the service runs, so cached answers
/// stay valid until they expire. Failed lookups are never cached.
pub struct CachingFoodStore<S> {
    inner: S,
    cache: InMemoryCache,
}

impl<S: FoodStore> CachingFoodStore<S> {
    /// Wrap `inner` with a cache sized by `config`
    #[must_use]
    pub fn new(inner: S, config: &CacheConfig) -> Self {
        Self {
            inner,
            cache: InMemoryCache::new(config),
        }
    }

    /// Wrapped store
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Drop every cached lookup
    pub async fn clear(&self) {
        self.cache.clear().await;
    }

    /// Cached value for `key`; a corrupt entry counts as a miss
    async fn cached<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        match self.cache.get(key).await {
            Ok(hit) => {
                if hit.is_some() {
                    trace!(cache.key = %key, "Lookup cache hit");
                }
                hit
            }
            Err(e) => {
                warn!(cache.key = %key, error = %e, "Discarding unreadable cache entry");
                None
            }
        }
    }

    async fn remember<T: Serialize + Sync>(&self, key: &CacheKey, value: &T) {
        if let Err(e) = self.cache.set(key, value).await {
            warn!(cache.key = %key, error = %e, "Failed to cache lookup");
        }
    }
}

#[async_trait]
impl<S: FoodStore> FoodStore for CachingFoodStore<S> {
    async fn find_alias(&self, alias_normalized: &str) -> AppResult<Option<String>> {
        let key = CacheKey::Alias(alias_normalized.to_owned());
        if let Some(hit) = self.cached(&key).await {
            return Ok(hit);
        }
        let found = self.inner.find_alias(alias_normalized).await?;
        self.remember(&key, &found).await;
        Ok(found)
    }

    async fn search_similar(
        &self,
        query: &str,
        locale: &str,
        limit: usize,
    ) -> AppResult<Vec<FoodMatch>> {
        let key = CacheKey::Similar {
            query: query.to_owned(),
            locale: locale.to_owned(),
            limit,
        };
        if let Some(hit) = self.cached(&key).await {
            return Ok(hit);
        }
        let matches = self.inner.search_similar(query, locale, limit).await?;
        self.remember(&key, &matches).await;
        Ok(matches)
    }

    async fn search_contains(
        &self,
        needle: &str,
        locale: &str,
        limit: usize,
    ) -> AppResult<Vec<CanonicalFood>> {
        self.inner.search_contains(needle, locale, limit).await
    }

    async fn get_food(&self, id: &str) -> AppResult<Option<CanonicalFood>> {
        let key = CacheKey::Food(id.to_owned());
        if let Some(hit) = self.cached(&key).await {
            return Ok(hit);
        }
        let food = self.inner.get_food(id).await?;
        self.remember(&key, &food).await;
        Ok(food)
    }

    async fn get_yield(
        &self,
        food_id: &str,
        from_state: &str,
        to_state: &str,
    ) -> AppResult<Option<YieldFactor>> {
        self.inner.get_yield(food_id, from_state, to_state).await
    }
}

impl<S> fmt::Debug for CachingFoodStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachingFoodStore")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
