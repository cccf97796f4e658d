// ABOUTME: In-memory lookup cache with LRU eviction and TTL support
// ABOUTME: Stores serialized values so one cache can hold every lookup type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use nutricalc_core::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::debug;

use super::{CacheConfig, CacheKey};

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(data: Vec<u8>, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory cache with LRU eviction
///
/// `LruCache::get` updates recency and needs `&mut`, so reads take the lock
/// exclusively. Expired entries are dropped when read.
#[derive(Debug)]
pub struct InMemoryCache {
    store: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl InMemoryCache {
    /// Capacity used when the configuration asks for zero entries
    const DEFAULT_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1000) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache from configuration
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        let capacity =
            NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CACHE_CAPACITY);
        Self {
            store: Mutex::new(LruCache::new(capacity)),
            ttl: config.ttl,
        }
    }

    /// Store a value under `key` for the configured TTL
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized
    pub async fn set<T: Serialize + Sync>(&self, key: &CacheKey, value: &T) -> AppResult<()> {
        let entry = CacheEntry::new(serde_json::to_vec(value)?, self.ttl);
        self.store.lock().await.push(key.to_string(), entry);
        Ok(())
    }

    /// Fetch a live value for `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the stored bytes do not deserialize into `T`
    pub async fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> AppResult<Option<T>> {
        let key = key.to_string();
        let mut store = self.store.lock().await;

        let Some(entry) = store.get(&key) else {
            return Ok(None);
        };
        if entry.is_expired() {
            store.pop(&key);
            drop(store);
            debug!(cache.key = %key, "Cache entry expired");
            return Ok(None);
        }

        let value = serde_json::from_slice(&entry.data)?;
        drop(store);
        Ok(Some(value))
    }

    /// Remove every entry
    pub async fn clear(&self) {
        self.store.lock().await.clear();
    }

    /// Number of entries currently held, expired ones included
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Whether the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
