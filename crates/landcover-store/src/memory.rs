//! In-memory result cache.
//!
//! Entries live until the whole cache is cleared: there is no TTL, size bound,
//! or per-key eviction. Concurrent writers to the same key are last-write-wins.

use async_trait::async_trait;
use landcover_core::error::Result;
use landcover_core::models::LandCoverBreakdown;
use landcover_core::ports::ResultCache;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Lookup counters since creation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// In-memory implementation of ResultCache
#[derive(Debug, Clone, Default)]
pub struct MemoryResultCache {
    entries: Arc<RwLock<HashMap<String, LandCoverBreakdown>>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl MemoryResultCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Cached keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl ResultCache for MemoryResultCache {
    async fn get(&self, key: &str) -> Result<Option<LandCoverBreakdown>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let found = entries.get(key).cloned();

        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);

        Ok(found)
    }

    async fn put(&self, key: &str, breakdown: LandCoverBreakdown) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), breakdown);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let dropped = entries.len();
        entries.clear();
        tracing::debug!(dropped, "Cleared result cache");
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.len())
    }
}
