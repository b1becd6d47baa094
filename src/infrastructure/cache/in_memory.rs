//! In-memory cache implementation using moka

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache as MokaCache;
use moka::ops::compute::{CompResult, Op};

use crate::domain::DomainError;
use crate::domain::cache::Cache;

use super::clock::{Clock, SystemClock};

/// Configuration for in-memory cache
#[derive(Debug, Clone)]
pub struct InMemoryCacheConfig {
    /// Maximum number of entries
    pub max_capacity: u64,
}

impl Default for InMemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: 10_000,
        }
    }
}

impl InMemoryCacheConfig {
    pub fn with_max_capacity(mut self, capacity: u64) -> Self {
        self.max_capacity = capacity;
        self
    }
}

/// Cache entry stored in moka
#[derive(Debug, Clone)]
struct CacheEntry {
    /// Serialized JSON value
    data: String,
    /// TTL the entry was written with
    ttl: Duration,
    /// Expiration timestamp (clock millis)
    expires_at: u64,
}

/// Lets moka evict each entry after its own TTL
struct EntryExpiry;

impl Expiry<String, CacheEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CacheEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CacheEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Thread-safe in-memory cache using moka
///
/// moka evicts entries in the background once their TTL passes; reads also
/// check the entry timestamp against the [`Clock`], so an expired value is
/// never returned even before eviction runs.
pub struct InMemoryCache {
    cache: MokaCache<String, CacheEntry>,
    clock: Arc<dyn Clock>,
    config: InMemoryCacheConfig,
}

impl fmt::Debug for InMemoryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryCache")
            .field("config", &self.config)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::with_config(InMemoryCacheConfig::default())
    }

    pub fn with_config(config: InMemoryCacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a cache reading time from `clock`
    pub fn with_clock(config: InMemoryCacheConfig, clock: Arc<dyn Clock>) -> Self {
        let cache = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(EntryExpiry)
            .build();

        Self {
            cache,
            clock,
            config,
        }
    }

    fn entry(&self, value: String, ttl: Duration) -> CacheEntry {
        CacheEntry {
            data: value,
            ttl,
            expires_at: self.clock.now_millis().saturating_add(ttl.as_millis() as u64),
        }
    }

    fn is_expired(&self, entry: &CacheEntry) -> bool {
        self.clock.now_millis() > entry.expires_at
    }

    /// Live entry for `key`, dropping it when expired
    ///
    /// The removal runs under moka's key lock and only drops the entry that
    /// was read, so a racing `set` is never discarded.
    async fn live_entry(&self, key: &str) -> Option<CacheEntry> {
        let entry = self.cache.get(key).await?;
        if !self.is_expired(&entry) {
            return Some(entry);
        }

        // Any later write carries a later expiry than the one just read
        let stale_at = entry.expires_at;
        self.cache
            .entry_by_ref(key)
            .and_compute_with(|current| {
                let op = match current {
                    Some(current) if current.value().expires_at <= stale_at => Op::Remove,
                    _ => Op::Nop,
                };
                std::future::ready(op)
            })
            .await;
        None
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Anchored regex for a glob pattern where only `*` is special
fn glob_regex(pattern: &str) -> Result<regex::Regex, DomainError> {
    let source = format!("^{}$", regex::escape(pattern).replace(r"\*", ".*"));
    regex::Regex::new(&source).map_err(|e| DomainError::cache(format!("Invalid pattern: {}", e)))
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.live_entry(key).await.map(|entry| entry.data))
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> Result<(), DomainError> {
        let entry = self.entry(value.to_string(), ttl);
        self.cache
            .entry_by_ref(key)
            .and_upsert_with(|_| std::future::ready(entry))
            .await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.cache.remove(key).await.is_some())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<usize, DomainError> {
        let regex = glob_regex(pattern)?;

        self.cache.run_pending_tasks().await;

        let cache_clone = self.cache.clone();
        let keys_to_delete: Vec<String> = tokio::task::spawn_blocking(move || {
            cache_clone
                .iter()
                .filter(|(k, _)| regex.is_match(k.as_str()))
                .map(|(k, _)| (*k).clone())
                .collect()
        })
        .await
        .map_err(|e| DomainError::cache(format!("Failed to iterate cache: {}", e)))?;

        let mut deleted = 0;
        for key in keys_to_delete {
            if self.cache.remove(&key).await.is_some() {
                deleted += 1;
            }
        }

        Ok(deleted)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool, DomainError> {
        let result = self
            .cache
            .entry_by_ref(key)
            .and_compute_with(|current| {
                let op = match current {
                    Some(current) if !self.is_expired(current.value()) => {
                        Op::Put(self.entry(current.into_value().data, ttl))
                    }
                    Some(_) => Op::Remove,
                    None => Op::Nop,
                };
                std::future::ready(op)
            })
            .await;

        Ok(matches!(result, CompResult::ReplacedWith(_)))
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>, DomainError> {
        Ok(self.live_entry(key).await.map(|entry| {
            let remaining = entry.expires_at.saturating_sub(self.clock.now_millis());
            Duration::from_millis(remaining)
        }))
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        Ok(())
    }

    async fn size(&self) -> Result<usize, DomainError> {
        self.cache.run_pending_tasks().await;
        Ok(self.cache.entry_count() as usize)
    }

    fn backend_name(&self) -> &'static str {
        "in_memory"
    }
}
