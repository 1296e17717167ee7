//! In-memory TTL cache for collections and search results.
//!
//! Entries are valid strictly while `now - stored_at < ttl` and are checked
//! lazily on read; there is no background eviction. Expiry uses the injected
//! [`Clock`] so tests can advance time deterministically.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

use placescout_core::Clock;

/// Hit/miss counters for one cache table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

struct CacheEntry<T> {
    value: T,
    stored_at: Instant,
}

/// A TTL-bounded map from string keys to values.
pub struct TtlCache<T> {
    /// Table name, used only for log lines.
    name: &'static str,
    ttl: Duration,
    clock: Arc<dyn Clock>,
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<T: Clone> TtlCache<T> {
    /// Create a cache table with the given TTL and clock.
    pub fn new(name: &'static str, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            name,
            ttl,
            clock,
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Get a non-expired value. An expired entry counts as a miss and is
    /// removed on the way out.
    pub async fn get(&self, key: &str) -> Option<T> {
        let mut entries = self.entries.write().await;

        if let Some(entry) = entries.get(key) {
            let age = self
                .clock
                .now()
                .saturating_duration_since(entry.stored_at);
            if age < self.ttl {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(table = self.name, cache_key = key, "Cache HIT");
                return Some(entry.value.clone());
            }
            entries.remove(key);
            debug!(table = self.name, cache_key = key, "Cache EXPIRED");
        } else {
            debug!(table = self.name, cache_key = key, "Cache MISS");
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Store a value, replacing any previous entry for the key.
    pub async fn insert(&self, key: impl Into<String>, value: T) {
        let key = key.into();
        let mut entries = self.entries.write().await;
        debug!(
            table = self.name,
            cache_key = %key,
            ttl_secs = self.ttl.as_secs(),
            "Cache SET"
        );
        entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: self.clock.now(),
            },
        );
    }

    /// Remove one entry, regardless of TTL state.
    pub async fn remove(&self, key: &str) {
        let mut entries = self.entries.write().await;
        if entries.remove(key).is_some() {
            debug!(table = self.name, cache_key = key, "Cache INVALIDATE");
        }
    }

    /// Remove every entry, regardless of TTL state.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        let removed = entries.len();
        entries.clear();
        debug!(table = self.name, removed, "Cache FLUSH");
    }

    /// Number of stored entries (expired ones included until read).
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when no entries are stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// The configured TTL.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Counters for this table.
    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.read().await.len(),
        }
    }
}
