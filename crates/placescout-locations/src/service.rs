//! The location aggregation service.
//!
//! `LocationService` merges the internal collections (hotels, restaurants,
//! check-in places) with the external places provider into one ranked,
//! deduplicated, bounded result list per query, caching raw collections and
//! search results independently.
//!
//! Failure policy: source errors never escape this layer. A failed source
//! degrades to zero results for that source (logged at warn), because a
//! partial result list is always preferable to no result. There is no retry;
//! the next call after TTL expiry or the next keystroke re-attempts
//! naturally.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};

use placescout_core::{
    defaults, Clock, ExternalSource, InternalSource, LocationRecord, SystemClock,
};
use placescout_search::{merge_results, normalize, score_locations, MergeConfig, ScoreWeights};

use crate::cache::{CacheStats, TtlCache};

/// Collection cache key for hotels.
pub const COLLECTION_HOTELS: &str = "hotels";
/// Collection cache key for restaurants.
pub const COLLECTION_RESTAURANTS: &str = "restaurants";
/// Collection cache key for check-in places.
pub const COLLECTION_ATTRACTIONS: &str = "attractions";

/// Configuration for the service.
#[derive(Debug, Clone)]
pub struct LocationServiceConfig {
    /// TTL for cached raw collections.
    pub collection_ttl: Duration,
    /// TTL for cached search results. Shorter than the collection TTL
    /// because ranked results are more volatile.
    pub search_ttl: Duration,
    /// Queries shorter than this (chars, normalized) return empty with no
    /// network call.
    pub min_query_len: usize,
    /// Per-class result caps.
    pub merge: MergeConfig,
    /// Relevance score weights for the internal scored search.
    pub weights: ScoreWeights,
}

impl Default for LocationServiceConfig {
    fn default() -> Self {
        Self {
            collection_ttl: Duration::from_secs(defaults::COLLECTION_TTL_SECS),
            search_ttl: Duration::from_secs(defaults::SEARCH_TTL_SECS),
            min_query_len: defaults::MIN_QUERY_LEN,
            merge: MergeConfig::default(),
            weights: ScoreWeights::default(),
        }
    }
}

impl LocationServiceConfig {
    /// Create from environment variables.
    ///
    /// Reads:
    /// - `PLACESCOUT_COLLECTION_TTL_SECS` (default: 600)
    /// - `PLACESCOUT_SEARCH_TTL_SECS` (default: 120)
    /// - `PLACESCOUT_INTERNAL_LIMIT` (default: 10)
    /// - `PLACESCOUT_EXTERNAL_LIMIT` (default: 5)
    pub fn from_env() -> Self {
        fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
            std::env::var(name)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        }

        Self {
            collection_ttl: Duration::from_secs(env_parse(
                "PLACESCOUT_COLLECTION_TTL_SECS",
                defaults::COLLECTION_TTL_SECS,
            )),
            search_ttl: Duration::from_secs(env_parse(
                "PLACESCOUT_SEARCH_TTL_SECS",
                defaults::SEARCH_TTL_SECS,
            )),
            min_query_len: defaults::MIN_QUERY_LEN,
            merge: MergeConfig {
                internal_limit: env_parse(
                    "PLACESCOUT_INTERNAL_LIMIT",
                    defaults::INTERNAL_RESULT_LIMIT,
                ),
                external_limit: env_parse(
                    "PLACESCOUT_EXTERNAL_LIMIT",
                    defaults::EXTERNAL_RESULT_LIMIT,
                ),
            },
            weights: ScoreWeights::default(),
        }
    }
}

/// Combined counters for both cache tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceStats {
    pub collections: CacheStats,
    pub searches: CacheStats,
}

/// Reachability of the two sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceHealth {
    pub internal: bool,
    pub external: bool,
}

/// The aggregator. Cheap to clone; all state sits behind an `Arc`.
#[derive(Clone)]
pub struct LocationService {
    inner: Arc<Inner>,
}

struct Inner {
    internal: Arc<dyn InternalSource>,
    external: Arc<dyn ExternalSource>,
    collections: TtlCache<Vec<LocationRecord>>,
    searches: TtlCache<Vec<LocationRecord>>,
    config: LocationServiceConfig,
}

impl LocationService {
    /// Create a service on the system clock.
    pub fn new(
        internal: Arc<dyn InternalSource>,
        external: Arc<dyn ExternalSource>,
        config: LocationServiceConfig,
    ) -> Self {
        Self::with_clock(internal, external, config, Arc::new(SystemClock))
    }

    /// Create a service with an injected clock (for deterministic TTL tests).
    pub fn with_clock(
        internal: Arc<dyn InternalSource>,
        external: Arc<dyn ExternalSource>,
        config: LocationServiceConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let collections = TtlCache::new("collections", config.collection_ttl, clock.clone());
        let searches = TtlCache::new("searches", config.search_ttl, clock);

        Self {
            inner: Arc::new(Inner {
                internal,
                external,
                collections,
                searches,
                config,
            }),
        }
    }

    /// All internal locations, concatenated hotels → restaurants →
    /// attractions, each collection served from cache when fresh.
    ///
    /// Never fails: a collection whose fetch rejects contributes nothing
    /// this call and is logged at warn.
    #[instrument(skip(self), fields(subsystem = "locations", component = "location_service", op = "all_locations"))]
    pub async fn all_locations(&self) -> Vec<LocationRecord> {
        let (hotels, restaurants, attractions) = tokio::join!(
            self.collection(COLLECTION_HOTELS),
            self.collection(COLLECTION_RESTAURANTS),
            self.collection(COLLECTION_ATTRACTIONS),
        );

        let mut all = hotels;
        all.extend(restaurants);
        all.extend(attractions);
        debug!(result_count = all.len(), "Assembled internal locations");
        all
    }

    /// One collection, from cache or fetched. Failures degrade to empty and
    /// are not cached, so the next call re-attempts.
    async fn collection(&self, source: &'static str) -> Vec<LocationRecord> {
        if let Some(cached) = self.inner.collections.get(source).await {
            return cached;
        }

        let fetched = match source {
            COLLECTION_HOTELS => self.inner.internal.fetch_hotels().await,
            COLLECTION_RESTAURANTS => self.inner.internal.fetch_restaurants().await,
            COLLECTION_ATTRACTIONS => self.inner.internal.fetch_attractions().await,
            other => {
                warn!(source = other, "Unknown collection requested");
                return vec![];
            }
        };

        match fetched {
            Ok(records) => {
                self.inner.collections.insert(source, records.clone()).await;
                records
            }
            Err(e) => {
                warn!(source, error = %e, "Collection fetch failed, degrading to empty");
                vec![]
            }
        }
    }

    /// External provider search. Fails soft: the caller never sees an error,
    /// only (possibly empty) results. Short queries return empty without a
    /// network call.
    #[instrument(skip(self), fields(subsystem = "locations", component = "location_service", op = "search_places", query = %query))]
    pub async fn search_places(&self, query: &str) -> Vec<LocationRecord> {
        match self.inner.external.search(query).await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "External search failed, degrading to empty");
                vec![]
            }
        }
    }

    /// The main entry point: ranked, deduplicated, bounded results for a
    /// free-text query, cached per normalized query.
    #[instrument(skip(self), fields(subsystem = "locations", component = "location_service", op = "search", query = %query))]
    pub async fn search(&self, query: &str) -> Vec<LocationRecord> {
        let key = normalize(query);
        if key.chars().count() < self.inner.config.min_query_len {
            debug!("Query below minimum length");
            return vec![];
        }

        if let Some(cached) = self.inner.searches.get(&key).await {
            return cached;
        }

        let start = Instant::now();

        // Both branches write only their own result list; merging happens
        // after both complete.
        let (internal, external) =
            tokio::join!(self.scored_internal(&key), self.search_places(query));

        let internal_hits = internal.len();
        let external_hits = external.len();
        let merged = merge_results(internal, external, &self.inner.config.merge);

        self.inner.searches.insert(key, merged.clone()).await;

        info!(
            internal_hits,
            external_hits,
            result_count = merged.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Search complete"
        );

        merged
    }

    /// Score every internal location against the normalized query, dropping
    /// zero-score records.
    async fn scored_internal(&self, query: &str) -> Vec<LocationRecord> {
        let all = self.all_locations().await;
        score_locations(all, query, &self.inner.config.weights)
    }

    /// Drop one cached collection ("hotels", "restaurants", "attractions").
    pub async fn clear_collection(&self, source: &str) {
        self.inner.collections.remove(source).await;
    }

    /// Drop every cached collection.
    pub async fn clear_collections(&self) {
        self.inner.collections.clear().await;
    }

    /// Drop every cached search result.
    pub async fn clear_search_cache(&self) {
        self.inner.searches.clear().await;
    }

    /// Drop everything, regardless of TTL state.
    pub async fn clear_all(&self) {
        self.inner.collections.clear().await;
        self.inner.searches.clear().await;
    }

    /// Clear all caches and eagerly repopulate the collection cache,
    /// returning the fresh aggregate.
    #[instrument(skip(self), fields(subsystem = "locations", component = "location_service", op = "refresh_all"))]
    pub async fn refresh_all(&self) -> Vec<LocationRecord> {
        self.clear_all().await;
        let fresh = self.all_locations().await;
        info!(result_count = fresh.len(), "Refreshed all collections");
        fresh
    }

    /// Counters for both cache tables.
    pub async fn cache_stats(&self) -> ServiceStats {
        ServiceStats {
            collections: self.inner.collections.stats().await,
            searches: self.inner.searches.stats().await,
        }
    }

    /// Probe both sources. A health-check error counts as unhealthy.
    pub async fn sources_healthy(&self) -> SourceHealth {
        let (internal, external) = tokio::join!(
            self.inner.internal.health_check(),
            self.inner.external.health_check(),
        );

        SourceHealth {
            internal: internal.unwrap_or(false),
            external: external.unwrap_or(false),
        }
    }
}
