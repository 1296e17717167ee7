//! Deterministic in-memory sources for testing.
//!
//! Every fetch is recorded in a call log shared across clones, so tests can
//! assert that a cached path performed no fetch at all.
//!
//! ## Usage
//!
//! ```rust
//! use placescout_sources::mock::MockInternalSource;
//! use placescout_core::{InternalSource, LocationKind, LocationRecord};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let source = MockInternalSource::new()
//!     .with_hotels(vec![LocationRecord::new(
//!         "hotel_1", "Hotel A", "1 Main St", LocationKind::Hotel,
//!     )]);
//!
//! let hotels = source.fetch_hotels().await.unwrap();
//! assert_eq!(hotels.len(), 1);
//! assert_eq!(source.call_count("fetch_hotels"), 1);
//! # }
//! ```

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use placescout_core::{defaults, Error, ExternalSource, InternalSource, LocationRecord, Result};

/// Mock implementation of [`InternalSource`].
#[derive(Clone, Default)]
pub struct MockInternalSource {
    hotels: Vec<LocationRecord>,
    restaurants: Vec<LocationRecord>,
    attractions: Vec<LocationRecord>,
    failing: HashSet<&'static str>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockInternalSource {
    /// Create an empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hotels collection.
    pub fn with_hotels(mut self, hotels: Vec<LocationRecord>) -> Self {
        self.hotels = hotels;
        self
    }

    /// Set the restaurants collection.
    pub fn with_restaurants(mut self, restaurants: Vec<LocationRecord>) -> Self {
        self.restaurants = restaurants;
        self
    }

    /// Set the attractions collection.
    pub fn with_attractions(mut self, attractions: Vec<LocationRecord>) -> Self {
        self.attractions = attractions;
        self
    }

    /// Make one collection fail with `SourceUnavailable`.
    /// `source` is one of "hotels", "restaurants", "attractions".
    pub fn with_failing_source(mut self, source: &'static str) -> Self {
        self.failing.insert(source);
        self
    }

    /// All logged fetch operations, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    /// Number of logged calls to `operation`.
    pub fn call_count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .expect("call log poisoned")
            .iter()
            .filter(|c| *c == operation)
            .count()
    }

    /// Total number of logged fetches.
    pub fn total_calls(&self) -> usize {
        self.calls.lock().expect("call log poisoned").len()
    }

    fn fetch(&self, operation: &str, source: &'static str, data: &[LocationRecord]) -> Result<Vec<LocationRecord>> {
        self.calls
            .lock()
            .expect("call log poisoned")
            .push(operation.to_string());

        if self.failing.contains(source) {
            return Err(Error::source_unavailable(source, "mock failure"));
        }
        Ok(data.to_vec())
    }
}

#[async_trait]
impl InternalSource for MockInternalSource {
    async fn fetch_hotels(&self) -> Result<Vec<LocationRecord>> {
        self.fetch("fetch_hotels", "hotels", &self.hotels)
    }

    async fn fetch_restaurants(&self) -> Result<Vec<LocationRecord>> {
        self.fetch("fetch_restaurants", "restaurants", &self.restaurants)
    }

    async fn fetch_attractions(&self) -> Result<Vec<LocationRecord>> {
        self.fetch("fetch_attractions", "attractions", &self.attractions)
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(self.failing.is_empty())
    }
}

/// Mock implementation of [`ExternalSource`].
#[derive(Clone, Default)]
pub struct MockExternalSource {
    results: Vec<LocationRecord>,
    fail: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockExternalSource {
    /// Create an empty mock provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the results returned for every (long enough) query.
    pub fn with_results(mut self, results: Vec<LocationRecord>) -> Self {
        self.results = results;
        self
    }

    /// Make every search fail with `SourceUnavailable`.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// All queries the provider was actually invoked with. Queries below
    /// the minimum length short-circuit before being logged, mirroring the
    /// real client's no-network behavior.
    pub fn queries(&self) -> Vec<String> {
        self.calls.lock().expect("call log poisoned").clone()
    }

    /// Number of provider invocations.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("call log poisoned").len()
    }
}

#[async_trait]
impl ExternalSource for MockExternalSource {
    async fn search(&self, query: &str) -> Result<Vec<LocationRecord>> {
        let trimmed = query.trim();
        if trimmed.chars().count() < defaults::MIN_QUERY_LEN {
            return Ok(vec![]);
        }

        self.calls
            .lock()
            .expect("call log poisoned")
            .push(trimmed.to_string());

        if self.fail {
            return Err(Error::source_unavailable("google-places", "mock failure"));
        }
        Ok(self.results.clone())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(!self.fail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placescout_core::LocationKind;

    fn record(id: &str, name: &str) -> LocationRecord {
        LocationRecord::new(id, name, "", LocationKind::Hotel)
    }

    #[tokio::test]
    async fn test_internal_mock_logs_calls_across_clones() {
        let source = MockInternalSource::new().with_hotels(vec![record("hotel_1", "A")]);
        let clone = source.clone();

        clone.fetch_hotels().await.unwrap();
        clone.fetch_restaurants().await.unwrap();

        assert_eq!(source.call_count("fetch_hotels"), 1);
        assert_eq!(source.total_calls(), 2);
    }

    #[tokio::test]
    async fn test_internal_mock_failing_source() {
        let source = MockInternalSource::new().with_failing_source("restaurants");

        assert!(source.fetch_hotels().await.is_ok());
        let err = source.fetch_restaurants().await.unwrap_err();
        assert_eq!(err.failed_source(), Some("restaurants"));
    }

    #[tokio::test]
    async fn test_external_mock_short_query_not_logged() {
        let source = MockExternalSource::new().with_results(vec![record("external_1", "B")]);

        assert!(source.search("a").await.unwrap().is_empty());
        assert_eq!(source.call_count(), 0);

        assert_eq!(source.search("banh mi").await.unwrap().len(), 1);
        assert_eq!(source.queries(), vec!["banh mi".to_string()]);
    }
}
