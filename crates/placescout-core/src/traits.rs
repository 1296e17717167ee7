//! Source traits implemented by the HTTP clients in placescout-sources.
//!
//! The `LocationService` only sees these traits, so tests can swap in
//! deterministic in-memory sources and the HTTP layer stays replaceable.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::LocationRecord;

/// The platform's own backend API: hotels, restaurants, and check-in
/// places, each already normalized into `LocationRecord`s.
///
/// Implementations return hard errors; the soft-fail policy (degrade a
/// failed source to empty results) lives in the service layer so it is
/// applied exactly once.
#[async_trait]
pub trait InternalSource: Send + Sync {
    /// Fetch the full hotels collection.
    async fn fetch_hotels(&self) -> Result<Vec<LocationRecord>>;

    /// Fetch the full restaurants collection.
    async fn fetch_restaurants(&self) -> Result<Vec<LocationRecord>>;

    /// Fetch the full check-in places (attractions) collection.
    async fn fetch_attractions(&self) -> Result<Vec<LocationRecord>>;

    /// Check that the source is reachable.
    async fn health_check(&self) -> Result<bool>;
}

/// A third-party places-search provider queried by free text.
#[async_trait]
pub trait ExternalSource: Send + Sync {
    /// Search the provider. Implementations must return an empty list
    /// without any network call for queries below the minimum length.
    async fn search(&self, query: &str) -> Result<Vec<LocationRecord>>;

    /// Check that the provider is reachable.
    async fn health_check(&self) -> Result<bool>;
}
