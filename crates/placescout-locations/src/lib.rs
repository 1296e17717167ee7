//! # placescout-locations
//!
//! The `LocationService` composition layer: cached collection reads, the
//! concurrent scored search over internal and external sources, explicit
//! cache invalidation, and refresh.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use placescout_locations::{LocationService, LocationServiceConfig};
//! use placescout_sources::{InternalApiClient, PlacesClient};
//!
//! let internal = Arc::new(InternalApiClient::from_env()?);
//! let external = Arc::new(PlacesClient::from_env()?);
//! let service = LocationService::new(internal, external, LocationServiceConfig::from_env());
//!
//! let results = service.search("binh minh").await;
//! ```

pub mod cache;
pub mod service;

pub use cache::{CacheStats, TtlCache};
pub use service::{
    LocationService, LocationServiceConfig, ServiceStats, SourceHealth, COLLECTION_ATTRACTIONS,
    COLLECTION_HOTELS, COLLECTION_RESTAURANTS,
};
