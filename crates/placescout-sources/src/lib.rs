//! # placescout-sources
//!
//! HTTP clients for the two location sources placescout aggregates:
//!
//! - [`internal::InternalApiClient`] — the platform's own REST API exposing
//!   hotels, restaurants, and check-in places as `{ "data": [...] }` lists.
//! - [`places::PlacesClient`] — the external places-search proxy queried by
//!   free text.
//!
//! Both clients implement the source traits from placescout-core and return
//! hard `SourceUnavailable` errors; the aggregator decides what degrades to
//! empty results.
//!
//! The `mock` feature adds deterministic in-memory sources with call logs,
//! used by service-level tests to assert that cached paths make no fetch.

pub mod internal;
pub mod places;

#[cfg(feature = "mock")]
pub mod mock;

pub use internal::{InternalApiClient, InternalApiConfig};
pub use places::{PlacesClient, PlacesConfig};
