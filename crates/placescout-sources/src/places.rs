//! External places-search client.
//!
//! The platform proxies a third-party places provider under
//! `/google-places?query=<text>`. Responses carry a `success` flag and a
//! `data` array of provider rows; rows are normalized into `LocationRecord`s
//! with `kind = External` and ids namespaced as `external_<place_id>`.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use placescout_core::{defaults, Error, ExternalSource, LocationKind, LocationRecord, Result};

/// Source name used in errors and logs.
const SOURCE_NAME: &str = "google-places";

/// Configuration for the places client.
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// Base URL of the proxy, e.g. `http://localhost:8000/api`.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Queries shorter than this (chars, normalized) return empty with no
    /// network call.
    pub min_query_len: usize,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_BASE_URL.to_string(),
            timeout_seconds: defaults::REQUEST_TIMEOUT_SECS,
            min_query_len: defaults::MIN_QUERY_LEN,
        }
    }
}

impl PlacesConfig {
    /// Create from environment variables.
    ///
    /// Reads:
    /// - `PLACESCOUT_PLACES_BASE`, falling back to `PLACESCOUT_API_BASE`
    ///   (the proxy lives on the same host by default)
    /// - `PLACESCOUT_TIMEOUT_SECS` (default: 8)
    pub fn from_env() -> Self {
        let base_url = std::env::var("PLACESCOUT_PLACES_BASE")
            .or_else(|_| std::env::var("PLACESCOUT_API_BASE"))
            .unwrap_or_else(|_| defaults::API_BASE_URL.to_string());
        let timeout_seconds = std::env::var("PLACESCOUT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults::REQUEST_TIMEOUT_SECS);

        Self {
            base_url,
            timeout_seconds,
            min_query_len: defaults::MIN_QUERY_LEN,
        }
    }
}

/// HTTP client for the external places-search proxy.
pub struct PlacesClient {
    client: Client,
    config: PlacesConfig,
}

impl PlacesClient {
    /// Create a new client with the given configuration.
    pub fn new(config: PlacesConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(PlacesConfig::from_env())
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &PlacesConfig {
        &self.config
    }
}

#[async_trait]
impl ExternalSource for PlacesClient {
    #[instrument(skip(self), fields(subsystem = "sources", component = "places", op = "search", query = %query))]
    async fn search(&self, query: &str) -> Result<Vec<LocationRecord>> {
        let trimmed = query.trim();
        if trimmed.chars().count() < self.config.min_query_len {
            debug!("Query below minimum length, skipping provider call");
            return Ok(vec![]);
        }

        let start = Instant::now();
        let url = format!(
            "{}/google-places",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .get(&url)
            .query(&[("query", trimmed)])
            .send()
            .await
            .map_err(|e| Error::source_unavailable(SOURCE_NAME, e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::source_unavailable(
                SOURCE_NAME,
                format!("unexpected status {}", response.status()),
            ));
        }

        let body: PlacesResponse = response.json().await.map_err(|e| {
            Error::source_unavailable(SOURCE_NAME, format!("malformed payload: {e}"))
        })?;

        if !body.success {
            return Err(Error::source_unavailable(
                SOURCE_NAME,
                "provider reported failure",
            ));
        }

        let records: Vec<LocationRecord> =
            body.data.into_iter().map(PlaceRow::into_record).collect();

        debug!(
            result_count = records.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Provider search complete"
        );

        Ok(records)
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!(
            "{}/google-places",
            self.config.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .get(&url)
            .query(&[("query", "health")])
            .send()
            .await
            .map_err(|e| Error::source_unavailable(SOURCE_NAME, e.to_string()))?;
        Ok(response.status().is_success())
    }
}

#[derive(Deserialize)]
struct PlacesResponse {
    success: bool,
    #[serde(default)]
    data: Vec<PlaceRow>,
}

#[derive(Deserialize)]
struct PlaceRow {
    place_id: String,
    name: String,
    formatted_address: Option<String>,
    rating: Option<f64>,
    user_ratings_total: Option<u64>,
    geometry: Option<Geometry>,
}

#[derive(Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl PlaceRow {
    fn into_record(self) -> LocationRecord {
        let (latitude, longitude) = match self.geometry {
            Some(g) => (Some(g.location.lat), Some(g.location.lng)),
            None => (None, None),
        };

        LocationRecord {
            id: format!("external_{}", self.place_id),
            name: self.name,
            detail: self.formatted_address.unwrap_or_default(),
            kind: LocationKind::External,
            rating: self.rating,
            rating_count: self.user_ratings_total,
            price_range: None,
            latitude,
            longitude,
            score: None,
        }
    }
}
