//! Internal travel-platform API client.
//!
//! Wraps the database-backed REST endpoints (`/hotels`, `/restaurants`,
//! `/checkin-places`) and normalizes their source-specific rows into
//! `LocationRecord`s. Ids are namespaced per collection (`hotel_<n>`,
//! `restaurant_<n>`, `place_<n>`) so they stay globally unique.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};

use placescout_core::{defaults, Error, InternalSource, LocationKind, LocationRecord, Result};

/// Configuration for the internal API client.
#[derive(Debug, Clone)]
pub struct InternalApiConfig {
    /// Base URL, e.g. `http://localhost:8000/api`.
    pub base_url: String,
    /// Optional bearer token attached to every request.
    pub api_token: Option<String>,
    /// Page size for collection pulls.
    pub per_page: i64,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for InternalApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_BASE_URL.to_string(),
            api_token: None,
            per_page: defaults::COLLECTION_PER_PAGE,
            timeout_seconds: defaults::REQUEST_TIMEOUT_SECS,
        }
    }
}

impl InternalApiConfig {
    /// Create from environment variables.
    ///
    /// Reads:
    /// - `PLACESCOUT_API_BASE` (default: `http://localhost:8000/api`)
    /// - `PLACESCOUT_API_TOKEN` (default: unset)
    /// - `PLACESCOUT_TIMEOUT_SECS` (default: 8)
    pub fn from_env() -> Self {
        let base_url = std::env::var("PLACESCOUT_API_BASE")
            .unwrap_or_else(|_| defaults::API_BASE_URL.to_string());
        let api_token = std::env::var("PLACESCOUT_API_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());
        let timeout_seconds = std::env::var("PLACESCOUT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults::REQUEST_TIMEOUT_SECS);

        Self {
            base_url,
            api_token,
            per_page: defaults::COLLECTION_PER_PAGE,
            timeout_seconds,
        }
    }
}

/// HTTP client for the internal API.
pub struct InternalApiClient {
    client: Client,
    config: InternalApiConfig,
}

impl InternalApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: InternalApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(InternalApiConfig::from_env())
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &InternalApiConfig {
        &self.config
    }

    /// Fetch one collection endpoint and unwrap its `data` envelope.
    async fn fetch_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let start = Instant::now();
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path);

        let mut request = self
            .client
            .get(&url)
            .query(&[("per_page", self.config.per_page)]);
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::source_unavailable(path, e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::source_unavailable(
                path,
                format!("unexpected status {}", response.status()),
            ));
        }

        let body: ListResponse<T> = response
            .json()
            .await
            .map_err(|e| Error::source_unavailable(path, format!("malformed payload: {e}")))?;

        debug!(
            source = path,
            result_count = body.data.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Fetched collection"
        );

        Ok(body.data)
    }
}

#[async_trait]
impl InternalSource for InternalApiClient {
    #[instrument(skip(self), fields(subsystem = "sources", component = "internal_api", op = "fetch_hotels"))]
    async fn fetch_hotels(&self) -> Result<Vec<LocationRecord>> {
        let rows: Vec<HotelRow> = self.fetch_collection("hotels").await?;
        Ok(rows.into_iter().map(HotelRow::into_record).collect())
    }

    #[instrument(skip(self), fields(subsystem = "sources", component = "internal_api", op = "fetch_restaurants"))]
    async fn fetch_restaurants(&self) -> Result<Vec<LocationRecord>> {
        let rows: Vec<RestaurantRow> = self.fetch_collection("restaurants").await?;
        Ok(rows.into_iter().map(RestaurantRow::into_record).collect())
    }

    #[instrument(skip(self), fields(subsystem = "sources", component = "internal_api", op = "fetch_attractions"))]
    async fn fetch_attractions(&self) -> Result<Vec<LocationRecord>> {
        let rows: Vec<CheckinPlaceRow> = self.fetch_collection("checkin-places").await?;
        Ok(rows.into_iter().map(CheckinPlaceRow::into_record).collect())
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!(
            "{}/hotels",
            self.config.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .get(&url)
            .query(&[("per_page", 1)])
            .send()
            .await
            .map_err(|e| Error::source_unavailable("hotels", e.to_string()))?;
        Ok(response.status().is_success())
    }
}

/// Every internal list endpoint wraps its rows in `{ "data": [...] }`.
/// Only `data` is consumed.
#[derive(Deserialize)]
struct ListResponse<T> {
    data: Vec<T>,
}

#[derive(Deserialize)]
struct HotelRow {
    id: u64,
    name: String,
    address: Option<String>,
    rating: Option<f64>,
    price_range: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl HotelRow {
    fn into_record(self) -> LocationRecord {
        LocationRecord {
            id: format!("hotel_{}", self.id),
            name: self.name,
            detail: self.address.unwrap_or_default(),
            kind: LocationKind::Hotel,
            rating: self.rating,
            rating_count: None,
            price_range: self.price_range,
            latitude: self.latitude,
            longitude: self.longitude,
            score: None,
        }
    }
}

#[derive(Deserialize)]
struct RestaurantRow {
    id: u64,
    name: String,
    address: Option<String>,
    rating: Option<f64>,
    price_range: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl RestaurantRow {
    fn into_record(self) -> LocationRecord {
        LocationRecord {
            id: format!("restaurant_{}", self.id),
            name: self.name,
            detail: self.address.unwrap_or_default(),
            kind: LocationKind::Restaurant,
            rating: self.rating,
            rating_count: None,
            price_range: self.price_range,
            latitude: self.latitude,
            longitude: self.longitude,
            score: None,
        }
    }
}

#[derive(Deserialize)]
struct CheckinPlaceRow {
    id: u64,
    name: String,
    address: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl CheckinPlaceRow {
    fn into_record(self) -> LocationRecord {
        LocationRecord {
            id: format!("place_{}", self.id),
            name: self.name,
            detail: self.address.unwrap_or_default(),
            kind: LocationKind::Attraction,
            rating: None,
            rating_count: None,
            price_range: None,
            latitude: self.latitude,
            longitude: self.longitude,
            score: None,
        }
    }
}
