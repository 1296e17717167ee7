//! Location record types shared across all placescout crates.

use serde::{Deserialize, Serialize};

/// Which class of source a record came from.
///
/// Internal kinds are backed by the platform's own database; `External`
/// records come from the third-party places provider and are always ranked
/// as a class after internal results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    Hotel,
    Restaurant,
    Attraction,
    External,
}

impl LocationKind {
    /// True for records backed by the internal API.
    pub fn is_internal(&self) -> bool {
        !matches!(self, LocationKind::External)
    }
}

/// A single location candidate, normalized from whichever source produced it.
///
/// `id` is namespaced by source (`hotel_<n>`, `restaurant_<n>`, `place_<n>`,
/// `external_<place_id>`) so ids stay globally unique across heterogeneous
/// backends without any central coordination. `score` is assigned per query
/// during search and is never part of a cached collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
    /// Address or other one-line detail text.
    pub detail: String,
    pub kind: LocationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Relevance score for the query that produced this record, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl LocationRecord {
    /// Create a record with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        detail: impl Into<String>,
        kind: LocationKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            detail: detail.into(),
            kind,
            rating: None,
            rating_count: None,
            price_range: None,
            latitude: None,
            longitude: None,
            score: None,
        }
    }

    /// Set the rating (builder style, used heavily in tests).
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the coordinates.
    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }
}
