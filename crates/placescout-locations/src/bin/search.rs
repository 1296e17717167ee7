//! One-shot search against configured sources.
//!
//! Usage: `placescout <query...>`
//!
//! Environment:
//! - `PLACESCOUT_API_BASE` — internal API base URL
//! - `PLACESCOUT_PLACES_BASE` — places proxy base URL (defaults to API base)
//! - `PLACESCOUT_API_TOKEN` — optional bearer token
//! - `RUST_LOG` — standard env filter (default: "placescout=debug")
//!
//! Prints one JSON record per line.

use std::sync::Arc;

use tracing::info;

use placescout_locations::{LocationService, LocationServiceConfig};
use placescout_sources::{InternalApiClient, PlacesClient};

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "placescout=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let query: String = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.trim().is_empty() {
        eprintln!("usage: placescout <query>");
        std::process::exit(2);
    }

    let internal = match InternalApiClient::from_env() {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("failed to configure internal API client: {e}");
            std::process::exit(1);
        }
    };
    let external = match PlacesClient::from_env() {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("failed to configure places client: {e}");
            std::process::exit(1);
        }
    };

    let service = LocationService::new(internal, external, LocationServiceConfig::from_env());

    let results = service.search(&query).await;
    for record in &results {
        match serde_json::to_string(record) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("failed to serialize record {}: {e}", record.id),
        }
    }

    let stats = service.cache_stats().await;
    info!(
        result_count = results.len(),
        collection_entries = stats.collections.entries,
        "Search finished"
    );
}
