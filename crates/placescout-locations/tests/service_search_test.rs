//! Search behavior tests using deterministic in-memory sources.

use std::sync::Arc;

use placescout_core::{LocationKind, LocationRecord};
use placescout_locations::{LocationService, LocationServiceConfig};
use placescout_search::MergeConfig;
use placescout_sources::mock::{MockExternalSource, MockInternalSource};

fn hotel(id: u32, name: &str, rating: f64) -> LocationRecord {
    LocationRecord::new(format!("hotel_{id}"), name, "", LocationKind::Hotel).with_rating(rating)
}

fn restaurant(id: u32, name: &str, detail: &str) -> LocationRecord {
    LocationRecord::new(
        format!("restaurant_{id}"),
        name,
        detail,
        LocationKind::Restaurant,
    )
}

fn external(place_id: &str, name: &str) -> LocationRecord {
    LocationRecord::new(
        format!("external_{place_id}"),
        name,
        "",
        LocationKind::External,
    )
}

fn service_with(
    internal: MockInternalSource,
    external: MockExternalSource,
) -> LocationService {
    LocationService::new(
        Arc::new(internal),
        Arc::new(external),
        LocationServiceConfig::default(),
    )
}

#[tokio::test]
async fn test_short_query_returns_empty_without_any_fetch() {
    let internal = MockInternalSource::new().with_hotels(vec![hotel(1, "Hotel A", 4.0)]);
    let external = MockExternalSource::new().with_results(vec![external("x", "B")]);
    let service = service_with(internal.clone(), external.clone());

    assert!(service.search("a").await.is_empty());
    assert!(service.search("  ").await.is_empty());
    assert!(service.search("").await.is_empty());

    assert_eq!(internal.total_calls(), 0);
    assert_eq!(external.call_count(), 0);
}

#[tokio::test]
async fn test_internal_results_ordered_before_external() {
    let internal =
        MockInternalSource::new().with_hotels(vec![hotel(1, "Saigon Central Hotel", 4.0)]);
    let ext =
        MockExternalSource::new().with_results(vec![external("g1", "Saigon Rooftop Bar")]);
    let service = service_with(internal, ext);

    let results = service.search("saigon").await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].kind, LocationKind::Hotel);
    assert_eq!(results[1].kind, LocationKind::External);
    // Internal records carry a per-query score; external ones do not.
    assert!(results[0].score.is_some());
    assert!(results[1].score.is_none());
}

#[tokio::test]
async fn test_internal_wins_name_collision() {
    let internal = MockInternalSource::new().with_hotels(vec![hotel(1, "Hotel Binh Minh", 4.5)]);
    let ext = MockExternalSource::new().with_results(vec![external("g1", "hotel binh minh")]);
    let service = service_with(internal, ext);

    let results = service.search("binh minh").await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "hotel_1");
    assert_eq!(results[0].kind, LocationKind::Hotel);
}

#[tokio::test]
async fn test_diacritics_keep_records_distinct() {
    // Normalization is lowercase + trim only; "Bình" and "Binh" differ, so
    // the diacritic spelling neither matches an ASCII query nor dedupes
    // against the ASCII-named external record.
    let internal = MockInternalSource::new().with_hotels(vec![hotel(1, "Hotel Bình Minh", 4.5)]);
    let ext = MockExternalSource::new().with_results(vec![external("g1", "Hotel Binh Minh")]);
    let service = service_with(internal, ext);

    // ASCII query: the accented internal name has no match signal, so only
    // the external record (returned by the provider) survives.
    let ascii = service.search("binh minh").await;
    assert_eq!(ascii.len(), 1);
    assert_eq!(ascii[0].id, "external_g1");

    // Accented query: the internal name matches; the external record is
    // still whatever the provider returned, and the two do not dedupe.
    let accented = service.search("bình minh").await;
    assert_eq!(accented.len(), 2);
    assert_eq!(accented[0].id, "hotel_1");
    assert_eq!(accented[1].id, "external_g1");

    // A query matching both names keeps both records.
    let both = service.search("hotel").await;
    assert_eq!(both.len(), 2);
}

#[tokio::test]
async fn test_zero_score_internal_records_filtered() {
    let internal = MockInternalSource::new()
        .with_hotels(vec![hotel(1, "Hotel Binh Minh", 4.5)])
        .with_restaurants(vec![restaurant(1, "Riverside Grill", "2 Hill St")]);
    let service = service_with(internal, MockExternalSource::new());

    let results = service.search("binh").await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "hotel_1");
}

#[tokio::test]
async fn test_detail_match_surfaces_record() {
    let internal = MockInternalSource::new()
        .with_restaurants(vec![restaurant(1, "Pho Hoa", "12 Binh Minh Street")]);
    let service = service_with(internal, MockExternalSource::new());

    let results = service.search("binh minh").await;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "restaurant_1");
    // Detail-only match: +10, no name tier, no rating.
    assert_eq!(results[0].score, Some(10));
}

#[tokio::test]
async fn test_partial_failure_external_down() {
    let internal = MockInternalSource::new().with_hotels(vec![
        hotel(1, "Hue Garden Hotel", 4.0),
        hotel(2, "Hue Riverside Hotel", 4.5),
        hotel(3, "Hue Citadel View", 3.9),
    ]);
    let ext = MockExternalSource::new().failing();
    let service = service_with(internal, ext);

    // Must resolve, not error, and still carry the internal matches.
    let results = service.search("hue").await;
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.kind.is_internal()));
}

#[tokio::test]
async fn test_partial_failure_one_internal_collection_down() {
    let internal = MockInternalSource::new()
        .with_hotels(vec![hotel(1, "Hoi An Hotel", 4.0)])
        .with_failing_source("restaurants")
        .with_attractions(vec![LocationRecord::new(
            "place_1",
            "Hoi An Lantern Bridge",
            "Old Town",
            LocationKind::Attraction,
        )]);
    let service = service_with(internal, MockExternalSource::new());

    let results = service.search("hoi an").await;

    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["hotel_1", "place_1"]);
}

#[tokio::test]
async fn test_all_sources_down_resolves_empty() {
    let internal = MockInternalSource::new()
        .with_failing_source("hotels")
        .with_failing_source("restaurants")
        .with_failing_source("attractions");
    let ext = MockExternalSource::new().failing();
    let service = service_with(internal, ext);

    assert!(service.search("anything").await.is_empty());
}

#[tokio::test]
async fn test_caps_bound_the_result_list() {
    let many_hotels: Vec<LocationRecord> = (0..30)
        .map(|i| hotel(i, &format!("Hanoi Hotel {i}"), 4.0))
        .collect();
    let many_external: Vec<LocationRecord> = (0..20)
        .map(|i| external(&format!("g{i}"), &format!("Hanoi Cafe {i}")))
        .collect();

    let config = LocationServiceConfig {
        merge: MergeConfig {
            internal_limit: 4,
            external_limit: 2,
        },
        ..LocationServiceConfig::default()
    };
    let service = LocationService::new(
        Arc::new(MockInternalSource::new().with_hotels(many_hotels)),
        Arc::new(MockExternalSource::new().with_results(many_external)),
        config,
    );

    let results = service.search("hanoi").await;

    assert_eq!(results.len(), 6);
    assert!(results[..4].iter().all(|r| r.kind.is_internal()));
    assert!(results[4..]
        .iter()
        .all(|r| r.kind == LocationKind::External));
}

#[tokio::test]
async fn test_all_locations_ids_pairwise_distinct() {
    let internal = MockInternalSource::new()
        .with_hotels(vec![hotel(1, "A", 4.0), hotel(2, "B", 4.0)])
        .with_restaurants(vec![restaurant(1, "C", "")])
        .with_attractions(vec![LocationRecord::new(
            "place_1",
            "D",
            "",
            LocationKind::Attraction,
        )]);
    let service = service_with(internal, MockExternalSource::new());

    let all = service.all_locations().await;
    let mut ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
    let before = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[tokio::test]
async fn test_search_places_fails_soft() {
    let service = service_with(MockInternalSource::new(), MockExternalSource::new().failing());
    // No panic, no error surface; just empty.
    assert!(service.search_places("da nang").await.is_empty());
}

#[tokio::test]
async fn test_sources_healthy_reports_per_source() {
    let service = service_with(
        MockInternalSource::new(),
        MockExternalSource::new().failing(),
    );

    let health = service.sources_healthy().await;
    assert!(health.internal);
    assert!(!health.external);
}
