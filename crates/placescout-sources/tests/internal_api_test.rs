//! HTTP-level tests for the internal API client.

use placescout_core::{InternalSource, LocationKind};
use placescout_sources::{InternalApiClient, InternalApiConfig};
use wiremock::matchers::{bearer_token, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> InternalApiClient {
    InternalApiClient::new(InternalApiConfig {
        base_url: server.uri(),
        ..InternalApiConfig::default()
    })
    .expect("Failed to build client")
}

#[tokio::test]
async fn test_fetch_hotels_maps_rows() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "data": [
            {
                "id": 1,
                "name": "Hotel Binh Minh",
                "address": "1 Beach Rd",
                "rating": 4.5,
                "price_range": "$$",
                "latitude": 16.05,
                "longitude": 108.24
            },
            { "id": 2, "name": "Riverside Lodge" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/hotels"))
        .and(query_param("per_page", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = client_for(&mock_server).fetch_hotels().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, "hotel_1");
    assert_eq!(records[0].kind, LocationKind::Hotel);
    assert_eq!(records[0].detail, "1 Beach Rd");
    assert_eq!(records[0].rating, Some(4.5));
    // Optional fields missing from the payload land as None/empty.
    assert_eq!(records[1].id, "hotel_2");
    assert_eq!(records[1].detail, "");
    assert!(records[1].rating.is_none());
}

#[tokio::test]
async fn test_fetch_attractions_uses_checkin_places_path() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "data": [ { "id": 9, "name": "Dragon Bridge", "address": "Han River" } ]
    });

    Mock::given(method("GET"))
        .and(path("/checkin-places"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = client_for(&mock_server).fetch_attractions().await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, "place_9");
    assert_eq!(records[0].kind, LocationKind::Attraction);
}

#[tokio::test]
async fn test_ids_distinct_across_collections() {
    let mock_server = MockServer::start().await;

    // Same numeric row id in every collection; namespacing keeps the
    // record ids distinct.
    let body = serde_json::json!({ "data": [ { "id": 1, "name": "Same Row Id" } ] });

    for endpoint in ["/hotels", "/restaurants", "/checkin-places"] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server);
    let mut ids = vec![
        client.fetch_hotels().await.unwrap()[0].id.clone(),
        client.fetch_restaurants().await.unwrap()[0].id.clone(),
        client.fetch_attractions().await.unwrap()[0].id.clone(),
    ];
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[tokio::test]
async fn test_bearer_token_attached_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hotels"))
        .and(bearer_token("secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = InternalApiClient::new(InternalApiConfig {
        base_url: mock_server.uri(),
        api_token: Some("secret-token".to_string()),
        ..InternalApiConfig::default()
    })
    .unwrap();

    assert!(client.fetch_hotels().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_2xx_is_source_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/restaurants"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .fetch_restaurants()
        .await
        .unwrap_err();

    assert_eq!(err.failed_source(), Some("restaurants"));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_malformed_payload_is_source_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hotels"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).fetch_hotels().await.unwrap_err();
    assert_eq!(err.failed_source(), Some("hotels"));
}

#[tokio::test]
async fn test_health_check() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hotels"))
        .and(query_param("per_page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })))
        .mount(&mock_server)
        .await;

    assert!(client_for(&mock_server).health_check().await.unwrap());
}
