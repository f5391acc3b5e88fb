use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use catalog_aggregator::{router, Aggregator, HttpCatalogClient};
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn app(server: &MockServer) -> Router {
    let client = HttpCatalogClient::new(&server.base_url()).unwrap();
    router(Arc::new(Aggregator::new(client, 3)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn mount_item(server: &MockServer, id: u32, name: &str) {
    let species_url = server.url(format!("/pokemon-species/{}/", id));
    server.mock(|when, then| {
        when.method(GET).path(format!("/pokemon/{}/", id));
        then.status(200).json_body(json!({
            "name": name,
            "height": 4,
            "weight": 60,
            "species": {"url": species_url}
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path(format!("/pokemon-species/{}/", id));
        then.status(200).json_body(json!({"name": name}));
    });
}

#[tokio::test]
async fn test_returns_records_as_json_array() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pokemon").query_param("limit", "3");
        then.status(200).json_body(json!({"results": [
            {"name": "pikachu", "url": server.url("/pokemon/25/")},
            {"name": "missingno", "url": server.url("/pokemon/0/")},
            {"name": "mr-mime", "url": server.url("/pokemon/122/")}
        ]}));
    });
    mount_item(&server, 25, "pikachu");
    mount_item(&server, 122, "mr-mime");
    server.mock(|when, then| {
        when.method(GET).path("/pokemon/0/");
        then.status(404).body("Not Found");
    });

    let (status, body) = get(app(&server), "/api/pokemon?count=3").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json,
        json!([
            {"name": "Pikachu", "height": 4, "weight": 60, "species": "Pikachu"},
            {"name": "Mr Mime", "height": 4, "weight": 60, "species": "Mr Mime"}
        ])
    );
}

#[tokio::test]
async fn test_count_defaults_to_twenty() {
    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/pokemon").query_param("limit", "20");
        then.status(200).json_body(json!({"results": []}));
    });

    let (status, body) = get(app(&server), "/api/pokemon").await;

    list_mock.assert();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn test_out_of_range_count_is_bad_request() {
    let server = MockServer::start();
    let list_mock = server.mock(|when, then| {
        when.method(GET).path("/pokemon");
        then.status(200).json_body(json!({"results": []}));
    });

    for uri in ["/api/pokemon?count=0", "/api/pokemon?count=101", "/api/pokemon?count=-3"] {
        let (status, body) = get(app(&server), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body, "Count must be between 1 and 100");
    }

    list_mock.assert_hits(0);
}

#[tokio::test]
async fn test_non_numeric_count_is_bad_request() {
    let server = MockServer::start();

    let (status, _) = get(app(&server), "/api/pokemon?count=lots").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_failure_is_internal_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/pokemon");
        then.status(500).body("upstream exploded");
    });

    let (status, body) = get(app(&server), "/api/pokemon?count=5").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Error fetching Pokemon data");
}

#[tokio::test]
async fn test_health_does_not_call_catalog() {
    let server = MockServer::start();
    let any_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let (status, body) = get(app(&server), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
    any_mock.assert_hits(0);
}
