//! Proxy surface parameter handling.
//!
//! Exercises the `/api/movies` selector logic through the real router with
//! `tower::ServiceExt::oneshot`. Every case here resolves before any
//! network call would happen (validation failures, the missing-key path,
//! and the blank-query short circuit), so no catalog is required.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use secrecy::SecretString;
use tower::ServiceExt;
use url::Url;

use marquee_core::MoviePage;
use marquee_server::config::{CatalogConfig, ServerConfig};
use marquee_server::routes;
use marquee_server::state::AppState;

fn app(api_key: Option<&str>) -> Router {
    let config = ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 3000,
        catalog: CatalogConfig {
            base_url: Url::parse("https://api.themoviedb.org/3").unwrap(),
            image_base_url: Url::parse("https://image.tmdb.org/t/p/").unwrap(),
            api_key: api_key.map(SecretString::from),
        },
        sentry_dsn: None,
    };

    routes::routes().with_state(AppState::new(config))
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();

    (status, body)
}

#[tokio::test]
async fn missing_selector_is_bad_request() {
    let (status, body) = get(app(Some("k")), "/api/movies").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing query, id, or category parameter"
    );
}

#[tokio::test]
async fn unknown_category_is_bad_request() {
    let (status, body) = get(app(Some("k")), "/api/movies?category=trending").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Unknown category: trending");
}

#[tokio::test]
async fn zero_page_is_bad_request() {
    let (status, _) = get(app(Some("k")), "/api/movies?category=popular&page=0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_api_key_is_server_error() {
    let (status, body) = get(app(None), "/api/movies?query=arrival").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Catalog API key not configured");
}

#[tokio::test]
async fn blank_query_returns_empty_page_without_network() {
    // No API key configured: anything that tried the network (or even the
    // key check) would 500, so a 200 proves the short circuit.
    let (status, body) = get(app(None), "/api/movies?query=%20%20").await;

    assert_eq!(status, StatusCode::OK);
    let page: MoviePage = serde_json::from_value(body).unwrap();
    assert_eq!(page, MoviePage::empty());
}

#[tokio::test]
async fn health_is_not_part_of_proxy_routes() {
    // The proxy router only carries /api/movies; /health lives in the
    // binary's root router.
    let response = app(Some("k"))
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
