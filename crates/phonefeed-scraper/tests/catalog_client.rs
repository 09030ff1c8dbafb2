//! Integration tests for `CatalogClient`.
//!
//! Uses `wiremock` to stand up a local HTTP server for each test so no
//! real network traffic is made.

use std::time::Duration;

use wiremock::matchers::{header, headers, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use phonefeed_scraper::{CatalogClient, ScraperError};

const TEST_UA: &str = "phonefeed-test/0.1";

/// 5-second timeouts, descriptive UA.
fn test_client() -> CatalogClient {
    CatalogClient::new(TEST_UA, 5, 5).expect("failed to build test CatalogClient")
}

#[tokio::test]
async fn fetch_catalog_returns_html_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shop/celulares/"))
        .and(query_param("resultsPerPage", "9999999"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>catalog</html>"))
        .mount(&server)
        .await;

    let url = format!(
        "{}/shop/celulares/?order=product.date_add.desc&resultsPerPage=9999999",
        server.uri()
    );
    let body = test_client().fetch_catalog(&url).await;

    assert!(body.is_ok(), "expected Ok, got: {body:?}");
    assert_eq!(body.unwrap(), "<html>catalog</html>");
}

#[tokio::test]
async fn fetch_catalog_sends_browser_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shop"))
        .and(header("user-agent", TEST_UA))
        .and(headers(
            "accept",
            vec![
                "text/html",
                "application/xhtml+xml",
                "application/xml;q=0.9",
                "*/*;q=0.8",
            ],
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client()
        .fetch_catalog(&format!("{}/shop", server.uri()))
        .await;
    assert!(result.is_ok(), "expected headers to match, got: {result:?}");
}

#[tokio::test]
async fn fetch_catalog_maps_404_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing", server.uri());
    let err = test_client().fetch_catalog(&url).await.unwrap_err();
    assert!(
        matches!(err, ScraperError::NotFound { url: ref u } if *u == url),
        "expected NotFound, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_catalog_maps_server_error_to_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client()
        .fetch_catalog(&format!("{}/shop", server.uri()))
        .await
        .unwrap_err();
    assert!(
        matches!(err, ScraperError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_catalog_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = CatalogClient::new(TEST_UA, 1, 1).expect("client");
    let err = client
        .fetch_catalog(&format!("{}/shop", server.uri()))
        .await
        .unwrap_err();
    assert!(
        matches!(err, ScraperError::Http(ref e) if e.is_timeout()),
        "expected timeout, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_catalog_rejects_invalid_url() {
    let err = test_client().fetch_catalog("not a url").await.unwrap_err();
    assert!(
        matches!(err, ScraperError::InvalidUrl { .. }),
        "expected InvalidUrl, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_image_returns_bytes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/img/a15.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xFF, 0xD8, 0xFF, 0xE0]))
        .mount(&server)
        .await;

    let bytes = test_client()
        .fetch_image(&format!("{}/img/a15.jpg", server.uri()))
        .await
        .expect("image bytes");
    assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF, 0xE0]);
}
