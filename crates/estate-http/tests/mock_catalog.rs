//! Mock catalog tests for estate-http.
//!
//! These tests use wiremock to stand in for the WordPress REST API.

use std::time::Duration;

use estate_core::error::NetworkError;
use estate_core::{
    ApiUrl, Catalog, Error, FilterKey, HOME_PAGE_SIZE, ListingId, PageNumber, SEARCH_PAGE_SIZE,
};
use estate_http::{CatalogConfig, HttpCatalog};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create an API URL from a mock server.
fn mock_api_url(server: &MockServer) -> ApiUrl {
    ApiUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap()
}

fn mock_catalog(server: &MockServer) -> HttpCatalog {
    HttpCatalog::new(mock_api_url(server)).unwrap()
}

fn property(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": { "rendered": title },
        "property_type": "Duplex",
        "property_city": "lekki",
        "property_meta": { "fave_property_price": [format!("{},000,000", id)] },
        "_embedded": {
            "wp:featuredmedia": [{ "source_url": format!("https://cdn.example/{}.jpg", id) }]
        }
    })
}

// ============================================================================
// Listing pages
// ============================================================================

#[tokio::test]
async fn test_fetch_page_normalises_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/properties"))
        .and(query_param("_embed", ""))
        .and(query_param("per_page", "10"))
        .and(query_param("page", "1"))
        .and(query_param_is_missing("property_type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            property(1, "Ocean View Duplex"),
            { "id": 2, "title": { "rendered": "Bare Plot" }, "property_meta": [] }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = mock_catalog(&server);
    let listings = catalog
        .fetch_page(&FilterKey::All, PageNumber::FIRST, HOME_PAGE_SIZE)
        .await
        .unwrap();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].id, ListingId::from(1));
    assert_eq!(listings[0].title, "Ocean View Duplex");
    assert_eq!(listings[0].city, "Lekki");
    assert_eq!(listings[0].price, "1,000,000");
    assert_eq!(
        listings[0].featured_image_url.as_deref(),
        Some("https://cdn.example/1.jpg")
    );
    assert_eq!(listings[1].property_type, "Unknown");
    assert_eq!(listings[1].price, "Not Available");
    assert_eq!(listings[1].featured_image_url, None);
}

#[tokio::test]
async fn test_fetch_page_with_type_filter() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/properties"))
        .and(query_param("property_type", "14"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([property(40, "Terrace")])))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = mock_catalog(&server);
    let page = PageNumber::new(3).unwrap();
    let listings = catalog
        .fetch_page(&FilterKey::new("14").unwrap(), page, SEARCH_PAGE_SIZE)
        .await
        .unwrap();

    assert_eq!(listings.len(), 1);
}

#[tokio::test]
async fn test_empty_page_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let catalog = mock_catalog(&server);
    let listings = catalog
        .fetch_page(&FilterKey::All, PageNumber::new(4).unwrap(), HOME_PAGE_SIZE)
        .await
        .unwrap();

    assert!(listings.is_empty());
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_error_body_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/properties"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "rest_post_invalid_page_number",
            "message": "The page number requested is larger than the number of pages available.",
            "data": { "status": 400 }
        })))
        .mount(&server)
        .await;

    let catalog = mock_catalog(&server);
    let err = catalog
        .fetch_page(&FilterKey::All, PageNumber::new(9).unwrap(), HOME_PAGE_SIZE)
        .await
        .unwrap_err();

    match &err {
        Error::Network(NetworkError::Status { status, code, .. }) => {
            assert_eq!(*status, 400);
            assert_eq!(code.as_deref(), Some("rest_post_invalid_page_number"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("400"));
}

#[tokio::test]
async fn test_server_error_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/properties"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let catalog = mock_catalog(&server);
    let err = catalog
        .fetch_page(&FilterKey::All, PageNumber::FIRST, HOME_PAGE_SIZE)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Network(NetworkError::Status {
            status: 500,
            code: None,
            message: None
        })
    ));
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/properties"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "not": "a list" })))
        .mount(&server)
        .await;

    let catalog = mock_catalog(&server);
    let err = catalog
        .fetch_page(&FilterKey::All, PageNumber::FIRST, HOME_PAGE_SIZE)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network(NetworkError::Decode { .. })));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/properties"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = CatalogConfig::new(mock_api_url(&server)).with_timeout(Duration::from_millis(200));
    let catalog = HttpCatalog::with_config(config).unwrap();
    let err = catalog
        .fetch_page(&FilterKey::All, PageNumber::FIRST, HOME_PAGE_SIZE)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Network(NetworkError::Timeout { duration_ms: 200 })
    ));
}

#[tokio::test]
async fn test_unreachable_server() {
    // Bind and drop a server to get a port nothing listens on.
    let api = {
        let server = MockServer::start().await;
        mock_api_url(&server)
    };

    let catalog = HttpCatalog::new(api).unwrap();
    let err = catalog.property_types().await.unwrap_err();
    assert!(err.is_network());
}

// ============================================================================
// Types and detail
// ============================================================================

#[tokio::test]
async fn test_property_types() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/property_type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 14, "name": "Duplex", "slug": "duplex", "count": 31 },
            { "id": 20, "name": "Land", "slug": "land", "count": 4 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = mock_catalog(&server);
    let types = catalog.property_types().await.unwrap();

    assert_eq!(types.len(), 2);
    assert_eq!(types[0].id, "14");
    assert_eq!(types[0].name, "Duplex");
    assert_eq!(types[1].name, "Land");
}

#[tokio::test]
async fn test_listing_detail_with_features() {
    let server = MockServer::start().await;

    let mut record = property(318, "Waterfront Mansion");
    record["content"] = json!({
        "rendered": "<p>Exquisite home<br />\n&#8211; 6 bedrooms<br />\n&#8211; Boat dock<br />\nEnquire today</p>"
    });

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/properties/318"))
        .and(query_param("_embed", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(record))
        .expect(1)
        .mount(&server)
        .await;

    let catalog = mock_catalog(&server);
    let detail = catalog.listing(&ListingId::from(318)).await.unwrap();

    assert_eq!(detail.listing.title, "Waterfront Mansion");
    assert_eq!(detail.features, vec!["6 bedrooms", "Boat dock"]);
}

#[tokio::test]
async fn test_missing_listing_is_a_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/properties/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "rest_post_invalid_id",
            "message": "Invalid post ID.",
            "data": { "status": 404 }
        })))
        .mount(&server)
        .await;

    let catalog = mock_catalog(&server);
    let err = catalog.listing(&ListingId::from(999)).await.unwrap_err();

    assert!(err.to_string().contains("rest_post_invalid_id"));
}

#[tokio::test]
async fn test_non_numeric_listing_id_is_rejected() {
    let server = MockServer::start().await;

    let catalog = mock_catalog(&server);
    let id: ListingId = "../users".parse().unwrap();
    let err = catalog.listing(&id).await.unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
