use httpmock::prelude::*;
use shopfront_catalog::{CatalogConfig, CatalogError, CatalogSource, HttpCatalog};

fn config_for(server: &MockServer) -> CatalogConfig {
    CatalogConfig {
        base_url: server.base_url(),
        limit: 20,
        timeout_secs: 5,
    }
}

fn listing() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use and walks in the forest.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Mens Casual Premium Slim Fit T-Shirts",
            "price": 22.3,
            "description": "Slim-fitting style, contrast raglan long sleeve.",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
            "rating": { "rate": 4.1, "count": 259 }
        }
    ])
}

#[tokio::test]
async fn test_fetch_products_decodes_listing() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/products").query_param("limit", "20");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(listing());
    });

    let catalog = HttpCatalog::new(&config_for(&server)).unwrap();
    let products = catalog.fetch_products(None).await.unwrap();

    mock.assert();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].price.cents(), 10995);
    assert_eq!(products[1].price.cents(), 2230);
    assert_eq!(products[1].rating.count, 259);
}

#[tokio::test]
async fn test_fetch_products_passes_explicit_limit() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/products").query_param("limit", "5");
        then.status(200).json_body(serde_json::json!([]));
    });

    let catalog = HttpCatalog::new(&config_for(&server)).unwrap();
    let products = catalog.fetch_products(Some(5)).await.unwrap();

    mock.assert();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(500).body("upstream down");
    });

    let catalog = HttpCatalog::new(&config_for(&server)).unwrap();
    let err = catalog.fetch_products(None).await.unwrap_err();

    assert!(matches!(err, CatalogError::Status { status: 500, .. }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_malformed_body_maps_to_decode() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(r#"{"message": "not a list"}"#);
    });

    let catalog = HttpCatalog::new(&config_for(&server)).unwrap();
    let err = catalog.fetch_products(None).await.unwrap_err();

    assert!(matches!(err, CatalogError::Decode(_)));
}

#[tokio::test]
async fn test_invalid_product_rejects_whole_listing() {
    let server = MockServer::start();
    let mut body = listing();
    body[1]["price"] = serde_json::json!(-4.0);
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200).json_body(body);
    });

    let catalog = HttpCatalog::new(&config_for(&server)).unwrap();
    let err = catalog.fetch_products(None).await.unwrap_err();

    assert!(matches!(err, CatalogError::InvalidProduct(_)));
}

#[tokio::test]
async fn test_base_url_with_path_prefix() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/products");
        then.status(200).json_body(listing());
    });

    let mut config = config_for(&server);
    config.base_url = server.url("/api/v1");
    let catalog = HttpCatalog::new(&config).unwrap();

    assert_eq!(catalog.fetch_products(None).await.unwrap().len(), 2);
    mock.assert();
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = CatalogConfig {
        base_url: "not a url".into(),
        ..CatalogConfig::default()
    };
    assert!(HttpCatalog::new(&config).is_err());
}
