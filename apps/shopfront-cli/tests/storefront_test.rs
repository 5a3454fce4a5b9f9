use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use httpmock::prelude::*;
use shopfront_app::app::AppHandle;
use shopfront_app::build_app;
use shopfront_app::commands::{cart, product};
use shopfront_app::config::AppConfig;
use shopfront_app::error::ErrorCode;
use shopfront_app::state::{CartState, CatalogState};
use shopfront_catalog::{HttpCatalog, StaticCatalog};
use shopfront_core::{CartChange, ManualClock};

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
            "id": 7,
            "title": "White Gold Plated Princess",
            "price": 9.99,
            "description": "Classic Created Wedding Engagement Solitaire Diamond Promise Ring.",
            "category": "jewelery",
            "image": "https://fakestoreapi.com/img/71YAIFU48IL._AC_UL640_QL65_ML3_.jpg",
            "rating": { "rate": 3.0, "count": 400 }
        }
    ])
}

fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
    ))
}

fn offline_app(clock: Arc<ManualClock>) -> AppHandle {
    build_app(
        AppConfig::default(),
        Arc::new(StaticCatalog::sample()),
        clock,
    )
}

#[tokio::test]
async fn test_failed_refresh_keeps_list_and_cart() {
    let server = MockServer::start();
    let mut ok = server.mock(|when, then| {
        when.method(GET).path("/products").query_param("limit", "20");
        then.status(200).json_body(listing());
    });

    let mut config = AppConfig::default();
    config.catalog.base_url = server.base_url();
    let catalog = HttpCatalog::new(&config.catalog).unwrap();
    let app = build_app(config, Arc::new(catalog), clock());

    let home = product::load_products(&app).await.unwrap();
    ok.assert();
    assert_eq!(home.products.len(), 2);
    assert_eq!(home.products[1].price_label, "$9.99");
    assert_eq!(home.products[1].rating.count, 400);

    product::buy(&app, 7).unwrap();

    ok.delete();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(503);
    });

    let home = product::refresh_products(&app).await.unwrap();
    assert_eq!(home.products.len(), 2);
    let load_error = home.load_error.unwrap();
    assert_eq!(load_error.code, ErrorCode::CatalogUnavailable);
    assert!(load_error.message.contains("503"));
    assert!(!home.is_refreshing);
    assert_eq!(home.badge_count, 1);

    let view = cart::view_cart(&app).unwrap();
    assert_eq!(view.total_label, "$9.99");
}

#[tokio::test]
async fn test_first_load_failure_shows_empty_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200).body("<html>maintenance</html>");
    });

    let mut config = AppConfig::default();
    config.catalog.base_url = server.base_url();
    let catalog = HttpCatalog::new(&config.catalog).unwrap();
    let app = build_app(config, Arc::new(catalog), clock());

    let home = product::load_products(&app).await.unwrap();
    assert!(home.products.is_empty());
    assert!(!home.is_fetching);
    assert_eq!(home.load_error.unwrap().code, ErrorCode::CatalogUnavailable);

    let err = product::buy(&app, 1).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[tokio::test]
async fn test_subscriber_sees_every_cart_command() {
    let app = offline_app(clock());
    product::load_products(&app).await.unwrap();
    let mut events = app.state::<CartState>().unwrap().subscribe();

    product::buy(&app, 1).unwrap();
    product::buy(&app, 1).unwrap();
    cart::increase(&app, 1).unwrap();
    cart::decrease(&app, 1).unwrap();
    cart::decrease(&app, 1).unwrap();
    cart::decrease(&app, 1).unwrap();
    cart::remove(&app, 1).unwrap();

    let mut seen = Vec::new();
    while let Ok(event) = events.try_recv() {
        seen.push((event.product_id, event.change));
    }

    assert_eq!(
        seen,
        vec![
            (1, CartChange::Added),
            (1, CartChange::QuantityChanged { quantity: 2 }),
            (1, CartChange::QuantityChanged { quantity: 3 }),
            (1, CartChange::QuantityChanged { quantity: 2 }),
            (1, CartChange::QuantityChanged { quantity: 1 }),
            (1, CartChange::Unchanged),
            (1, CartChange::Removed),
        ]
    );
    assert!(cart::view_cart(&app).unwrap().lines.is_empty());
}

#[tokio::test]
async fn test_entries_age_out_of_the_cart_screen() {
    let clock = clock();
    let app = offline_app(clock.clone());
    product::load_products(&app).await.unwrap();

    product::buy(&app, 3).unwrap();
    clock.advance(Duration::days(2) - Duration::milliseconds(1));
    assert_eq!(cart::view_cart(&app).unwrap().lines.len(), 1);

    clock.advance(Duration::milliseconds(1));
    let view = cart::view_cart(&app).unwrap();
    assert!(view.lines.is_empty());
    assert_eq!(view.total_label, "$0.00");
    assert_eq!(view.badge_count, 1);
    assert_eq!(cart::checkout(&app).unwrap_err().code, ErrorCode::ValidationError);

    // Re-adding bumps the old entry; its timestamp stays where it was.
    product::buy(&app, 3).unwrap();
    assert!(cart::view_cart(&app).unwrap().lines.is_empty());
    assert_eq!(
        app.state::<CartState>().unwrap().get(3).unwrap().quantity,
        2
    );
}

#[tokio::test]
async fn test_oversized_price_rejects_listing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200).json_body(serde_json::json!([
            {
                "id": 4,
                "title": "Superyacht",
                "price": 50000000000000000u64,
                "description": "",
                "category": "boats",
                "image": "",
                "rating": { "rate": 4.0, "count": 1 }
            }
        ]));
    });

    let mut config = AppConfig::default();
    config.catalog.base_url = server.base_url();
    let catalog = HttpCatalog::new(&config.catalog).unwrap();
    let app = build_app(config, Arc::new(catalog), clock());

    let home = product::load_products(&app).await.unwrap();
    assert!(home.products.is_empty());
    assert_eq!(home.load_error.unwrap().code, ErrorCode::CatalogUnavailable);

    let err = product::buy(&app, 4).unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(cart::view_cart(&app).unwrap().total_label, "$0.00");
}

#[tokio::test]
async fn test_commands_without_cart_state_fail() {
    let mut app = AppHandle::new();
    app.manage(CatalogState::new(Arc::new(StaticCatalog::sample()), None));

    let err = cart::view_cart(&app).unwrap_err();
    assert_eq!(err.code, ErrorCode::StateNotManaged);
    assert!(err.is_fatal());

    let err = product::load_products(&app).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StateNotManaged);
}
