//! # Product Commands
//!
//! Home screen (product list) and product detail screen.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  launch ──► load_products() ──► list (or empty + notice on failure)    │
//! │                                                                         │
//! │  refresh ─► refresh_products() ─► list replaced, or previous list kept │
//! │                                                                         │
//! │  buy 5 ───► buy() ──────────────► cart.add_to_cart + banner (2s)       │
//! │                                                                         │
//! │  show 5 ──► product_detail() ───► detail ──► add_to_cart() + banner    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed fetch is never an error at this layer. The screen comes back
//! with whatever list it had and a `load_error` the UI can surface.

use serde::Serialize;
use shopfront_core::{CartChange, Product, ProductId, Rating};
use tracing::debug;

use crate::app::AppHandle;
use crate::error::ApiError;
use crate::state::{BannerState, CartState, CatalogState, ConfigState, ADDED_TO_CART};

/// Title used when a product has none to show.
pub const DETAIL_FALLBACK_TITLE: &str = "Product Details";

/// Characters of description shown on a home screen row.
pub const CARD_DESCRIPTION_CHARS: usize = 80;

/// One row on the home screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub price_label: String,
    pub category: Option<String>,
    /// First [`CARD_DESCRIPTION_CHARS`] characters, `...` when cut.
    pub description_preview: String,
    pub rating: Rating,
}

/// Home screen model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeScreen {
    pub store_name: String,
    pub products: Vec<ProductCard>,
    pub is_fetching: bool,
    pub is_refreshing: bool,
    /// Most recent fetch failure, cleared by the next successful fetch.
    pub load_error: Option<ApiError>,
    pub banner: Option<String>,
    pub badge_count: usize,
}

/// Product detail screen model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub screen_title: String,
    pub product: Product,
    pub price_label: String,
    /// Quantity of this product already in the cart, 0 if none.
    pub in_cart: u32,
}

/// Result of an add from either screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    pub product_id: ProductId,
    pub change: CartChange,
    pub badge_count: usize,
    pub banner: Option<String>,
}

/// Initial load of the home screen.
pub async fn load_products(app: &AppHandle) -> Result<HomeScreen, ApiError> {
    debug!("load_products command");
    let catalog = app.state::<CatalogState>()?;
    // Failures are logged by CatalogState and shown via `load_error`.
    let _ = catalog.load().await;
    home_screen(app)
}

/// Pull-to-refresh on the home screen.
pub async fn refresh_products(app: &AppHandle) -> Result<HomeScreen, ApiError> {
    debug!("refresh_products command");
    let catalog = app.state::<CatalogState>()?;
    let _ = catalog.refresh().await;
    home_screen(app)
}

/// Renders the home screen from current state without fetching.
pub fn home_screen(app: &AppHandle) -> Result<HomeScreen, ApiError> {
    let catalog = app.state::<CatalogState>()?;
    let banner = app.state::<BannerState>()?;
    let cart = app.state::<CartState>()?;
    let config = app.state::<ConfigState>()?;

    let snapshot = catalog.snapshot();
    let products = snapshot
        .products
        .iter()
        .map(|p| ProductCard {
            id: p.id,
            title: p.title.clone(),
            price_label: config.format_currency(p.price),
            category: p.category.clone(),
            description_preview: description_preview(&p.description),
            rating: p.rating,
        })
        .collect();

    Ok(HomeScreen {
        store_name: config.store_name.clone(),
        products,
        is_fetching: snapshot.is_fetching,
        is_refreshing: snapshot.is_refreshing,
        load_error: snapshot.last_error,
        banner: banner.current(),
        badge_count: cart.len(),
    })
}

/// "Buy" on a home screen row.
pub fn buy(app: &AppHandle, product_id: ProductId) -> Result<AddToCartResponse, ApiError> {
    debug!(product_id, "buy command");
    let product = find_product(app, product_id)?;
    add_to_cart(app, &product)
}

/// Opens the detail screen for a product in the current list.
pub fn product_detail(app: &AppHandle, product_id: ProductId) -> Result<ProductDetail, ApiError> {
    debug!(product_id, "product_detail command");
    let product = find_product(app, product_id)?;
    let cart = app.state::<CartState>()?;
    let config = app.state::<ConfigState>()?;

    Ok(ProductDetail {
        screen_title: screen_title(&product),
        price_label: config.format_currency(product.price),
        in_cart: cart.get(product_id).map_or(0, |e| e.quantity),
        product,
    })
}

/// "Add to Cart" on the detail screen. Shows the added-to-cart banner.
pub fn add_to_cart(app: &AppHandle, product: &Product) -> Result<AddToCartResponse, ApiError> {
    debug!(product_id = product.id, "add_to_cart command");
    let cart = app.state::<CartState>()?;
    let banner = app.state::<BannerState>()?;

    let change = cart.add_to_cart(product);
    banner.show(ADDED_TO_CART);

    Ok(AddToCartResponse {
        product_id: product.id,
        change,
        badge_count: cart.len(),
        banner: banner.current(),
    })
}

/// Current list first, then the product held by the cart entry. A refresh
/// that dropped an item must not strand it in the cart.
fn find_product(app: &AppHandle, product_id: ProductId) -> Result<Product, ApiError> {
    if let Some(product) = app.state::<CatalogState>()?.find(product_id) {
        return Ok(product);
    }

    app.state::<CartState>()?
        .get(product_id)
        .map(|entry| entry.product)
        .ok_or_else(|| ApiError::not_found("Product", product_id))
}

fn description_preview(description: &str) -> String {
    let description = description.trim();
    match description.char_indices().nth(CARD_DESCRIPTION_CHARS) {
        Some((cut, _)) => format!("{}...", description[..cut].trim_end()),
        None => description.to_string(),
    }
}

fn screen_title(product: &Product) -> String {
    let title = product.title.trim();
    if title.is_empty() {
        DETAIL_FALLBACK_TITLE.to_string()
    } else {
        title.to_string()
    }
}
