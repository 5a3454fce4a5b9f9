//! # HTTP Catalog
//!
//! Fetches the product listing from a REST endpoint.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fetch_products(limit)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET {base_url}/products?limit={limit}                                 │
//! │       │                                                                 │
//! │       ├── transport error ──────────► CatalogError::Request / Timeout  │
//! │       ├── non-2xx ──────────────────► CatalogError::Status             │
//! │       ├── not a product array ──────► CatalogError::Decode             │
//! │       ├── product breaks a rule ────► CatalogError::InvalidProduct     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(Vec<Product>) in endpoint order                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No retries: the screen that asked simply keeps its last list, and the
//! user can refresh.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shopfront_core::{validation::validate_catalog, Product};
use tracing::{debug, info};
use url::Url;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::source::CatalogSource;

/// Catalog backed by the product listing endpoint.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    products_url: Url,
    default_limit: u32,
}

impl HttpCatalog {
    /// Builds a client from validated config.
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;

        let products_url = config.parsed_base_url()?.join("products")?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("shopfront/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Request)?;

        debug!(url = %products_url, limit = config.limit, "HTTP catalog configured");

        Ok(HttpCatalog {
            client,
            products_url,
            default_limit: config.limit,
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch_products(&self, limit: Option<u32>) -> CatalogResult<Vec<Product>> {
        let limit = limit.unwrap_or(self.default_limit);
        debug!(url = %self.products_url, limit, "Fetching product catalog");

        let response = self
            .client
            .get(self.products_url.clone())
            .query(&[("limit", limit)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: self.products_url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let products: Vec<Product> = serde_json::from_slice(&body)?;
        validate_catalog(&products)?;

        info!(count = products.len(), "Product catalog fetched");
        Ok(products)
    }
}
