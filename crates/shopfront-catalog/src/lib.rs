//! # shopfront-catalog: Product Catalog Source
//!
//! Supplies the ordered product listing the screens display. The cart never
//! calls into this crate; screens fetch here and hand `Product` values to the
//! cart store.
//!
//! ## Module Organization
//! ```text
//! shopfront_catalog/
//! ├── lib.rs      ◄─── You are here (exports)
//! ├── source.rs   ◄─── CatalogSource trait + StaticCatalog
//! ├── http.rs     ◄─── HttpCatalog (reqwest)
//! ├── config.rs   ◄─── [catalog] config section
//! └── error.rs    ◄─── CatalogError
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use shopfront_catalog::{CatalogConfig, CatalogSource, HttpCatalog};
//!
//! # async fn run() -> shopfront_catalog::CatalogResult<()> {
//! let catalog = HttpCatalog::new(&CatalogConfig::default())?;
//! let products = catalog.fetch_products(Some(5)).await?;
//! println!("{} products", products.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod source;

pub use config::{CatalogConfig, DEFAULT_BASE_URL};
pub use error::{CatalogError, CatalogResult};
pub use http::HttpCatalog;
pub use source::{CatalogSource, StaticCatalog};
