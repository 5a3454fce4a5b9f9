//! Catalog source trait and the in-memory implementation.

use async_trait::async_trait;
use shopfront_core::{validation::validate_catalog, Money, Product, Rating};

use crate::error::CatalogResult;

/// Anything that can produce the product listing.
///
/// `limit` of `None` means "use the source's configured default".
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_products(&self, limit: Option<u32>) -> CatalogResult<Vec<Product>>;
}

/// In-memory catalog. Returns the first `limit` products it was built with.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
    default_limit: Option<u32>,
}

impl StaticCatalog {
    /// Builds a static catalog, rejecting listings the HTTP source would
    /// also reject.
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        validate_catalog(&products)?;
        Ok(StaticCatalog {
            products,
            default_limit: None,
        })
    }

    pub fn with_default_limit(mut self, limit: u32) -> Self {
        self.default_limit = Some(limit);
        self
    }

    /// A handful of products for running without network access.
    pub fn sample() -> Self {
        let item = |id, title: &str, cents, category: &str, rate, count| Product {
            id,
            title: title.to_string(),
            description: format!("{} from the offline sample catalog.", title),
            price: Money::from_cents(cents),
            image: format!("https://fakestoreapi.com/img/sample-{}.jpg", id),
            category: Some(category.to_string()),
            rating: Rating { rate, count },
        };

        StaticCatalog {
            products: vec![
                item(1, "Foldsack No. 1 Backpack", 10995, "men's clothing", 3.9, 120),
                item(2, "Slim Fit T-Shirt", 2230, "men's clothing", 4.1, 259),
                item(3, "Cotton Jacket", 5599, "men's clothing", 4.7, 500),
                item(5, "Chain Bracelet", 69500, "jewelery", 4.6, 400),
                item(9, "Portable External Hard Drive", 6400, "electronics", 3.3, 203),
                item(18, "Short Sleeve Boat Neck V", 998, "women's clothing", 4.7, 130),
            ],
            default_limit: None,
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_products(&self, limit: Option<u32>) -> CatalogResult<Vec<Product>> {
        let limit = limit.or(self.default_limit).map_or(usize::MAX, |l| l as usize);
        Ok(self.products.iter().take(limit).cloned().collect())
    }
}
