//! # Catalog State
//!
//! The product list the home screen shows, plus its loading flags.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load() / refresh()                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  source.fetch_products(limit)  (no lock held while awaiting)            │
//! │       │                                                                 │
//! │       ├── Ok(list) ──► products = list, last_error = None               │
//! │       │                                                                 │
//! │       └── Err(e) ────► warn! (transient) or error! logged,              │
//! │                        products untouched, last_error = ApiError(e)     │
//! │                                                                         │
//! │  is_fetching: true until the first load settles (either way)            │
//! │  is_refreshing: true only while a refresh() is in flight                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use shopfront_catalog::CatalogSource;
use shopfront_core::{Product, ProductId};
use tracing::{error, info, warn};

use crate::error::ApiError;

#[derive(Debug)]
struct CatalogInner {
    products: Vec<Product>,
    is_fetching: bool,
    is_refreshing: bool,
    last_error: Option<ApiError>,
}

/// Point-in-time copy of the catalog screen state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub is_fetching: bool,
    pub is_refreshing: bool,
    pub last_error: Option<ApiError>,
}

/// App-managed catalog state.
pub struct CatalogState {
    source: Arc<dyn CatalogSource>,
    limit: Option<u32>,
    inner: Mutex<CatalogInner>,
}

impl CatalogState {
    /// `limit` of `None` defers to the source's own default.
    pub fn new(source: Arc<dyn CatalogSource>, limit: Option<u32>) -> Self {
        CatalogState {
            source,
            limit,
            inner: Mutex::new(CatalogInner {
                products: Vec::new(),
                is_fetching: true,
                is_refreshing: false,
                last_error: None,
            }),
        }
    }

    /// Fetches the listing. On failure the previous list is kept and the
    /// error is returned for the screen to report.
    pub async fn load(&self) -> Result<usize, ApiError> {
        let result = self.source.fetch_products(self.limit).await;

        let mut inner = self.lock();
        inner.is_fetching = false;
        match result {
            Ok(products) => {
                let count = products.len();
                inner.products = products;
                inner.last_error = None;
                info!(count, "Product list updated");
                Ok(count)
            }
            Err(e) => {
                let kept = inner.products.len();
                if e.is_transient() {
                    warn!(error = %e, kept, "Catalog unreachable, keeping current list");
                } else {
                    error!(error = %e, kept, "Error fetching products, keeping current list");
                }
                let err = ApiError::from(e);
                inner.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Same as [`load`](Self::load), with `is_refreshing` set for the
    /// duration.
    pub async fn refresh(&self) -> Result<usize, ApiError> {
        self.lock().is_refreshing = true;
        let result = self.load().await;
        self.lock().is_refreshing = false;
        result
    }

    /// Looks a product up in the current list.
    pub fn find(&self, id: ProductId) -> Option<Product> {
        self.lock().products.iter().find(|p| p.id == id).cloned()
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        let inner = self.lock();
        CatalogSnapshot {
            products: inner.products.clone(),
            is_fetching: inner.is_fetching,
            is_refreshing: inner.is_refreshing,
            last_error: inner.last_error.clone(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CatalogInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for CatalogState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogState")
            .field("limit", &self.limit)
            .field("inner", &*self.lock())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use async_trait::async_trait;
    use shopfront_catalog::{CatalogError, CatalogResult, StaticCatalog};
    use std::sync::atomic::{AtomicBool, Ordering};

    /// Serves the sample catalog until told to fail.
    struct FlakyCatalog {
        inner: StaticCatalog,
        failing: AtomicBool,
    }

    #[async_trait]
    impl CatalogSource for FlakyCatalog {
        async fn fetch_products(&self, limit: Option<u32>) -> CatalogResult<Vec<Product>> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(CatalogError::Timeout);
            }
            self.inner.fetch_products(limit).await
        }
    }

    #[tokio::test]
    async fn test_first_load_clears_fetching_flag() {
        let state = CatalogState::new(Arc::new(StaticCatalog::sample()), Some(4));
        assert!(state.snapshot().is_fetching);

        assert_eq!(state.load().await.unwrap(), 4);

        let snapshot = state.snapshot();
        assert!(!snapshot.is_fetching);
        assert!(!snapshot.is_refreshing);
        assert_eq!(snapshot.products.len(), 4);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_stale_list() {
        let source = Arc::new(FlakyCatalog {
            inner: StaticCatalog::sample(),
            failing: AtomicBool::new(false),
        });
        let state = CatalogState::new(source.clone(), None);
        state.load().await.unwrap();
        let before = state.snapshot().products;

        source.failing.store(true, Ordering::SeqCst);
        let err = state.refresh().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogUnavailable);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.products, before);
        assert!(!snapshot.is_refreshing);
        assert_eq!(snapshot.last_error, Some(err));
        assert_eq!(
            snapshot.last_error.unwrap().message,
            "Catalog request timed out"
        );

        source.failing.store(false, Ordering::SeqCst);
        state.refresh().await.unwrap();
        assert!(state.snapshot().last_error.is_none());
    }

    #[tokio::test]
    async fn test_failed_first_load_leaves_empty_list() {
        let source = Arc::new(FlakyCatalog {
            inner: StaticCatalog::sample(),
            failing: AtomicBool::new(true),
        });
        let state = CatalogState::new(source, None);

        assert!(state.load().await.is_err());
        let snapshot = state.snapshot();
        assert!(snapshot.products.is_empty());
        assert!(!snapshot.is_fetching);
    }

    #[tokio::test]
    async fn test_find_uses_current_list() {
        let state = CatalogState::new(Arc::new(StaticCatalog::sample()), None);
        assert!(state.find(1).is_none());

        state.load().await.unwrap();
        assert_eq!(state.find(18).unwrap().id, 18);
        assert!(state.find(4).is_none());
    }
}
