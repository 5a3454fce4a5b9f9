//! # Catalog Error Types
//!
//! Error types for catalog fetches.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Transport     │  │     Payload             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Request        │  │  Decode                 │ │
//! │  │  InvalidUrl     │  │  Timeout        │  │  InvalidProduct         │ │
//! │  │                 │  │  Status         │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The screen that owns a fetch logs these and keeps its previous product
//! list. None of them ever reach the cart.

use shopfront_core::CoreError;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog error type covering every way a fetch can fail.
#[derive(Debug, Error)]
pub enum CatalogError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid catalog configuration.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Base URL could not be parsed or joined.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// Request could not be sent or the body could not be read.
    #[error("Catalog request failed: {0}")]
    Request(reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("Catalog request timed out")]
    Timeout,

    /// Endpoint answered with a non-success status.
    #[error("Catalog endpoint {url} returned HTTP {status}")]
    Status { status: u16, url: String },

    // =========================================================================
    // Payload Errors
    // =========================================================================
    /// Body was not a JSON array of products.
    #[error("Failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A decoded product broke a domain rule.
    #[error("Catalog returned an invalid product: {0}")]
    InvalidProduct(#[from] CoreError),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogError::Timeout
        } else {
            CatalogError::Request(err)
        }
    }
}

impl CatalogError {
    /// True for failures a later refresh could plausibly fix.
    pub fn is_transient(&self) -> bool {
        match self {
            CatalogError::Request(_) | CatalogError::Timeout => true,
            CatalogError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}
