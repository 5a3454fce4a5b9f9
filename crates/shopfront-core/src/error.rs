//! # Error Types
//!
//! Domain-specific error types for shopfront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  ├── CoreError        - Domain errors                                  │
//! │  └── ValidationError  - Catalog data that breaks a product rule        │
//! │                                                                         │
//! │  shopfront-catalog errors (separate crate)                             │
//! │  └── CatalogError     - Fetch / decode failures                        │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── ApiError         - What a screen sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CatalogError → ApiError → Screen  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations themselves never fail: an unknown id is a no-op. Errors in
//! this crate only describe products that should not enter the cart.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A catalog product failed validation.
    ///
    /// ## When This Occurs
    /// - Catalog returned a negative price, or one above `MAX_PRICE`
    /// - Rating outside 0..5
    /// - Empty title
    #[error("Product {id} is invalid: {source}")]
    InvalidProduct {
        id: ProductId,
        #[source]
        source: ValidationError,
    },

    /// The same product id appeared twice in one catalog listing.
    #[error("Product {0} appears more than once in the catalog")]
    DuplicateProduct(ProductId),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
