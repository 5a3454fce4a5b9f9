//! # Validation Module
//!
//! Checks applied to catalog products before the screens hand them to the
//! cart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Field presence and JSON types                                     │
//! │  └── Decimal price → integer cents                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Title present                                                     │
//! │  ├── Price within 0..MAX_PRICE                                         │
//! │  ├── Rating within 0..5                                                │
//! │  └── Ids unique within one listing                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Cart: accepts any product that got this far                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{Product, Rating};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Highest rating the catalog may report.
pub const MAX_RATING: f64 = 5.0;

/// Highest unit price accepted from the catalog ($1,000,000.00).
///
/// Keeps `price * quantity` and cart totals far from the `i64` limit.
pub const MAX_PRICE: Money = Money::from_cents(100_000_000);

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product title.
///
/// ## Example
/// ```rust
/// use shopfront_core::validation::validate_title;
///
/// assert!(validate_title("Mens Casual Premium Slim Fit T-Shirts").is_ok());
/// assert!(validate_title("   ").is_err());
/// ```
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }
    if price > MAX_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0.0,
            max: MAX_PRICE.to_decimal(),
        });
    }

    Ok(())
}

/// Validates a rating: `rate` within 0..=5 and finite.
pub fn validate_rating(rating: &Rating) -> ValidationResult<()> {
    if !rating.rate.is_finite() || !(0.0..=MAX_RATING).contains(&rating.rate) {
        return Err(ValidationError::OutOfRange {
            field: "rating.rate".to_string(),
            min: 0.0,
            max: MAX_RATING,
        });
    }

    Ok(())
}

// =============================================================================
// Product Validators
// =============================================================================

/// Validates one catalog product.
pub fn validate_product(product: &Product) -> CoreResult<()> {
    let wrap = |source| CoreError::InvalidProduct {
        id: product.id,
        source,
    };

    validate_title(&product.title).map_err(wrap)?;
    validate_price(product.price).map_err(wrap)?;
    validate_rating(&product.rating).map_err(wrap)?;

    Ok(())
}

/// Validates a whole listing: every product plus id uniqueness.
///
/// The cart is keyed by id, so two listing rows with the same id would be
/// indistinguishable once added.
pub fn validate_catalog(products: &[Product]) -> CoreResult<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        validate_product(product)?;
        if !seen.insert(product.id) {
            return Err(CoreError::DuplicateProduct(product.id));
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price_cents: i64, rate: f64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            description: String::new(),
            price: Money::from_cents(price_cents),
            image: String::new(),
            category: None,
            rating: Rating { rate, count: 10 },
        }
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Backpack").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("  \t").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(0)).is_ok());
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
        assert!(validate_price(MAX_PRICE).is_ok());
        assert!(validate_price(Money::from_cents(MAX_PRICE.cents() + 1)).is_err());
    }

    #[test]
    fn test_huge_decoded_price_is_rejected() {
        let mut huge: Product = serde_json::from_str(
            r#"{"id":4,"title":"Yacht","price":50000000000000000,"description":"","category":"boats","image":"","rating":{"rate":4.0,"count":1}}"#,
        )
        .unwrap();
        let err = validate_product(&huge).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Product 4 is invalid: price must be between 0 and 1000000"
        );

        huge.price = MAX_PRICE;
        assert!(validate_catalog(&[huge]).is_ok());
    }

    #[test]
    fn test_validate_rating_bounds() {
        assert!(validate_rating(&Rating { rate: 0.0, count: 0 }).is_ok());
        assert!(validate_rating(&Rating { rate: 5.0, count: 3 }).is_ok());
        assert!(validate_rating(&Rating { rate: 5.1, count: 3 }).is_err());
        assert!(validate_rating(&Rating { rate: -0.1, count: 3 }).is_err());
        assert!(validate_rating(&Rating { rate: f64::NAN, count: 3 }).is_err());
    }

    #[test]
    fn test_validate_product_reports_id() {
        let err = validate_product(&product(9, -500, 4.0)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidProduct { id: 9, .. }));
    }

    #[test]
    fn test_validate_catalog_rejects_duplicate_ids() {
        let listing = vec![product(1, 100, 4.0), product(2, 200, 3.0), product(1, 100, 4.0)];
        let err = validate_catalog(&listing).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateProduct(1)));

        assert!(validate_catalog(&listing[..2]).is_ok());
        assert!(validate_catalog(&[]).is_ok());
    }
}
