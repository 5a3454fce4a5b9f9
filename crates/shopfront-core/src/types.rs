//! # Domain Types
//!
//! Core domain types shared by the catalog source, the cart store and the
//! screens.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐            ┌──────────────────────────┐           │
//! │  │    Product      │            │       CartEntry          │           │
//! │  │  ─────────────  │  add_to_   │  ──────────────────────  │           │
//! │  │  id (catalog)   │  cart()    │  product (all fields)    │           │
//! │  │  title          │ ─────────► │  quantity (>= 1)         │           │
//! │  │  price (Money)  │            │  added_at (first add)    │           │
//! │  │  rating         │            └──────────────────────────┘           │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `Product.id` comes from the catalog source and is stable across fetches,
//! so it is the cart key. No local ids are minted.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Catalog identifier of a product.
pub type ProductId = u64;

// =============================================================================
// Rating
// =============================================================================

/// Aggregate customer rating as reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    /// Average score, 0.0 to 5.0.
    pub rate: f64,

    /// Number of reviews behind the average.
    pub count: u32,
}

// =============================================================================
// Product
// =============================================================================

/// A product as fetched from the catalog source. Read-only to the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Stable catalog identifier.
    pub id: ProductId,

    /// Display name.
    pub title: String,

    /// Long-form description shown on the detail screen.
    pub description: String,

    /// Unit price. Decimal on the wire, cents in memory.
    #[ts(type = "number")]
    pub price: Money,

    /// Image URI.
    pub image: String,

    /// Catalog category, when the source provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<String>,

    #[serde(default)]
    pub rating: Rating,
}

// =============================================================================
// Cart Entry
// =============================================================================

/// A product in the cart together with its quantity and first-add time.
///
/// ## Invariants
/// - `quantity >= 1` at all times; only removal takes a product out
/// - `added_at` is set once, when the entry is created
///
/// Serializes flat: the product fields plus `quantity` and `addedAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartEntry {
    #[serde(flatten)]
    pub product: Product,

    pub quantity: u32,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartEntry {
    /// Creates an entry with quantity 1, stamped at `now`.
    pub fn new(product: &Product, now: DateTime<Utc>) -> Self {
        CartEntry {
            product: product.clone(),
            quantity: 1,
            added_at: now,
        }
    }

    /// Catalog id of the underlying product.
    #[inline]
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }

    /// True when the entry was added strictly after `now - window`.
    ///
    /// An entry stamped exactly at the cutoff is no longer recent.
    pub fn added_within(&self, window: Duration, now: DateTime<Utc>) -> bool {
        self.added_at > now - window
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
