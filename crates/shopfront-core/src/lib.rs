//! # shopfront-core: Pure Cart Logic for Shopfront
//!
//! This crate is the **heart** of Shopfront. It contains the cart model and
//! its rules with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopfront Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Screens (terminal UI)                        │   │
//! │  │    Products ──► Product Detail ──► Cart ──► Checkout stub       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              App state (CartState, CatalogState)                │   │
//! │  └──────────────┬──────────────────────────────────┬───────────────┘   │
//! │                 │                                  │                    │
//! │  ┌──────────────▼──────────────────┐   ┌───────────▼───────────────┐   │
//! │  │   ★ shopfront-core (THIS) ★     │   │   shopfront-catalog       │   │
//! │  │   types · money · cart · clock  │   │   GET /products?limit=N   │   │
//! │  └─────────────────────────────────┘   └───────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product`, `Rating`, `CartEntry`
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - The cart aggregate and the recent-purchase filter
//! - [`clock`] - Time source abstraction
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog product checks
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use shopfront_core::{total_amount, Cart, Money, Product, Rating};
//!
//! let product = Product {
//!     id: 1,
//!     title: "Backpack".into(),
//!     description: String::new(),
//!     price: Money::from_cents(999),
//!     image: String::new(),
//!     category: None,
//!     rating: Rating::default(),
//! };
//!
//! let now = Utc::now();
//! let mut cart = Cart::new();
//! cart.add(&product, now);
//! cart.add(&product, now);
//!
//! let recent = cart.recent_purchases(now);
//! assert_eq!(total_amount(&recent).cents(), 1998);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod clock;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{total_amount, Cart, CartChange, RECENT_PURCHASE_WINDOW_DAYS};
pub use clock::{Clock, FixedClock, ManualClock, SystemClock};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of products requested from the catalog when the caller gives no limit.
pub const DEFAULT_CATALOG_LIMIT: u32 = 20;
