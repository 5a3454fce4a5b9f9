//! # Cart
//!
//! The cart aggregate: an ordered list of entries, unique by product id.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation               Present entry          Absent entry            │
//! │  ─────────               ─────────────          ────────────            │
//! │                                                                         │
//! │  add(product, now) ────► quantity += 1          push(qty 1, added now)  │
//! │                                                                         │
//! │  remove(id) ───────────► items.remove(i)        no-op                   │
//! │                                                                         │
//! │  increase(id) ─────────► quantity += 1          no-op                   │
//! │                                                                         │
//! │  decrease(id) ─────────► quantity -= 1 if > 1   no-op                   │
//! │                                                                         │
//! │  recent(now) ──────────► entries with added_at > now - 2 days          │
//! │                                                                         │
//! │  Lifecycle: absent → present(1) → present(N) → absent                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is total. The cart never sees the clock directly; callers
//! pass `now`, which keeps this type deterministic.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CartEntry, Product, ProductId};

/// How far back an entry's first add may be and still count as recent.
pub const RECENT_PURCHASE_WINDOW_DAYS: i64 = 2;

/// The recent-purchase window as a duration.
pub fn recent_purchase_window() -> Duration {
    Duration::days(RECENT_PURCHASE_WINDOW_DAYS)
}

/// What a cart operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartChange {
    /// A new entry was appended with quantity 1.
    Added,
    /// An existing entry's quantity changed.
    QuantityChanged { quantity: u32 },
    /// The entry was deleted.
    Removed,
    /// Nothing changed (unknown id, or decrease at quantity 1).
    Unchanged,
}

impl CartChange {
    /// True when the cart contents differ after the operation.
    pub fn is_change(&self) -> bool {
        !matches!(self, CartChange::Unchanged)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Entries are unique by product id (adding the same product increases quantity)
/// - Quantity is always >= 1
/// - Insertion order is kept; new products go to the end
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a product, or bumps its quantity if it is already in the cart.
    ///
    /// `added_at` is only set when the entry is created.
    pub fn add(&mut self, product: &Product, now: DateTime<Utc>) -> CartChange {
        if let Some(entry) = self.find_mut(product.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            return CartChange::QuantityChanged {
                quantity: entry.quantity,
            };
        }

        self.entries.push(CartEntry::new(product, now));
        CartChange::Added
    }

    /// Removes the entry for `id`, if any.
    pub fn remove(&mut self, id: ProductId) -> CartChange {
        let initial_len = self.entries.len();
        self.entries.retain(|e| e.id() != id);

        if self.entries.len() == initial_len {
            CartChange::Unchanged
        } else {
            CartChange::Removed
        }
    }

    /// Increments the quantity for `id`, saturating at `u32::MAX`.
    pub fn increase(&mut self, id: ProductId) -> CartChange {
        match self.find_mut(id) {
            Some(entry) => {
                entry.quantity = entry.quantity.saturating_add(1);
                CartChange::QuantityChanged {
                    quantity: entry.quantity,
                }
            }
            None => CartChange::Unchanged,
        }
    }

    /// Decrements the quantity for `id`, stopping at 1.
    ///
    /// Decreasing never removes an entry; that takes an explicit `remove`.
    pub fn decrease(&mut self, id: ProductId) -> CartChange {
        match self.find_mut(id) {
            Some(entry) if entry.quantity > 1 => {
                entry.quantity -= 1;
                CartChange::QuantityChanged {
                    quantity: entry.quantity,
                }
            }
            _ => CartChange::Unchanged,
        }
    }

    /// Entries first added strictly after `now - 2 days`, in cart order.
    pub fn recent_purchases(&self, now: DateTime<Utc>) -> Vec<CartEntry> {
        let window = recent_purchase_window();
        self.entries
            .iter()
            .filter(|e| e.added_within(window, now))
            .cloned()
            .collect()
    }

    /// All entries, in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Looks up the entry for `id`.
    pub fn get(&self, id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Number of distinct products (the badge count).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find_mut(&mut self, id: ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }
}

/// Σ price × quantity over the given entries.
///
/// Callers pass the same subset they display; the cart screen passes the
/// recent purchases, not the whole cart.
pub fn total_amount(entries: &[CartEntry]) -> Money {
    entries.iter().map(CartEntry::line_total).sum()
}

// =============================================================================
// Unit Tests
// =============================================================================
