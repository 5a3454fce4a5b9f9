//! # Cart State
//!
//! The shared cart store: one `Cart` behind a mutex, a clock for timestamps
//! and recency, and a broadcast channel subscribers watch for changes.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every screen reads and modifies the same cart
//! 2. Only one operation should modify the cart at a time
//! 3. Commands may be driven from any tokio worker
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Screen Action            CartState                 Cart Change         │
//! │  ─────────────            ─────────                 ───────────         │
//! │                                                                         │
//! │  Add to Cart ────────────► add_to_cart() ─────────► push or qty + 1    │
//! │                                                                         │
//! │  + / - ──────────────────► increase_quantity() ───► qty + 1            │
//! │                            decrease_quantity() ───► qty - 1 (min 1)    │
//! │                                                                         │
//! │  Remove (confirmed) ─────► remove_from_cart() ────► entry dropped      │
//! │                                                                         │
//! │  Cart screen ────────────► recent_purchases() ────► (read only)        │
//! │                                                                         │
//! │  Every write publishes a CartEvent while the lock is still held, so    │
//! │  subscribers see events in the same order the operations applied.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use shopfront_core::{Cart, CartChange, CartEntry, Clock, Product, ProductId};
use tokio::sync::broadcast;
use tracing::debug;

/// Buffered events per subscriber before the slowest one starts lagging.
const EVENT_CAPACITY: usize = 64;

/// Published after every cart operation, including ones that changed
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartEvent {
    /// Monotonic counter, one per operation.
    pub revision: u64,
    pub product_id: ProductId,
    pub change: CartChange,
    /// Distinct entries after the operation.
    pub entry_count: usize,
}

#[derive(Debug, Default)]
struct CartInner {
    cart: Cart,
    revision: u64,
}

/// App-managed cart state.
#[derive(Clone)]
pub struct CartState {
    inner: Arc<Mutex<CartInner>>,
    clock: Arc<dyn Clock>,
    events: broadcast::Sender<CartEvent>,
}

impl CartState {
    /// Creates an empty cart store reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        CartState {
            inner: Arc::new(Mutex::new(CartInner::default())),
            clock,
            events,
        }
    }

    /// Adds `product`, or bumps its quantity if it is already in the cart.
    pub fn add_to_cart(&self, product: &Product) -> CartChange {
        let now = self.clock.now();
        self.mutate(product.id, |cart| cart.add(product, now))
    }

    /// Drops the entry for `id`. Unknown ids are a no-op.
    pub fn remove_from_cart(&self, id: ProductId) -> CartChange {
        self.mutate(id, |cart| cart.remove(id))
    }

    pub fn increase_quantity(&self, id: ProductId) -> CartChange {
        self.mutate(id, |cart| cart.increase(id))
    }

    /// Lowers the quantity of `id`, never below 1.
    pub fn decrease_quantity(&self, id: ProductId) -> CartChange {
        self.mutate(id, |cart| cart.decrease(id))
    }

    /// Entries first added inside the recent-purchase window, measured from
    /// the clock's current time.
    pub fn recent_purchases(&self) -> Vec<CartEntry> {
        let now = self.clock.now();
        self.with_cart(|cart| cart.recent_purchases(now))
    }

    /// Snapshot of every entry in insertion order.
    pub fn entries(&self) -> Vec<CartEntry> {
        self.with_cart(|cart| cart.entries().to_vec())
    }

    pub fn get(&self, id: ProductId) -> Option<CartEntry> {
        self.with_cart(|cart| cart.get(id).cloned())
    }

    /// Distinct entries in the whole cart (the badge count).
    pub fn len(&self) -> usize {
        self.with_cart(Cart::len)
    }

    pub fn is_empty(&self) -> bool {
        self.with_cart(Cart::is_empty)
    }

    /// Revision of the most recent operation; 0 before the first one.
    pub fn revision(&self) -> u64 {
        self.lock().revision
    }

    /// Receives every event published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.events.subscribe()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let badge = cart_state.with_cart(|cart| cart.len());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.lock().cart)
    }

    fn mutate<F>(&self, id: ProductId, f: F) -> CartChange
    where
        F: FnOnce(&mut Cart) -> CartChange,
    {
        let mut inner = self.lock();
        let change = f(&mut inner.cart);
        inner.revision += 1;

        let event = CartEvent {
            revision: inner.revision,
            product_id: id,
            change,
            entry_count: inner.cart.len(),
        };
        debug!(
            revision = event.revision,
            product_id = id,
            change = ?change,
            entries = event.entry_count,
            "Cart updated"
        );

        // No subscribers is fine.
        let _ = self.events.send(event);
        change
    }

    // Every mutation completes before the guard drops, so a poisoned cart is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, CartInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for CartState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("CartState")
            .field("cart", &inner.cart)
            .field("revision", &inner.revision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use shopfront_core::{ManualClock, Money, Rating};

    fn product(id: ProductId, cents: i64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            description: String::new(),
            price: Money::from_cents(cents),
            image: String::new(),
            category: None,
            rating: Rating::default(),
        }
    }

    fn store() -> (CartState, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
        ));
        (CartState::new(clock.clone()), clock)
    }

    #[test]
    fn test_add_twice_gives_one_entry() {
        let (cart, _) = store();
        let p = product(1, 1000);

        assert_eq!(cart.add_to_cart(&p), CartChange::Added);
        assert_eq!(
            cart.add_to_cart(&p),
            CartChange::QuantityChanged { quantity: 2 }
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(1).unwrap().quantity, 2);
    }

    #[test]
    fn test_subscribers_see_every_operation_in_order() {
        let (cart, _) = store();
        let mut rx = cart.subscribe();
        let p = product(1, 1000);

        cart.add_to_cart(&p);
        cart.increase_quantity(1);
        cart.decrease_quantity(1);
        cart.decrease_quantity(1);
        cart.remove_from_cart(1);
        cart.remove_from_cart(1);

        let events: Vec<CartEvent> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        let changes: Vec<CartChange> = events.iter().map(|e| e.change).collect();
        assert_eq!(
            changes,
            vec![
                CartChange::Added,
                CartChange::QuantityChanged { quantity: 2 },
                CartChange::QuantityChanged { quantity: 1 },
                CartChange::Unchanged,
                CartChange::Removed,
                CartChange::Unchanged,
            ]
        );
        let revisions: Vec<u64> = events.iter().map(|e| e.revision).collect();
        assert_eq!(revisions, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(events.last().unwrap().entry_count, 0);
        assert_eq!(cart.revision(), 6);
    }

    #[test]
    fn test_recent_purchases_follow_the_clock() {
        let (cart, clock) = store();
        cart.add_to_cart(&product(1, 1000));
        clock.advance(Duration::days(1));
        cart.add_to_cart(&product(2, 550));

        assert_eq!(cart.recent_purchases().len(), 2);

        clock.advance(Duration::days(1));
        let recent = cart.recent_purchases();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id(), 2);

        // Aged-out entries stay in the cart and still count for the badge.
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_clones_share_the_same_cart() {
        let (cart, _) = store();
        let other = cart.clone();
        other.add_to_cart(&product(4, 100));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        let (cart, _) = store();
        let p = product(9, 100);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cart = cart.clone();
                let p = p.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        cart.add_to_cart(&p);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cart.get(9).unwrap().quantity, 200);
        assert_eq!(cart.revision(), 200);
    }
}
