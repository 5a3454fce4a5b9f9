//! # State Module
//!
//! Shared state registered with the [`AppHandle`](crate::app::AppHandle).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      AppHandle                                  │   │
//! │  │  app.manage(cart_state);                                        │   │
//! │  │  app.manage(catalog_state);                                     │   │
//! │  │  app.manage(banner_state);                                      │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │       ┌──────────────┬───────┴───────┬──────────────┐                   │
//! │       ▼              ▼               ▼              ▼                   │
//! │  ┌──────────┐  ┌────────────┐  ┌────────────┐  ┌────────────┐          │
//! │  │CartState │  │CatalogState│  │BannerState │  │ConfigState │          │
//! │  │ Arc<     │  │ last list  │  │ notice +   │  │ store name │          │
//! │  │  Mutex<  │  │ + flags    │  │ expiry     │  │ currency   │          │
//! │  │  Cart>>  │  │            │  │            │  │            │          │
//! │  └──────────┘  └────────────┘  └────────────┘  └────────────┘          │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartState: Arc<Mutex<T>> plus a broadcast channel for changes        │
//! │  • CatalogState / BannerState: Mutex, never held across an await        │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod banner;
mod cart;
mod catalog;
mod config;

pub use banner::{BannerState, ADDED_TO_CART, BANNER_DURATION_SECS};
pub use cart::{CartEvent, CartState};
pub use catalog::{CatalogSnapshot, CatalogState};
pub use config::ConfigState;
