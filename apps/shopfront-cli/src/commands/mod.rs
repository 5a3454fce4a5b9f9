//! # Commands Module
//!
//! Screen commands. Each one pulls the state it needs from the
//! [`AppHandle`](crate::app::AppHandle) and returns a serializable model
//! or an [`ApiError`](crate::error::ApiError).
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Commands                                        │
//! │                                                                         │
//! │  ┌─────────────────────────────┐   ┌─────────────────────────────────┐ │
//! │  │  product.rs                 │   │  cart.rs                        │ │
//! │  │  • load_products            │   │  • view_cart                    │ │
//! │  │  • refresh_products         │   │  • increase / decrease          │ │
//! │  │  • home_screen              │   │  • confirm_remove_prompt        │ │
//! │  │  • buy                      │   │  • remove                       │ │
//! │  │  • product_detail           │   │  • checkout                     │ │
//! │  │  • add_to_cart              │   │  • cart_badge                   │ │
//! │  └─────────────────────────────┘   └─────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod product;
