//! # Cart Commands
//!
//! The cart screen: recent purchases, their total, quantity controls,
//! removal with confirmation, and checkout.
//!
//! ## Cart Screen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  Recent Purchases                                  2 items     │    │
//! │  ├────────────────────────────────────────────────────────────────┤    │
//! │  │  [1] Foldsack No. 1 Backpack   $109.95   (-) 2 (+)   $219.90   │    │
//! │  │  [18] Short Sleeve Boat Neck V   $9.98   (-) 1 (+)     $9.98   │    │
//! │  ├────────────────────────────────────────────────────────────────┤    │
//! │  │  Total                                             $229.88     │    │
//! │  │                                      [ Proceed to Checkout ]   │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                                                                         │
//! │  Only entries first added within the last 2 days are listed, and the   │
//! │  total covers exactly those. The badge counts every entry.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use shopfront_core::{total_amount, CartChange, CartEntry, Money, ProductId};
use tracing::{debug, info};

use crate::app::AppHandle;
use crate::error::ApiError;
use crate::state::{CartState, ConfigState};

pub const EMPTY_CART_MESSAGE: &str = "Your Cart is Empty";
pub const CHECKOUT_MESSAGE: &str = "Proceed to checkout!";
pub const REMOVE_PROMPT_TITLE: &str = "Remove Item";

/// One line on the cart screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price_label: String,
    pub line_total_label: String,
    pub added_at: DateTime<Utc>,
}

/// Cart screen model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Recent purchases, in cart order.
    pub lines: Vec<CartLine>,
    /// Sum over `lines` only.
    pub total: Money,
    pub total_label: String,
    /// Distinct entries in the whole cart.
    pub badge_count: usize,
    /// Set when there are no recent purchases to show.
    pub empty_message: Option<String>,
}

/// Result of a cart screen action, with the refreshed view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartUpdate {
    pub change: CartChange,
    pub view: CartView,
}

/// Confirmation shown before a removal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovePrompt {
    pub product_id: ProductId,
    pub title: String,
    pub message: String,
}

/// Checkout acknowledgment. Checkout changes nothing in the cart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutAck {
    pub message: String,
    pub item_count: usize,
    pub total_label: String,
}

/// Gets the cart screen.
pub fn view_cart(app: &AppHandle) -> Result<CartView, ApiError> {
    debug!("view_cart command");
    let cart = app.state::<CartState>()?;
    let config = app.state::<ConfigState>()?;
    Ok(build_view(&cart, &config))
}

/// Badge count for the cart icon.
pub fn cart_badge(app: &AppHandle) -> Result<usize, ApiError> {
    Ok(app.state::<CartState>()?.len())
}

/// "+" on a cart line.
pub fn increase(app: &AppHandle, product_id: ProductId) -> Result<CartUpdate, ApiError> {
    debug!(product_id, "increase command");
    update(app, |cart| cart.increase_quantity(product_id))
}

/// "-" on a cart line. Stops at 1; removal goes through the prompt.
pub fn decrease(app: &AppHandle, product_id: ProductId) -> Result<CartUpdate, ApiError> {
    debug!(product_id, "decrease command");
    update(app, |cart| cart.decrease_quantity(product_id))
}

/// Builds the removal confirmation for an entry in the cart.
pub fn confirm_remove_prompt(
    app: &AppHandle,
    product_id: ProductId,
) -> Result<RemovePrompt, ApiError> {
    let entry = app
        .state::<CartState>()?
        .get(product_id)
        .ok_or_else(|| ApiError::not_found("Cart entry", product_id))?;

    Ok(RemovePrompt {
        product_id,
        title: REMOVE_PROMPT_TITLE.to_string(),
        message: format!(
            "Are you sure you want to remove \"{}\" from your cart?",
            entry.product.title
        ),
    })
}

/// Removes an entry once the user has confirmed.
pub fn remove(app: &AppHandle, product_id: ProductId) -> Result<CartUpdate, ApiError> {
    debug!(product_id, "remove command");
    update(app, |cart| cart.remove_from_cart(product_id))
}

/// "Proceed to Checkout".
pub fn checkout(app: &AppHandle) -> Result<CheckoutAck, ApiError> {
    debug!("checkout command");
    let view = view_cart(app)?;
    if view.lines.is_empty() {
        return Err(ApiError::validation(EMPTY_CART_MESSAGE));
    }

    info!(items = view.lines.len(), total = %view.total, "Checkout requested");
    Ok(CheckoutAck {
        message: CHECKOUT_MESSAGE.to_string(),
        item_count: view.lines.len(),
        total_label: view.total_label,
    })
}

fn update<F>(app: &AppHandle, op: F) -> Result<CartUpdate, ApiError>
where
    F: FnOnce(&CartState) -> CartChange,
{
    let cart = app.state::<CartState>()?;
    let config = app.state::<ConfigState>()?;
    let change = op(cart.as_ref());
    Ok(CartUpdate {
        change,
        view: build_view(&cart, &config),
    })
}

fn build_view(cart: &CartState, config: &ConfigState) -> CartView {
    let recent = cart.recent_purchases();
    let total = total_amount(&recent);

    CartView {
        lines: recent.iter().map(|e| cart_line(e, config)).collect(),
        total,
        total_label: config.format_currency(total),
        badge_count: cart.len(),
        empty_message: recent.is_empty().then(|| EMPTY_CART_MESSAGE.to_string()),
    }
}

fn cart_line(entry: &CartEntry, config: &ConfigState) -> CartLine {
    CartLine {
        id: entry.id(),
        title: entry.product.title.clone(),
        image: entry.product.image.clone(),
        quantity: entry.quantity,
        unit_price_label: config.format_currency(entry.product.price),
        line_total_label: config.format_currency(entry.line_total()),
        added_at: entry.added_at,
    }
}
