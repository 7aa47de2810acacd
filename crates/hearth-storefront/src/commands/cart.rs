//! # Cart Actions
//!
//! Cart manipulation on behalf of the display layer.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Cart Lifecycle                                  │
//! │                                                                     │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐    │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│ Order    │    │
//! │  │  Cart    │     │          │     │  Form    │     │ Confirmed│    │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘    │
//! │                        │                 │                          │
//! │                   add_to_cart       submit_order                    │
//! │                   update_cart_item  (checkout.rs)                   │
//! │                   remove_from_cart                                  │
//! │                        │                                            │
//! │                        ▼                                            │
//! │                   clear_cart ──────────────────────►                │
//! │                                                     (back to empty) │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartStore, CartTotals};
use hearth_core::{Cart, CartItem, Catalog};

/// Cart response including items, totals, and the drawer flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub is_open: bool,
}

impl CartResponse {
    fn snapshot(store: &CartStore) -> Self {
        CartResponse {
            items: store.items(),
            totals: store.with_cart(|c: &Cart| CartTotals::from(c)),
            is_open: store.is_open(),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(store: &CartStore) -> CartResponse {
    debug!("get_cart");
    CartResponse::snapshot(store)
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases by `quantity`
/// - Otherwise: appended as a new entry with a full product snapshot
///
/// ## Arguments
/// * `product_id` - Catalog id to add
/// * `quantity` - Units to add (default: 1; non-positive values add
///   nothing)
///
/// ## Returns
/// Updated cart, or `NOT_FOUND` for an unknown id
pub fn add_to_cart(
    catalog: &Catalog,
    store: &CartStore,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity, "add_to_cart");

    let product = catalog
        .get(product_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    store.add_item(CartItem::new(product, quantity));
    Ok(CartResponse::snapshot(store))
}

/// Sets the quantity of a cart entry.
///
/// ## Behavior
/// - Quantity <= 0: removes the entry
/// - Id not in cart: no-op
pub fn update_cart_item(store: &CartStore, product_id: &str, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity, "update_cart_item");
    store.update_quantity(product_id, quantity);
    CartResponse::snapshot(store)
}

/// Removes an entry from the cart. No-op for absent ids.
pub fn remove_from_cart(store: &CartStore, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart");
    store.remove_item(product_id);
    CartResponse::snapshot(store)
}

/// Clears all items from the cart.
pub fn clear_cart(store: &CartStore) -> CartResponse {
    debug!("clear_cart");
    store.clear();
    CartResponse::snapshot(store)
}

/// Flips the cart drawer's visibility.
pub fn toggle_cart(store: &CartStore) -> CartResponse {
    debug!("toggle_cart");
    store.toggle_open();
    CartResponse::snapshot(store)
}

/// Sets the cart drawer's visibility.
pub fn set_cart_open(store: &CartStore, open: bool) -> CartResponse {
    debug!(open, "set_cart_open");
    store.set_open(open);
    CartResponse::snapshot(store)
}

// =============================================================================
// Unit Tests
// =============================================================================
