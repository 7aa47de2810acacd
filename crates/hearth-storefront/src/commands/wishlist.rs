//! # Wishlist Actions
//!
//! Saving products for later on behalf of the display layer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::WishlistStore;
use hearth_core::{Catalog, Product};

/// Wishlist response for the display layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub items: Vec<Product>,
    pub item_count: usize,
}

impl WishlistResponse {
    fn snapshot(store: &WishlistStore) -> Self {
        let items = store.items();
        WishlistResponse {
            item_count: items.len(),
            items,
        }
    }
}

/// Gets the current wishlist contents.
pub fn get_wishlist(store: &WishlistStore) -> WishlistResponse {
    debug!("get_wishlist");
    WishlistResponse::snapshot(store)
}

/// Saves a catalog product to the wishlist.
///
/// Idempotent: saving an already-saved product changes nothing.
///
/// ## Returns
/// Updated wishlist, or `NOT_FOUND` for an unknown id
pub fn add_to_wishlist(
    catalog: &Catalog,
    store: &WishlistStore,
    product_id: &str,
) -> Result<WishlistResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_wishlist");

    let product = catalog
        .get(product_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    store.add_item(product);
    Ok(WishlistResponse::snapshot(store))
}

/// Removes a product from the wishlist. No-op for absent ids.
pub fn remove_from_wishlist(store: &WishlistStore, product_id: &str) -> WishlistResponse {
    debug!(product_id = %product_id, "remove_from_wishlist");
    store.remove_item(product_id);
    WishlistResponse::snapshot(store)
}

/// Membership test: is the product saved?
pub fn is_in_wishlist(store: &WishlistStore, product_id: &str) -> bool {
    store.contains(product_id)
}

/// Clears all saved products.
pub fn clear_wishlist(store: &WishlistStore) -> WishlistResponse {
    debug!("clear_wishlist");
    store.clear();
    WishlistResponse::snapshot(store)
}

// =============================================================================
// Unit Tests
// =============================================================================
