//! # Cart
//!
//! The shopping cart collection and its totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                │
//! │                                                                     │
//! │  Shopper Action           Store Action            Cart Change       │
//! │  ──────────────           ────────────            ───────────       │
//! │                                                                     │
//! │  Click "Add to Cart" ───► add_item() ───────────► merge or append   │
//! │                                                                     │
//! │  Change Quantity ───────► update_quantity() ────► set or remove     │
//! │                                                                     │
//! │  Click Remove ──────────► remove_item() ────────► delete entry      │
//! │                                                                     │
//! │  Order Placed ──────────► clear() ──────────────► empty cart        │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is total: absent ids and non-positive quantities are
//! defined behavior (no-op or removal), never an error.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// An item in the shopping cart: a full product snapshot plus a quantity.
///
/// The product data is flattened into the serialized form, so a persisted
/// entry looks like a product record with a `quantity` field, and pricing
/// stays consistent even if the catalog entry changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,

    /// Units of this product in the cart. Always >= 1 while stored; a
    /// quantity of zero is represented by the entry not existing.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a cart item from a product and quantity.
    pub fn new(product: Product, quantity: i64) -> Self {
        CartItem { product, quantity }
    }

    /// Unit price the shopper pays (sale price when set).
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.product.effective_price()
    }

    /// Line total: unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Entries are unique by product id (adding the same product merges
///   quantities)
/// - Every stored quantity is >= 1 (removal is the only representation
///   of zero)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Items in the cart, in insertion order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Restores a cart from a persisted items snapshot.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Cart { items }
    }

    /// Adds an item to the cart.
    ///
    /// ## Behavior
    /// - Entry with the same id exists: its quantity increases by the
    ///   incoming quantity (merge-add, not overwrite)
    /// - Otherwise: the item is appended
    /// - Incoming quantity <= 0: no-op (a zero-quantity entry must never
    ///   exist)
    ///
    /// There is no upper bound on quantity.
    pub fn add_item(&mut self, item: CartItem) {
        if item.quantity <= 0 {
            return;
        }

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product.id == item.product.id)
        {
            existing.quantity += item.quantity;
            return;
        }

        self.items.push(item);
    }

    /// Removes the entry with the given product id. No-op if absent.
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Sets an entry's quantity to an absolute value.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: equivalent to [`Cart::remove_item`]
    /// - Id present: quantity is replaced (absolute set, not a delta)
    /// - Id absent: no-op (never creates an entry)
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of distinct entries in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all entries.
    ///
    /// Two units of one product count as 2, not 1.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Returns the sum of effective price × quantity over all entries.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an entry by product id.
    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64, sale_cents: Option<i64>) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Money::from_cents(price_cents),
            sale_price: sale_cents.map(Money::from_cents),
            images: vec![format!("/assets/products/{}.jpg", id)],
            category: "Decor".to_string(),
            subcategory: None,
            description: String::new(),
            materials: Vec::new(),
            dimensions: None,
            care_instructions: None,
            rating: 4.0,
            review_count: 10,
            in_stock: true,
            colors: Vec::new(),
            style: None,
            is_featured: false,
            is_new: false,
            is_trending: false,
        }
    }

    fn item(id: &str, price_cents: i64, sale_cents: Option<i64>, qty: i64) -> CartItem {
        CartItem::new(test_product(id, price_cents, sale_cents), qty)
    }

    #[test]
    fn test_add_distinct_ids() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 999, None, 2));
        cart.add_item(item("2", 500, None, 1));
        cart.add_item(item("3", 250, None, 4));

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total_items(), 7);
    }

    #[test]
    fn test_add_same_id_merges_quantity() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 999, None, 2));
        cart.add_item(item("1", 999, None, 3));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get("1").unwrap().quantity, 5);
    }

    #[test]
    fn test_add_non_positive_quantity_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 999, None, 0));
        cart.add_item(item("2", 999, None, -3));

        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 999, None, 2));

        cart.update_quantity("1", 7);
        assert_eq!(cart.get("1").unwrap().quantity, 7);
    }

    #[test]
    fn test_update_quantity_zero_removes_entry() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 999, None, 2));
        cart.add_item(item("2", 500, None, 1));

        cart.update_quantity("1", 0);

        assert!(cart.get("1").is_none());
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_update_quantity_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 999, None, 2));

        cart.update_quantity("missing", 5);

        assert_eq!(cart.item_count(), 1);
        assert!(cart.get("missing").is_none());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 999, None, 2));

        cart.remove_item("missing");

        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_total_price_uses_effective_price() {
        // [{price 100.00, sale 80.00, qty 2}, {price 50.00, qty 1}]
        // => 80 * 2 + 50 * 1 = 210.00
        let mut cart = Cart::new();
        cart.add_item(item("1", 10_000, Some(8_000), 2));
        cart.add_item(item("2", 5_000, None, 1));

        assert_eq!(cart.total_price(), Money::from_cents(21_000));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 999, None, 2));
        assert!(!cart.is_empty());

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Money::zero());
    }

    #[test]
    fn test_items_snapshot_round_trip() {
        let mut cart = Cart::new();
        cart.add_item(item("1", 129_900, Some(99_900), 2));
        cart.add_item(item("2", 39_900, None, 1));

        let json = serde_json::to_string(&cart.items).unwrap();
        let restored = Cart::from_items(serde_json::from_str(&json).unwrap());

        assert_eq!(restored.items, cart.items);
        assert_eq!(restored.total_price(), cart.total_price());
    }
}
