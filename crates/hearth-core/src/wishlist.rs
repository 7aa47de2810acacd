//! # Wishlist
//!
//! A set of saved products for later purchase, keyed by product id.
//! There is no quantity concept; adding an already-saved product is a
//! no-op, so duplicates cannot exist.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

/// The wishlist collection.
///
/// ## Invariant
/// Entries are unique by product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Wishlist {
    /// Saved products, in the order they were added.
    pub items: Vec<Product>,
}

impl Wishlist {
    /// Creates a new empty wishlist.
    pub fn new() -> Self {
        Wishlist { items: Vec::new() }
    }

    /// Restores a wishlist from a persisted items snapshot.
    pub fn from_items(items: Vec<Product>) -> Self {
        Wishlist { items }
    }

    /// Saves a product. Idempotent: an already-present id is a no-op.
    pub fn add_item(&mut self, product: Product) {
        if self.contains(&product.id) {
            return;
        }
        self.items.push(product);
    }

    /// Removes the product with the given id. No-op if absent.
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|p| p.id != product_id);
    }

    /// Membership test by product id.
    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    /// Clears all saved products.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of saved products.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn test_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Money::from_cents(999),
            sale_price: None,
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

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = Wishlist::new();
        wishlist.add_item(test_product("1"));
        wishlist.add_item(test_product("1"));

        assert_eq!(wishlist.item_count(), 1);
    }

    #[test]
    fn test_contains() {
        let mut wishlist = Wishlist::new();
        wishlist.add_item(test_product("1"));

        assert!(wishlist.contains("1"));
        assert!(!wishlist.contains("2"));
    }

    #[test]
    fn test_remove_and_remove_absent() {
        let mut wishlist = Wishlist::new();
        wishlist.add_item(test_product("1"));

        wishlist.remove_item("missing");
        assert_eq!(wishlist.item_count(), 1);

        wishlist.remove_item("1");
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut wishlist = Wishlist::new();
        wishlist.add_item(test_product("1"));
        wishlist.add_item(test_product("2"));

        wishlist.clear();

        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut wishlist = Wishlist::new();
        wishlist.add_item(test_product("3"));
        wishlist.add_item(test_product("1"));
        wishlist.add_item(test_product("2"));

        let ids: Vec<&str> = wishlist.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }
}
