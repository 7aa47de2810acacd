//! # Cart Store
//!
//! The session's single source of truth for purchase-intent state and the
//! cart drawer's visibility flag.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>`: mutation is serialized through
//! one lock, matching the single-threaded event dispatch the display
//! layer drives this with.
//!
//! ## Persistence
//! The items snapshot is written to [`CART_STORAGE_KEY`] after every
//! content mutation. Writes are fire-and-forget: a failure is logged and
//! the in-memory state stays authoritative for the rest of the session.
//! The visibility flag is deliberately excluded from persistence.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use hearth_core::{Cart, CartItem, Money};
use hearth_storage::LocalStore;

/// Storage key for the persisted cart items blob.
pub const CART_STORAGE_KEY: &str = "cart-storage";

type Listener = Box<dyn Fn(&Cart) + Send + Sync>;

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct entries in the cart.
    pub item_count: usize,
    /// Total units across all entries.
    pub total_quantity: i64,
    /// Sum of effective price × quantity.
    pub total_price: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

/// Session-wide cart state.
///
/// Clones share the same underlying cart, flag, storage handle, and
/// subscriber list.
#[derive(Clone)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
    is_open: Arc<AtomicBool>,
    storage: Arc<LocalStore>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl CartStore {
    /// Creates a cart store, restoring the persisted snapshot if one
    /// exists.
    ///
    /// A missing or corrupt snapshot yields an empty cart; restore never
    /// fails.
    pub fn new(storage: Arc<LocalStore>) -> Self {
        let items: Vec<CartItem> = storage.load(CART_STORAGE_KEY).unwrap_or_default();
        if !items.is_empty() {
            debug!(items = items.len(), "Cart restored from snapshot");
        }

        CartStore {
            cart: Arc::new(Mutex::new(Cart::from_items(items))),
            is_open: Arc::new(AtomicBool::new(false)),
            storage,
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Returns a copy of the current items.
    pub fn items(&self) -> Vec<CartItem> {
        self.with_cart(|c| c.items.clone())
    }

    /// Sum of effective price × quantity over all entries.
    pub fn total_price(&self) -> Money {
        self.with_cart(Cart::total_price)
    }

    /// Total units across all entries (two of one product count as 2).
    pub fn total_items(&self) -> i64 {
        self.with_cart(Cart::total_items)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.with_cart(Cart::is_empty)
    }

    // -------------------------------------------------------------------------
    // Content mutations (persisted)
    // -------------------------------------------------------------------------

    /// Adds an item, merging quantities for an existing id.
    pub fn add_item(&self, item: CartItem) {
        debug!(product_id = %item.product.id, quantity = item.quantity, "Cart add_item");
        self.mutate(|cart| cart.add_item(item));
    }

    /// Removes the entry with the given product id. No-op if absent.
    pub fn remove_item(&self, product_id: &str) {
        debug!(product_id = %product_id, "Cart remove_item");
        self.mutate(|cart| cart.remove_item(product_id));
    }

    /// Sets an entry's quantity; non-positive values remove the entry.
    pub fn update_quantity(&self, product_id: &str, quantity: i64) {
        debug!(product_id = %product_id, quantity, "Cart update_quantity");
        self.mutate(|cart| cart.update_quantity(product_id, quantity));
    }

    /// Empties the cart.
    pub fn clear(&self) {
        debug!("Cart clear");
        self.mutate(Cart::clear);
    }

    // -------------------------------------------------------------------------
    // Visibility flag (session-only, never persisted)
    // -------------------------------------------------------------------------

    /// Returns whether the cart drawer is open.
    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    /// Flips the cart drawer's visibility.
    pub fn toggle_open(&self) {
        self.is_open.fetch_xor(true, Ordering::SeqCst);
        self.notify();
    }

    /// Sets the cart drawer's visibility.
    pub fn set_open(&self, open: bool) {
        self.is_open.store(open, Ordering::SeqCst);
        self.notify();
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    /// Registers a listener invoked after every mutation.
    ///
    /// Listeners run synchronously on the mutating call, after the
    /// snapshot has been persisted.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Cart) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners.lock().expect("listener mutex poisoned");
        listeners.push(Box::new(listener));
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    /// Applies a content mutation, persists the items snapshot, and
    /// notifies subscribers.
    fn mutate<F>(&self, f: F)
    where
        F: FnOnce(&mut Cart),
    {
        let snapshot = {
            let mut cart = self.cart.lock().expect("cart mutex poisoned");
            f(&mut cart);
            cart.items.clone()
        };

        if let Err(e) = self.storage.save(CART_STORAGE_KEY, &snapshot) {
            warn!(error = %e, "Cart snapshot not persisted");
        }

        self.notify();
    }

    fn notify(&self) {
        let cart = self.cart.lock().expect("cart mutex poisoned").clone();
        let listeners = self.listeners.lock().expect("listener mutex poisoned");
        for listener in listeners.iter() {
            listener(&cart);
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.with_cart(Cart::item_count))
            .field("is_open", &self.is_open())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::{Catalog, Product};
    use std::sync::atomic::AtomicUsize;

    fn sample_item(id: &str, qty: i64) -> CartItem {
        let product: Product = Catalog::sample().get(id).unwrap().clone();
        CartItem::new(product, qty)
    }

    fn memory_store() -> Arc<LocalStore> {
        Arc::new(LocalStore::in_memory())
    }

    #[test]
    fn test_starts_empty_without_snapshot() {
        let store = CartStore::new(memory_store());
        assert!(store.is_empty());
        assert!(!store.is_open());
    }

    #[test]
    fn test_persists_after_every_content_mutation() {
        let storage = memory_store();
        let store = CartStore::new(storage.clone());

        store.add_item(sample_item("1", 2));
        let persisted: Vec<CartItem> = storage.load(CART_STORAGE_KEY).unwrap();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].quantity, 2);

        store.update_quantity("1", 5);
        let persisted: Vec<CartItem> = storage.load(CART_STORAGE_KEY).unwrap();
        assert_eq!(persisted[0].quantity, 5);

        store.clear();
        let persisted: Vec<CartItem> = storage.load(CART_STORAGE_KEY).unwrap();
        assert!(persisted.is_empty());
    }

    #[test]
    fn test_restores_snapshot_across_stores() {
        let storage = memory_store();

        let first = CartStore::new(storage.clone());
        first.add_item(sample_item("1", 2));
        first.add_item(sample_item("3", 1));

        // A second store over the same storage is the "next session".
        let second = CartStore::new(storage);
        assert_eq!(second.items(), first.items());
        assert_eq!(second.total_price(), first.total_price());
    }

    #[test]
    fn test_visibility_flag_is_not_persisted() {
        let storage = memory_store();
        let store = CartStore::new(storage.clone());

        store.add_item(sample_item("1", 1));
        store.set_open(true);
        store.toggle_open();
        store.toggle_open();
        assert!(store.is_open());

        // The persisted blob is a bare items array; there is no open flag
        // anywhere in it.
        let raw: serde_json::Value = storage.load(CART_STORAGE_KEY).unwrap();
        assert!(raw.is_array());

        let next_session = CartStore::new(storage);
        assert!(!next_session.is_open());
    }

    #[test]
    fn test_merge_add_through_store() {
        let store = CartStore::new(memory_store());

        store.add_item(sample_item("1", 2));
        store.add_item(sample_item("1", 3));

        assert_eq!(store.with_cart(|c| c.get("1").unwrap().quantity), 5);
        assert_eq!(store.with_cart(Cart::item_count), 1);
    }

    #[test]
    fn test_subscribers_fire_on_mutation() {
        let store = CartStore::new(memory_store());

        let calls = Arc::new(AtomicUsize::new(0));
        let seen_quantity = Arc::new(AtomicUsize::new(0));
        {
            let calls = calls.clone();
            let seen_quantity = seen_quantity.clone();
            store.subscribe(move |cart| {
                calls.fetch_add(1, Ordering::SeqCst);
                seen_quantity.store(cart.total_items() as usize, Ordering::SeqCst);
            });
        }

        store.add_item(sample_item("1", 2));
        store.update_quantity("1", 4);
        store.toggle_open();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(seen_quantity.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_totals_read_through() {
        let store = CartStore::new(memory_store());

        // Sofa: $1299 with $999 sale; two units plus one rug at $399.
        store.add_item(sample_item("1", 2));
        store.add_item(sample_item("2", 1));

        assert_eq!(store.total_items(), 3);
        assert_eq!(store.total_price(), Money::from_dollars(999 * 2 + 399));
    }
}
