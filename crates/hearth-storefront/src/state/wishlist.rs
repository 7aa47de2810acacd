//! # Wishlist Store
//!
//! Session state for saved products. Same mutation protocol as the cart
//! store (lock, apply, persist, notify), with no visibility flag and the
//! full item list persisted.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use hearth_core::{Product, Wishlist};
use hearth_storage::LocalStore;

/// Storage key for the persisted wishlist blob.
pub const WISHLIST_STORAGE_KEY: &str = "wishlist-storage";

type Listener = Box<dyn Fn(&Wishlist) + Send + Sync>;

/// Session-wide wishlist state.
///
/// Clones share the same underlying wishlist, storage handle, and
/// subscriber list.
#[derive(Clone)]
pub struct WishlistStore {
    wishlist: Arc<Mutex<Wishlist>>,
    storage: Arc<LocalStore>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl WishlistStore {
    /// Creates a wishlist store, restoring the persisted snapshot if one
    /// exists. A missing or corrupt snapshot yields an empty wishlist.
    pub fn new(storage: Arc<LocalStore>) -> Self {
        let items: Vec<Product> = storage.load(WISHLIST_STORAGE_KEY).unwrap_or_default();
        if !items.is_empty() {
            debug!(items = items.len(), "Wishlist restored from snapshot");
        }

        WishlistStore {
            wishlist: Arc::new(Mutex::new(Wishlist::from_items(items))),
            storage,
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Executes a function with read access to the wishlist.
    pub fn with_wishlist<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Wishlist) -> R,
    {
        let wishlist = self.wishlist.lock().expect("wishlist mutex poisoned");
        f(&wishlist)
    }

    /// Returns a copy of the saved products.
    pub fn items(&self) -> Vec<Product> {
        self.with_wishlist(|w| w.items.clone())
    }

    /// Membership test by product id.
    pub fn contains(&self, product_id: &str) -> bool {
        self.with_wishlist(|w| w.contains(product_id))
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.with_wishlist(Wishlist::is_empty)
    }

    /// Saves a product. Idempotent for already-saved ids.
    pub fn add_item(&self, product: Product) {
        debug!(product_id = %product.id, "Wishlist add_item");
        self.mutate(|wishlist| wishlist.add_item(product));
    }

    /// Removes the product with the given id. No-op if absent.
    pub fn remove_item(&self, product_id: &str) {
        debug!(product_id = %product_id, "Wishlist remove_item");
        self.mutate(|wishlist| wishlist.remove_item(product_id));
    }

    /// Clears all saved products.
    pub fn clear(&self) {
        debug!("Wishlist clear");
        self.mutate(Wishlist::clear);
    }

    /// Registers a listener invoked after every mutation.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Wishlist) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners.lock().expect("listener mutex poisoned");
        listeners.push(Box::new(listener));
    }

    /// Applies a mutation, persists the item list, and notifies
    /// subscribers.
    fn mutate<F>(&self, f: F)
    where
        F: FnOnce(&mut Wishlist),
    {
        let snapshot = {
            let mut wishlist = self.wishlist.lock().expect("wishlist mutex poisoned");
            f(&mut wishlist);
            wishlist.items.clone()
        };

        if let Err(e) = self.storage.save(WISHLIST_STORAGE_KEY, &snapshot) {
            warn!(error = %e, "Wishlist snapshot not persisted");
        }

        let wishlist = self.wishlist.lock().expect("wishlist mutex poisoned").clone();
        let listeners = self.listeners.lock().expect("listener mutex poisoned");
        for listener in listeners.iter() {
            listener(&wishlist);
        }
    }
}

impl std::fmt::Debug for WishlistStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistStore")
            .field("items", &self.with_wishlist(Wishlist::item_count))
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::Catalog;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_product(id: &str) -> Product {
        Catalog::sample().get(id).unwrap().clone()
    }

    fn memory_store() -> Arc<LocalStore> {
        Arc::new(LocalStore::in_memory())
    }

    #[test]
    fn test_double_add_persists_single_entry() {
        let storage = memory_store();
        let store = WishlistStore::new(storage.clone());

        store.add_item(sample_product("2"));
        store.add_item(sample_product("2"));

        assert_eq!(store.items().len(), 1);

        let persisted: Vec<Product> = storage.load(WISHLIST_STORAGE_KEY).unwrap();
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted[0].id, "2");
    }

    #[test]
    fn test_restores_snapshot_across_stores() {
        let storage = memory_store();

        let first = WishlistStore::new(storage.clone());
        first.add_item(sample_product("1"));
        first.add_item(sample_product("5"));

        let second = WishlistStore::new(storage);
        assert_eq!(second.items(), first.items());
        assert!(second.contains("5"));
    }

    #[test]
    fn test_remove_and_clear_persist() {
        let storage = memory_store();
        let store = WishlistStore::new(storage.clone());

        store.add_item(sample_product("1"));
        store.add_item(sample_product("2"));

        store.remove_item("1");
        let persisted: Vec<Product> = storage.load(WISHLIST_STORAGE_KEY).unwrap();
        assert_eq!(persisted.len(), 1);

        store.clear();
        let persisted: Vec<Product> = storage.load(WISHLIST_STORAGE_KEY).unwrap();
        assert!(persisted.is_empty());
    }

    #[test]
    fn test_subscribers_fire_on_mutation() {
        let store = WishlistStore::new(memory_store());

        let calls = Arc::new(AtomicUsize::new(0));
        {
            let calls = calls.clone();
            store.subscribe(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }

        store.add_item(sample_product("1"));
        store.remove_item("1");

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
