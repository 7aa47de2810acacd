//! # Local Blob Store
//!
//! The key-value blob store behind the cart and wishlist snapshots.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         LocalStore                                  │
//! │                                                                     │
//! │  Disk backend                          Memory backend               │
//! │  ────────────                          ──────────────               │
//! │  <root>/cart-storage.json              HashMap<String, String>      │
//! │  <root>/wishlist-storage.json          behind a Mutex               │
//! │                                                                     │
//! │  One JSON document per key.            Same semantics, no I/O.      │
//! │  Written whole on every save.          Used by tests and by         │
//! │                                        sessions without a data dir. │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The memory backend stores the *serialized* document, so both backends
//! exercise the same round-trip: whatever survives `save` then `load` on
//! one backend survives on the other.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{StorageError, StorageResult};

// =============================================================================
// Configuration
// =============================================================================

/// Storage configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StorageConfig::new("/path/to/data").pretty(false);
/// let store = LocalStore::open(config)?;
/// ```
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory the blob files live in. Created if missing.
    pub root_dir: PathBuf,

    /// Whether blobs are pretty-printed JSON.
    /// Default: true (the files are user-inspectable state)
    pub pretty: bool,
}

impl StorageConfig {
    /// Creates a new storage configuration rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        StorageConfig {
            root_dir: root_dir.into(),
            pretty: true,
        }
    }

    /// Sets whether blobs are pretty-printed.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

// =============================================================================
// Local Store
// =============================================================================

enum Backend {
    Disk { root: PathBuf, pretty: bool },
    Memory(Mutex<HashMap<String, String>>),
}

/// Client-local key-value blob storage.
///
/// Writes are synchronous and whole-document; there is no partial update,
/// retry, or cross-session conflict resolution. Reads tolerate anything:
/// a blob that is missing, unreadable, or corrupt loads as `None`.
pub struct LocalStore {
    backend: Backend,
}

impl LocalStore {
    /// Opens a disk-backed store, creating the root directory if needed.
    pub fn open(config: StorageConfig) -> StorageResult<Self> {
        fs::create_dir_all(&config.root_dir).map_err(|e| StorageError::OpenFailed {
            path: config.root_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        debug!(root = %config.root_dir.display(), "Storage opened");

        Ok(LocalStore {
            backend: Backend::Disk {
                root: config.root_dir,
                pretty: config.pretty,
            },
        })
    }

    /// Creates an in-memory store.
    ///
    /// Used by tests and by sessions running without a data directory;
    /// contents die with the process.
    pub fn in_memory() -> Self {
        LocalStore {
            backend: Backend::Memory(Mutex::new(HashMap::new())),
        }
    }

    /// Serializes a value and stores it under the given key, replacing
    /// any previous document.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let document = self
            .serialize(value)
            .map_err(|e| StorageError::SerializeFailed {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        match &self.backend {
            Backend::Disk { root, .. } => {
                let path = blob_path(root, key);
                fs::write(&path, document).map_err(|e| StorageError::WriteFailed {
                    key: key.to_string(),
                    reason: e.to_string(),
                })?;
                debug!(key = %key, path = %path.display(), "Blob saved");
            }
            Backend::Memory(map) => {
                let mut map = map.lock().expect("storage mutex poisoned");
                map.insert(key.to_string(), document);
                debug!(key = %key, "Blob saved (memory)");
            }
        }

        Ok(())
    }

    /// Loads and deserializes the document stored under the given key.
    ///
    /// ## Behavior
    /// Returns `None` when the key has never been written, the blob
    /// cannot be read, or its contents do not deserialize. The last two
    /// cases log a warning; callers treat all three as "start empty".
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let document = match &self.backend {
            Backend::Disk { root, .. } => {
                let path = blob_path(root, key);
                if !path.exists() {
                    return None;
                }
                match fs::read_to_string(&path) {
                    Ok(contents) => contents,
                    Err(e) => {
                        warn!(key = %key, error = %e, "Blob unreadable, treating as absent");
                        return None;
                    }
                }
            }
            Backend::Memory(map) => {
                let map = map.lock().expect("storage mutex poisoned");
                map.get(key).cloned()?
            }
        };

        match serde_json::from_str(&document) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key = %key, error = %e, "Blob corrupt, treating as absent");
                None
            }
        }
    }

    /// Removes the document stored under the given key. No-op if absent.
    pub fn remove(&self, key: &str) -> StorageResult<()> {
        match &self.backend {
            Backend::Disk { root, .. } => {
                let path = blob_path(root, key);
                if path.exists() {
                    fs::remove_file(&path).map_err(|e| StorageError::RemoveFailed {
                        key: key.to_string(),
                        reason: e.to_string(),
                    })?;
                }
            }
            Backend::Memory(map) => {
                let mut map = map.lock().expect("storage mutex poisoned");
                map.remove(key);
            }
        }

        Ok(())
    }

    /// Checks whether a document exists under the given key.
    pub fn contains(&self, key: &str) -> bool {
        match &self.backend {
            Backend::Disk { root, .. } => blob_path(root, key).exists(),
            Backend::Memory(map) => {
                let map = map.lock().expect("storage mutex poisoned");
                map.contains_key(key)
            }
        }
    }

    fn serialize<T: Serialize>(&self, value: &T) -> serde_json::Result<String> {
        let pretty = match &self.backend {
            Backend::Disk { pretty, .. } => *pretty,
            Backend::Memory(_) => false,
        };

        if pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
    }
}

impl std::fmt::Debug for LocalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.backend {
            Backend::Disk { root, .. } => {
                f.debug_struct("LocalStore").field("root", root).finish()
            }
            Backend::Memory(_) => f.debug_struct("LocalStore").field("root", &"memory").finish(),
        }
    }
}

/// Maps a key to its blob file path: `<root>/<key>.json`.
fn blob_path(root: &Path, key: &str) -> PathBuf {
    root.join(format!("{}.json", key))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::{Cart, CartItem, Money, Product};
    use std::env;

    fn temp_root() -> PathBuf {
        env::temp_dir().join(format!("hearth-storage-test-{}", uuid::Uuid::new_v4()))
    }

    fn test_product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price: Money::from_cents(12_900),
            sale_price: Some(Money::from_cents(9_900)),
            images: vec![format!("/assets/products/{}.jpg", id)],
            category: "Lighting".to_string(),
            subcategory: None,
            description: "A lamp".to_string(),
            materials: vec!["Ceramic".to_string()],
            dimensions: None,
            care_instructions: None,
            rating: 4.6,
            review_count: 45,
            in_stock: true,
            colors: vec!["White".to_string()],
            style: Some("Traditional".to_string()),
            is_featured: false,
            is_new: true,
            is_trending: false,
        }
    }

    #[test]
    fn test_memory_round_trip() {
        let store = LocalStore::in_memory();

        let items = vec![
            CartItem::new(test_product("1"), 2),
            CartItem::new(test_product("2"), 1),
        ];
        store.save("cart-storage", &items).unwrap();

        let restored: Vec<CartItem> = store.load("cart-storage").unwrap();
        assert_eq!(restored, items);
    }

    #[test]
    fn test_disk_round_trip() {
        let root = temp_root();
        let store = LocalStore::open(StorageConfig::new(&root)).unwrap();

        let items = vec![CartItem::new(test_product("1"), 3)];
        store.save("cart-storage", &items).unwrap();

        // A second store over the same root sees the blob: this is the
        // reload-across-sessions path.
        let reopened = LocalStore::open(StorageConfig::new(&root)).unwrap();
        let restored: Vec<CartItem> = reopened.load("cart-storage").unwrap();
        assert_eq!(restored, items);

        let cart = Cart::from_items(restored);
        assert_eq!(cart.total_price(), Money::from_cents(29_700));

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_missing_key_loads_as_none() {
        let store = LocalStore::in_memory();
        let loaded: Option<Vec<CartItem>> = store.load("never-written");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_corrupt_blob_loads_as_none() {
        let root = temp_root();
        let store = LocalStore::open(StorageConfig::new(&root)).unwrap();

        fs::write(root.join("cart-storage.json"), "{not valid json!").unwrap();

        let loaded: Option<Vec<CartItem>> = store.load("cart-storage");
        assert!(loaded.is_none());

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_wrong_shape_loads_as_none() {
        let store = LocalStore::in_memory();
        store.save("cart-storage", &"just a string").unwrap();

        let loaded: Option<Vec<CartItem>> = store.load("cart-storage");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_replaces_previous_document() {
        let store = LocalStore::in_memory();

        store.save("cart-storage", &vec![1, 2, 3]).unwrap();
        store.save("cart-storage", &vec![9]).unwrap();

        let loaded: Vec<i32> = store.load("cart-storage").unwrap();
        assert_eq!(loaded, vec![9]);
    }

    #[test]
    fn test_remove_and_contains() {
        let store = LocalStore::in_memory();

        assert!(!store.contains("wishlist-storage"));
        store.save("wishlist-storage", &vec![test_product("1")]).unwrap();
        assert!(store.contains("wishlist-storage"));

        store.remove("wishlist-storage").unwrap();
        assert!(!store.contains("wishlist-storage"));

        // Removing an absent key is a no-op
        store.remove("wishlist-storage").unwrap();
    }

    #[test]
    fn test_keys_are_independent() {
        let store = LocalStore::in_memory();

        store.save("cart-storage", &vec![1]).unwrap();
        store.save("wishlist-storage", &vec![2]).unwrap();

        let cart: Vec<i32> = store.load("cart-storage").unwrap();
        let wishlist: Vec<i32> = store.load("wishlist-storage").unwrap();
        assert_eq!(cart, vec![1]);
        assert_eq!(wishlist, vec![2]);
    }
}
