//! # hearth-storage: Client-Local Persistence for Hearth
//!
//! This crate provides the persistence layer for the Hearth storefront:
//! a small key-value blob store modelled on browser local storage. Each
//! key maps to one serialized JSON document.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Hearth Data Flow                              │
//! │                                                                     │
//! │  CartStore / WishlistStore (hearth-storefront)                      │
//! │       │  save after every mutation, load once at startup            │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                hearth-storage (THIS CRATE)                  │   │
//! │  │                                                             │   │
//! │  │   ┌───────────────┐         ┌───────────────────────────┐  │   │
//! │  │   │  LocalStore   │         │  Backends                 │  │   │
//! │  │   │  (store.rs)   │────────►│  Disk: <root>/<key>.json  │  │   │
//! │  │   │  save / load  │         │  Memory: HashMap (tests)  │  │   │
//! │  │   └───────────────┘         └───────────────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │                                                                     │
//! │  Missing or corrupt blobs are treated as absent state: the          │
//! │  storefront always starts from a valid (possibly empty) snapshot.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use hearth_storage::LocalStore;
//!
//! let store = LocalStore::in_memory();
//! store.save("cart-storage", &vec![1, 2, 3]).unwrap();
//!
//! let items: Option<Vec<i32>> = store.load("cart-storage");
//! assert_eq!(items, Some(vec![1, 2, 3]));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use store::{LocalStore, StorageConfig};
