//! # State Module
//!
//! Session state containers.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each
//! container has a single responsibility:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     State Architecture                              │
//! │                                                                     │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────┐       │
//! │  │  CartStore   │  │WishlistStore │  │   DisplayConfig      │       │
//! │  │              │  │              │  │                      │       │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │   currency code      │       │
//! │  │    Cart>>    │  │   Wishlist>> │  │   rate, decimals     │       │
//! │  │  + is_open   │  │              │  │                      │       │
//! │  └──────────────┘  └──────────────┘  └──────────────────────┘       │
//! │                                                                     │
//! │  MUTATION PROTOCOL (both stores):                                   │
//! │  1. lock, apply the change                                          │
//! │  2. persist the items snapshot (fire-and-forget, warn on failure)   │
//! │  3. notify subscribers with the new state                           │
//! │                                                                     │
//! │  The cart's visibility flag skips step 2: it is session-only.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod wishlist;

pub use cart::{CartStore, CartTotals, CART_STORAGE_KEY};
pub use wishlist::{WishlistStore, WISHLIST_STORAGE_KEY};
