//! # Hearth Storefront Session Layer
//!
//! The layer a display surface binds to: state containers that persist
//! themselves and publish on mutation, plus the actions that drive them.
//!
//! ## Module Organization
//! ```text
//! hearth_storefront/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── session.rs      ◄─── Session bootstrap (storage path, restore)
//! ├── config.rs       ◄─── Display currency configuration
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart store (persist + publish)
//! │   └── wishlist.rs ◄─── Wishlist store (persist + publish)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Action exports
//! │   ├── product.rs  ◄─── Browse / lookup actions
//! │   ├── cart.rs     ◄─── Cart actions
//! │   ├── wishlist.rs ◄─── Wishlist actions
//! │   └── checkout.rs ◄─── Order summary + simulated order submission
//! └── error.rs        ◄─── API error type for actions
//! ```
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      One-Directional Flow                           │
//! │                                                                     │
//! │  Catalog (static) ──► browse pipeline ──► display layer             │
//! │                                                                     │
//! │  display action ──► CartStore / WishlistStore mutation              │
//! │                          │                                          │
//! │                          ├──► persist snapshot (hearth-storage)     │
//! │                          └──► notify subscribers (re-render)        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod state;

pub use config::DisplayConfig;
pub use error::{ApiError, ErrorCode};
pub use session::{Session, SessionConfig};
pub use state::{CartStore, CartTotals, WishlistStore};
