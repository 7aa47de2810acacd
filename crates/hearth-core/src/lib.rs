//! # hearth-core: Pure Business Logic for the Hearth Storefront
//!
//! This crate is the **heart** of the storefront. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Hearth Architecture                            │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 Display Layer (TypeScript)                  │   │
//! │  │   Product Grid ──► Cart Drawer ──► Checkout ──► Confirm     │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │ JSON boundary (ts-rs types)        │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │               hearth-storefront (session layer)             │   │
//! │  │   browse, add_to_cart, submit_order, etc.                   │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                    │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                ★ hearth-core (THIS CRATE) ★                 │   │
//! │  │                                                             │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌───────────────┐   │   │
//! │  │   │  types  │ │  money  │ │ cart /   │ │   catalog     │   │   │
//! │  │   │ Product │ │  Money  │ │ wishlist │ │ filter + sort │   │   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └───────────────┘   │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS     │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, FilterOptions, SortKey, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart collection and totals
//! - [`wishlist`] - Wishlist collection
//! - [`catalog`] - Catalog, filter/sort pipeline, sample data
//! - [`error`] - Domain error types
//! - [`validation`] - Checkout input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Persistence, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Operations**: Cart and wishlist operations never fail; absent ids
//!    and zero quantities are defined behavior, not error paths

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use hearth_core::Money` instead of
// `use hearth_core::money::Money`

pub use cart::{Cart, CartItem};
pub use catalog::Catalog;
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;
pub use wishlist::Wishlist;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Subtotal above which shipping is free.
///
/// Orders with a subtotal strictly greater than this ship for free;
/// everything else pays [`FLAT_SHIPPING_RATE`].
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_cents(15_000);

/// Flat shipping charge applied below the free-shipping threshold.
pub const FLAT_SHIPPING_RATE: Money = Money::from_cents(1_500);
