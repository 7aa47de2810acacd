//! # Session Bootstrap
//!
//! Wires a storefront session together: storage, restored state
//! containers, the catalog, and the display configuration.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Session Startup                                 │
//! │                                                                     │
//! │  1. Initialize Logging (optional, host's choice) ─────────────────► │
//! │     • tracing-subscriber with env filter                            │
//! │     • Default: INFO, can be overridden with RUST_LOG                │
//! │                                                                     │
//! │  2. Resolve Storage Root ─────────────────────────────────────────► │
//! │     • HEARTH_DATA_DIR env override                                  │
//! │     • else platform data dir (~/.local/share/hearth on Linux)       │
//! │     • else in-memory (state dies with the session)                  │
//! │                                                                     │
//! │  3. Restore State ────────────────────────────────────────────────► │
//! │     • CartStore from "cart-storage"                                 │
//! │     • WishlistStore from "wishlist-storage"                         │
//! │     • Malformed snapshots restore as empty                          │
//! │                                                                     │
//! │  4. Load Catalog ─────────────────────────────────────────────────► │
//! │     • Built-in sample catalog, read-only for the session            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::{
    self, CartResponse, OrderConfirmation, OrderRequest, OrderSummary, WishlistResponse,
};
use crate::config::DisplayConfig;
use crate::error::ApiError;
use crate::state::{CartStore, WishlistStore};
use hearth_core::{Catalog, CategorySummary, FilterOptions, Product, SortKey};
use hearth_storage::{LocalStore, StorageConfig};

// =============================================================================
// Configuration
// =============================================================================

/// Session configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Explicit storage root. `None` resolves via the environment and
    /// platform data directory.
    pub data_dir: Option<PathBuf>,

    /// Force in-memory storage (nothing persists past the session).
    pub in_memory: bool,

    /// Display-currency settings.
    pub display: DisplayConfig,
}

impl SessionConfig {
    /// Configuration for an ephemeral session (tests, previews).
    pub fn ephemeral() -> Self {
        SessionConfig {
            in_memory: true,
            ..SessionConfig::default()
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// A running storefront session.
///
/// Owns the catalog and both state containers; the display layer calls
/// the methods below (thin wrappers over [`crate::commands`]).
pub struct Session {
    catalog: Catalog,
    cart: CartStore,
    wishlist: WishlistStore,
    display: DisplayConfig,
}

impl Session {
    /// Initializes a session: opens storage, restores snapshots, loads
    /// the catalog.
    pub fn init(config: SessionConfig) -> Result<Self, ApiError> {
        let storage = open_storage(&config)?;

        let cart = CartStore::new(storage.clone());
        let wishlist = WishlistStore::new(storage);
        let catalog = Catalog::sample();

        info!(
            products = catalog.len(),
            cart_items = cart.total_items(),
            "Session initialized"
        );

        Ok(Session {
            catalog,
            cart,
            wishlist,
            display: config.display,
        })
    }

    /// The session's read-only catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The session's cart store.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The session's wishlist store.
    pub fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    /// The session's display-currency settings.
    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    // -------------------------------------------------------------------------
    // Browse actions
    // -------------------------------------------------------------------------

    /// Runs the filter/sort pipeline over the catalog.
    pub fn list_products(&self, filters: &FilterOptions, sort: SortKey) -> Vec<Product> {
        commands::product::list_products(&self.catalog, filters, sort)
    }

    /// Looks up a product by id.
    pub fn get_product(&self, product_id: &str) -> Result<Product, ApiError> {
        commands::product::get_product(&self.catalog, product_id)
    }

    /// Category navigation entries.
    pub fn list_categories(&self) -> Vec<CategorySummary> {
        commands::product::list_categories()
    }

    // -------------------------------------------------------------------------
    // Cart actions
    // -------------------------------------------------------------------------

    /// Current cart contents.
    pub fn get_cart(&self) -> CartResponse {
        commands::cart::get_cart(&self.cart)
    }

    /// Adds a catalog product to the cart.
    pub fn add_to_cart(
        &self,
        product_id: &str,
        quantity: Option<i64>,
    ) -> Result<CartResponse, ApiError> {
        commands::cart::add_to_cart(&self.catalog, &self.cart, product_id, quantity)
    }

    /// Sets a cart entry's quantity (0 removes).
    pub fn update_cart_item(&self, product_id: &str, quantity: i64) -> CartResponse {
        commands::cart::update_cart_item(&self.cart, product_id, quantity)
    }

    /// Removes a cart entry.
    pub fn remove_from_cart(&self, product_id: &str) -> CartResponse {
        commands::cart::remove_from_cart(&self.cart, product_id)
    }

    /// Empties the cart.
    pub fn clear_cart(&self) -> CartResponse {
        commands::cart::clear_cart(&self.cart)
    }

    /// Flips the cart drawer's visibility.
    pub fn toggle_cart(&self) -> CartResponse {
        commands::cart::toggle_cart(&self.cart)
    }

    /// Sets the cart drawer's visibility.
    pub fn set_cart_open(&self, open: bool) -> CartResponse {
        commands::cart::set_cart_open(&self.cart, open)
    }

    // -------------------------------------------------------------------------
    // Wishlist actions
    // -------------------------------------------------------------------------

    /// Current wishlist contents.
    pub fn get_wishlist(&self) -> WishlistResponse {
        commands::wishlist::get_wishlist(&self.wishlist)
    }

    /// Saves a catalog product to the wishlist.
    pub fn add_to_wishlist(&self, product_id: &str) -> Result<WishlistResponse, ApiError> {
        commands::wishlist::add_to_wishlist(&self.catalog, &self.wishlist, product_id)
    }

    /// Removes a product from the wishlist.
    pub fn remove_from_wishlist(&self, product_id: &str) -> WishlistResponse {
        commands::wishlist::remove_from_wishlist(&self.wishlist, product_id)
    }

    /// Membership test: is the product saved?
    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        commands::wishlist::is_in_wishlist(&self.wishlist, product_id)
    }

    /// Clears the wishlist.
    pub fn clear_wishlist(&self) -> WishlistResponse {
        commands::wishlist::clear_wishlist(&self.wishlist)
    }

    // -------------------------------------------------------------------------
    // Checkout actions
    // -------------------------------------------------------------------------

    /// Review-step summary for the current cart.
    pub fn order_summary(&self) -> OrderSummary {
        commands::checkout::order_summary(&self.cart)
    }

    /// Submits an order; on success the cart is cleared.
    pub async fn submit_order(
        &self,
        request: OrderRequest,
    ) -> Result<OrderConfirmation, ApiError> {
        commands::checkout::submit_order(&self.cart, request).await
    }
}

// =============================================================================
// Bootstrap Helpers
// =============================================================================

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=hearth=trace` - Show trace for hearth crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hearth=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Opens the session's storage according to the configuration.
fn open_storage(config: &SessionConfig) -> Result<Arc<LocalStore>, ApiError> {
    if config.in_memory {
        return Ok(Arc::new(LocalStore::in_memory()));
    }

    match resolve_data_dir(config) {
        Some(root) => {
            info!(root = %root.display(), "Opening storage");
            let store = LocalStore::open(StorageConfig::new(root))?;
            Ok(Arc::new(store))
        }
        None => {
            info!("No data directory available, using in-memory storage");
            Ok(Arc::new(LocalStore::in_memory()))
        }
    }
}

/// Determines the storage root.
///
/// ## Resolution Order
/// 1. Explicit `SessionConfig::data_dir`
/// 2. `HEARTH_DATA_DIR` environment variable
/// 3. Platform data directory (`~/.local/share/hearth` on Linux)
fn resolve_data_dir(config: &SessionConfig) -> Option<PathBuf> {
    if let Some(dir) = &config.data_dir {
        return Some(dir.clone());
    }

    if let Ok(dir) = std::env::var("HEARTH_DATA_DIR") {
        return Some(PathBuf::from(dir));
    }

    ProjectDirs::from("com", "hearth", "storefront").map(|dirs| dirs.data_dir().to_path_buf())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::Money;

    fn ephemeral_session() -> Session {
        Session::init(SessionConfig::ephemeral()).unwrap()
    }

    #[test]
    fn test_init_ephemeral() {
        let session = ephemeral_session();
        assert_eq!(session.catalog().len(), 8);
        assert!(session.get_cart().items.is_empty());
        assert!(session.get_wishlist().items.is_empty());
    }

    #[test]
    fn test_browse_through_session() {
        let session = ephemeral_session();

        let filters = FilterOptions::default().with_category("Lighting");
        let results = session.list_products(&filters, SortKey::default());
        assert_eq!(results.len(), 2);

        assert!(session.get_product("1").is_ok());
        assert!(session.get_product("99").is_err());
        assert_eq!(session.list_categories().len(), 6);
    }

    #[test]
    fn test_cart_flow_through_session() {
        let session = ephemeral_session();

        session.add_to_cart("1", Some(2)).unwrap();
        let response = session.add_to_cart("1", Some(3)).unwrap();
        assert_eq!(response.items[0].quantity, 5);

        let response = session.update_cart_item("1", 1);
        assert_eq!(response.totals.total_price, Money::from_dollars(999));

        session.toggle_cart();
        assert!(session.get_cart().is_open);

        let response = session.clear_cart();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_wishlist_flow_through_session() {
        let session = ephemeral_session();

        session.add_to_wishlist("2").unwrap();
        session.add_to_wishlist("2").unwrap();
        assert_eq!(session.get_wishlist().item_count, 1);
        assert!(session.is_in_wishlist("2"));

        session.remove_from_wishlist("2");
        assert!(!session.is_in_wishlist("2"));
    }

    #[test]
    fn test_persistence_across_sessions_on_disk() {
        let root = std::env::temp_dir().join(format!("hearth-session-test-{}", uuid::Uuid::new_v4()));
        let config = SessionConfig {
            data_dir: Some(root.clone()),
            in_memory: false,
            display: DisplayConfig::default(),
        };

        {
            let session = Session::init(config.clone()).unwrap();
            session.add_to_cart("6", Some(2)).unwrap();
            session.add_to_wishlist("7").unwrap();
        }

        let next = Session::init(config).unwrap();
        assert_eq!(next.get_cart().totals.total_quantity, 2);
        assert!(next.is_in_wishlist("7"));

        std::fs::remove_dir_all(&root).ok();
    }

    #[tokio::test(start_paused = true)]
    async fn test_checkout_through_session() {
        let session = ephemeral_session();
        session.add_to_cart("4", Some(1)).unwrap();

        let summary = session.order_summary();
        assert_eq!(summary.subtotal, Money::from_dollars(1899));
        assert_eq!(summary.shipping, Money::zero());

        let request = OrderRequest {
            customer: crate::commands::CustomerInfo {
                first_name: "Jane".to_string(),
                last_name: "Banda".to_string(),
                email: "jane@example.com".to_string(),
                phone: "+265 999 123 456".to_string(),
            },
            shipping: crate::commands::ShippingAddress {
                address: "123 Main Street".to_string(),
                city: "Lilongwe".to_string(),
                postal_code: String::new(),
            },
            payment: crate::commands::PaymentDetails::MobileMoney {
                provider: "airtel".to_string(),
                number: "999123456".to_string(),
            },
        };

        let confirmation = session.submit_order(request).await.unwrap();
        assert_eq!(confirmation.total, Money::from_dollars(1899));
        assert!(session.get_cart().items.is_empty());
    }
}
