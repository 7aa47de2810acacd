//! # Product Actions
//!
//! Browsing and lookup over the static catalog.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Product Browse Flow                             │
//! │                                                                     │
//! │  Shopper adjusts a filter or the sort dropdown                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  list_products(catalog, filters, sort)                              │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Pure pipeline recompute (hearth-core::catalog::browse)             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Display-ordered Vec<Product> back to the grid                      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::ApiError;
use hearth_core::{Catalog, CategorySummary, FilterOptions, Product, SortKey};

/// Runs the filter/sort pipeline over the catalog.
///
/// Recomputed in full on every call; deterministic for identical inputs.
pub fn list_products(catalog: &Catalog, filters: &FilterOptions, sort: SortKey) -> Vec<Product> {
    let results = catalog.browse(filters, sort);
    debug!(
        total = catalog.len(),
        matched = results.len(),
        ?sort,
        "Products listed"
    );
    results
}

/// Looks up a single product by id.
///
/// ## Returns
/// * `Ok(Product)` - Product found
/// * `Err(ApiError)` - Unknown id (`NOT_FOUND`)
pub fn get_product(catalog: &Catalog, product_id: &str) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product");
    catalog
        .get(product_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Product", product_id))
}

/// Returns the category navigation entries.
pub fn list_categories() -> Vec<CategorySummary> {
    Catalog::categories()
}
