//! # Domain Types
//!
//! Core domain types for the Hearth storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Product     │   │ FilterOptions  │   │    SortKey     │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (String)   │   │  category      │   │  Featured      │      │
//! │  │  price         │   │  price_range   │   │  New           │      │
//! │  │  sale_price?   │   │  colors        │   │  PriceLow      │      │
//! │  │  facets        │   │  materials     │   │  PriceHigh     │      │
//! │  │  flags         │   │  styles        │   │  Rating        │      │
//! │  └────────────────┘   └────────────────┘   └────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are immutable once loaded from the catalog; they are never
//! mutated or destroyed during a session. Filter criteria are ephemeral
//! UI state rebuilt on every input change.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available to browse and purchase.
///
/// Serialized field names match the display layer's JSON contract
/// (camelCase, with the merchandising flags keeping their short names).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Base unit price. Price-range filtering runs against this value,
    /// never against the sale price.
    pub price: Money,

    /// Discounted price. When present it is the *effective* price and is
    /// assumed to be <= `price` (the catalog does not enforce it).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Money>,

    /// Ordered image references (non-empty; first entry is the hero shot).
    pub images: Vec<String>,

    /// Category display string, matched exactly by the category filter.
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    /// Display description.
    pub description: String,

    /// Material facet values (empty when not applicable).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub care_instructions: Option<String>,

    /// Average review rating in [0, 5].
    pub rating: f32,

    /// Number of reviews behind `rating`.
    pub review_count: u32,

    /// Availability flag.
    pub in_stock: bool,

    /// Color facet values (empty when not applicable).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,

    /// Single style facet value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Merchandising flag: surfaces the product under the default sort.
    #[serde(rename = "featured", default)]
    pub is_featured: bool,

    /// Merchandising flag: surfaces the product under the "new" sort.
    #[serde(rename = "new", default)]
    pub is_new: bool,

    /// Merchandising flag, display-only.
    #[serde(rename = "trending", default)]
    pub is_trending: bool,
}

impl Product {
    /// Returns the price a shopper actually pays: the sale price when one
    /// is set, the base price otherwise.
    #[inline]
    pub fn effective_price(&self) -> Money {
        self.sale_price.unwrap_or(self.price)
    }

    /// Checks whether the product is on sale.
    #[inline]
    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }
}

// =============================================================================
// Dimensions
// =============================================================================

/// Physical dimensions as display strings (e.g. `84"`, `8'`).
///
/// Only the axes that apply to the product are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Dimensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<String>,
}

// =============================================================================
// Filter Options
// =============================================================================

/// Filter criteria for the catalog pipeline.
///
/// Fixed, named predicate fields rather than free-form key lookup: each
/// facet the pipeline understands is an explicit field here. Absent or
/// empty criteria impose no constraint.
///
/// Predicates are AND'd across facets; within a multi-value facet a
/// product matches if *any* of its values is selected (OR-within-facet).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct FilterOptions {
    /// Exact category match. `None` and `""` both mean "any category"
    /// (the filter UI clears a checkbox back to the empty string).
    pub category: Option<String>,

    /// Inclusive `[min, max]` bound on the *base* price.
    pub price_range: Option<(Money, Money)>,

    /// Selected colors; a product matches on any overlap.
    pub colors: Vec<String>,

    /// Selected materials; a product matches on any overlap.
    pub materials: Vec<String>,

    /// Selected styles; a product matches when its style is selected.
    pub styles: Vec<String>,

    /// Reserved lower bound on rating. Accepted but not yet applied by
    /// the pipeline.
    #[serde(rename = "rating")]
    pub min_rating: Option<f32>,
}

impl FilterOptions {
    /// Sets the category constraint.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the inclusive base-price range.
    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_range = Some((min, max));
        self
    }

    /// Sets the selected colors.
    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = colors;
        self
    }

    /// Sets the selected materials.
    pub fn with_materials(mut self, materials: Vec<String>) -> Self {
        self.materials = materials;
        self
    }

    /// Sets the selected styles.
    pub fn with_styles(mut self, styles: Vec<String>) -> Self {
        self.styles = styles;
        self
    }

    /// Checks whether no criteria are set at all (pure pass-through).
    pub fn is_empty(&self) -> bool {
        self.category.as_deref().map_or(true, str::is_empty)
            && self.price_range.is_none()
            && self.colors.is_empty()
            && self.materials.is_empty()
            && self.styles.is_empty()
    }
}

// =============================================================================
// Sort Key
// =============================================================================

/// Display ordering for a browsed product list.
///
/// All sorts are stable: products that compare equal keep their relative
/// catalog order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SortKey {
    /// Featured products first (default).
    #[default]
    Featured,
    /// New arrivals first.
    New,
    /// Ascending by effective price.
    PriceLow,
    /// Descending by effective price.
    PriceHigh,
    /// Descending by rating.
    Rating,
}

// =============================================================================
// Category Summary
// =============================================================================

/// Merchandising data for the category navigation.
///
/// `count` is the display number shown next to the category name; it is
/// catalog-level marketing data, not derived from the loaded products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategorySummary {
    pub name: String,
    pub count: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: i64, sale: Option<i64>) -> Product {
        Product {
            id: "p".to_string(),
            name: "Test".to_string(),
            price: Money::from_cents(price),
            sale_price: sale.map(Money::from_cents),
            images: vec!["/img.jpg".to_string()],
            category: "Decor".to_string(),
            subcategory: None,
            description: String::new(),
            materials: Vec::new(),
            dimensions: None,
            care_instructions: None,
            rating: 4.0,
            review_count: 1,
            in_stock: true,
            colors: Vec::new(),
            style: None,
            is_featured: false,
            is_new: false,
            is_trending: false,
        }
    }

    #[test]
    fn test_effective_price_prefers_sale() {
        assert_eq!(product(10_000, Some(8_000)).effective_price().cents(), 8_000);
        assert_eq!(product(10_000, None).effective_price().cents(), 10_000);
    }

    #[test]
    fn test_sort_key_serde_names() {
        assert_eq!(serde_json::to_string(&SortKey::PriceLow).unwrap(), "\"price-low\"");
        assert_eq!(serde_json::to_string(&SortKey::PriceHigh).unwrap(), "\"price-high\"");
        assert_eq!(serde_json::to_string(&SortKey::Featured).unwrap(), "\"featured\"");

        let key: SortKey = serde_json::from_str("\"new\"").unwrap();
        assert_eq!(key, SortKey::New);
    }

    #[test]
    fn test_sort_key_default_is_featured() {
        assert_eq!(SortKey::default(), SortKey::Featured);
    }

    #[test]
    fn test_product_flag_serde_names() {
        let mut p = product(100, None);
        p.is_featured = true;
        p.is_new = true;

        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["featured"], true);
        assert_eq!(json["new"], true);
        assert_eq!(json["trending"], false);
    }

    #[test]
    fn test_filter_options_is_empty() {
        assert!(FilterOptions::default().is_empty());
        assert!(FilterOptions::default().with_category("").is_empty());
        assert!(!FilterOptions::default().with_category("Rugs").is_empty());
        assert!(!FilterOptions::default()
            .with_colors(vec!["Navy".to_string()])
            .is_empty());
    }

    #[test]
    fn test_product_round_trip() {
        let mut p = product(129_900, Some(99_900));
        p.colors = vec!["Navy".to_string(), "Emerald".to_string()];
        p.style = Some("Modern".to_string());
        p.dimensions = Some(Dimensions {
            width: Some("84\"".to_string()),
            height: Some("32\"".to_string()),
            depth: Some("36\"".to_string()),
            diameter: None,
        });

        let json = serde_json::to_string(&p).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
