//! # Catalog and Filter/Sort Pipeline
//!
//! The catalog is the fixed, read-only collection of products available to
//! browse, loaded once at session start. Browsing runs a pure pipeline:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Browse Pipeline                                 │
//! │                                                                     │
//! │  Catalog ──► matches_filters() ──► stable sort ──► display order    │
//! │  (fixed)     AND across facets     by SortKey                       │
//! │              OR within a facet                                      │
//! │                                                                     │
//! │  Recomputed from scratch on every criteria change; deterministic    │
//! │  for identical inputs, so callers are free to memoize.              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;
use crate::types::{CategorySummary, Dimensions, FilterOptions, Product, SortKey};

// =============================================================================
// Catalog
// =============================================================================

/// The fixed collection of all products available to browse.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// Returns all products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Returns the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Runs the filter/sort pipeline and returns the display-ordered list.
    ///
    /// Pure: the catalog itself is never reordered or mutated. Applying
    /// the same criteria twice yields the same result.
    pub fn browse(&self, filters: &FilterOptions, sort: SortKey) -> Vec<Product> {
        let mut results: Vec<Product> = self
            .products
            .iter()
            .filter(|p| matches_filters(p, filters))
            .cloned()
            .collect();

        sort_products(&mut results, sort);
        results
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// Checks a single product against the filter criteria.
///
/// ## Rules
/// 1. `category` set and non-empty: exact match required
/// 2. `price_range`: *base* price within `[min, max]` inclusive (the sale
///    price is deliberately not consulted)
/// 3. `colors`: any overlap between product and selected colors
/// 4. `materials`: any overlap between product and selected materials
/// 5. `styles`: the product's style (absent treated as `""`) must be
///    selected
///
/// Unset or empty criteria pass everything through.
pub fn matches_filters(product: &Product, filters: &FilterOptions) -> bool {
    if let Some(category) = &filters.category {
        if !category.is_empty() && product.category != *category {
            return false;
        }
    }

    if let Some((min, max)) = filters.price_range {
        if product.price < min || product.price > max {
            return false;
        }
    }

    if !filters.colors.is_empty()
        && !product.colors.iter().any(|c| filters.colors.contains(c))
    {
        return false;
    }

    if !filters.materials.is_empty()
        && !product
            .materials
            .iter()
            .any(|m| filters.materials.contains(m))
    {
        return false;
    }

    if !filters.styles.is_empty() {
        let style = product.style.as_deref().unwrap_or("");
        if !filters.styles.iter().any(|s| s == style) {
            return false;
        }
    }

    true
}

// =============================================================================
// Sorting
// =============================================================================

/// Sorts products in place for display.
///
/// Every branch uses a stable sort, so products that compare equal keep
/// their relative catalog order. The flag sorts (`Featured`, `New`) rely
/// on this: flagged products move to the front, everything else stays in
/// catalog order behind them.
pub fn sort_products(products: &mut [Product], sort: SortKey) {
    match sort {
        SortKey::PriceLow => products.sort_by_key(Product::effective_price),
        SortKey::PriceHigh => {
            products.sort_by(|a, b| b.effective_price().cmp(&a.effective_price()))
        }
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::New => products.sort_by_key(|p| !p.is_new),
        SortKey::Featured => products.sort_by_key(|p| !p.is_featured),
    }
}

// =============================================================================
// Sample Catalog
// =============================================================================

impl Catalog {
    /// Builds the built-in home-goods catalog: eight products across six
    /// categories.
    pub fn sample() -> Self {
        Catalog::new(vec![
            Product {
                id: "1".to_string(),
                name: "Modern Velvet Sofa".to_string(),
                price: Money::from_dollars(1299),
                sale_price: Some(Money::from_dollars(999)),
                images: vec!["/assets/products/velvet-sofa.jpg".to_string()],
                category: "Furniture".to_string(),
                subcategory: Some("Sofas".to_string()),
                description: "Luxurious velvet upholstery meets contemporary design in this \
                              stunning sofa. Perfect for modern living rooms."
                    .to_string(),
                materials: vec![
                    "Velvet".to_string(),
                    "Hardwood Frame".to_string(),
                    "High-density Foam".to_string(),
                ],
                dimensions: Some(Dimensions {
                    width: Some("84\"".to_string()),
                    height: Some("32\"".to_string()),
                    depth: Some("36\"".to_string()),
                    diameter: None,
                }),
                care_instructions: Some(
                    "Vacuum regularly. Professional cleaning recommended.".to_string(),
                ),
                rating: 4.5,
                review_count: 128,
                in_stock: true,
                colors: vec![
                    "Navy".to_string(),
                    "Emerald".to_string(),
                    "Blush".to_string(),
                ],
                style: Some("Modern".to_string()),
                is_featured: true,
                is_new: false,
                is_trending: true,
            },
            Product {
                id: "2".to_string(),
                name: "Handwoven Jute Area Rug".to_string(),
                price: Money::from_dollars(399),
                sale_price: None,
                images: vec!["/assets/products/jute-rug.jpg".to_string()],
                category: "Rugs".to_string(),
                subcategory: Some("Area Rugs".to_string()),
                description: "Natural jute fibers create texture and warmth. Eco-friendly \
                              and durable."
                    .to_string(),
                materials: vec!["100% Jute".to_string()],
                dimensions: Some(Dimensions {
                    width: Some("8'".to_string()),
                    height: Some("10'".to_string()),
                    depth: None,
                    diameter: None,
                }),
                care_instructions: Some(
                    "Vacuum regularly. Spot clean with mild detergent.".to_string(),
                ),
                rating: 4.8,
                review_count: 89,
                in_stock: true,
                colors: vec!["Natural".to_string()],
                style: Some("Bohemian".to_string()),
                is_featured: false,
                is_new: false,
                is_trending: true,
            },
            Product {
                id: "3".to_string(),
                name: "Ceramic Table Lamp".to_string(),
                price: Money::from_dollars(149),
                sale_price: Some(Money::from_dollars(119)),
                images: vec!["/assets/products/ceramic-lamp.jpg".to_string()],
                category: "Lighting".to_string(),
                subcategory: Some("Table Lamps".to_string()),
                description: "Artisan-crafted ceramic base with linen shade. Adds ambient \
                              lighting to any space."
                    .to_string(),
                materials: vec!["Ceramic".to_string(), "Linen".to_string()],
                dimensions: Some(Dimensions {
                    width: None,
                    height: Some("24\"".to_string()),
                    depth: None,
                    diameter: Some("14\"".to_string()),
                }),
                care_instructions: Some(
                    "Dust with soft cloth. Use appropriate bulb wattage.".to_string(),
                ),
                rating: 4.6,
                review_count: 45,
                in_stock: true,
                colors: vec![
                    "White".to_string(),
                    "Sage".to_string(),
                    "Terracotta".to_string(),
                ],
                style: Some("Traditional".to_string()),
                is_featured: false,
                is_new: true,
                is_trending: false,
            },
            Product {
                id: "4".to_string(),
                name: "Walnut Dining Table".to_string(),
                price: Money::from_dollars(1899),
                sale_price: None,
                images: vec!["/assets/products/walnut-table.jpg".to_string()],
                category: "Furniture".to_string(),
                subcategory: Some("Dining Tables".to_string()),
                description: "Solid walnut construction with live edge detail. Seats 6-8 \
                              comfortably."
                    .to_string(),
                materials: vec!["Solid Walnut".to_string(), "Steel Legs".to_string()],
                dimensions: Some(Dimensions {
                    width: Some("84\"".to_string()),
                    height: Some("30\"".to_string()),
                    depth: Some("40\"".to_string()),
                    diameter: None,
                }),
                care_instructions: Some(
                    "Oil periodically. Use coasters and placemats.".to_string(),
                ),
                rating: 4.9,
                review_count: 67,
                in_stock: true,
                colors: Vec::new(),
                style: Some("Rustic Modern".to_string()),
                is_featured: true,
                is_new: false,
                is_trending: false,
            },
            Product {
                id: "5".to_string(),
                name: "Abstract Canvas Art".to_string(),
                price: Money::from_dollars(299),
                sale_price: None,
                images: vec!["/assets/products/abstract-art.jpg".to_string()],
                category: "Art".to_string(),
                subcategory: Some("Wall Art".to_string()),
                description: "Original abstract painting on canvas. Ready to hang.".to_string(),
                materials: Vec::new(),
                dimensions: Some(Dimensions {
                    width: Some("48\"".to_string()),
                    height: Some("36\"".to_string()),
                    depth: None,
                    diameter: None,
                }),
                care_instructions: None,
                rating: 4.7,
                review_count: 23,
                in_stock: true,
                colors: Vec::new(),
                style: Some("Modern".to_string()),
                is_featured: false,
                is_new: true,
                is_trending: false,
            },
            Product {
                id: "6".to_string(),
                name: "Linen Throw Pillows".to_string(),
                price: Money::from_dollars(59),
                sale_price: Some(Money::from_dollars(45)),
                images: vec!["/assets/products/linen-pillows.jpg".to_string()],
                category: "Decor".to_string(),
                subcategory: Some("Pillows".to_string()),
                description: "Set of 2 premium linen throw pillows with hidden zippers."
                    .to_string(),
                materials: vec![
                    "100% Linen".to_string(),
                    "Duck Feather Insert".to_string(),
                ],
                dimensions: Some(Dimensions {
                    width: Some("20\"".to_string()),
                    height: Some("20\"".to_string()),
                    depth: None,
                    diameter: None,
                }),
                care_instructions: Some("Machine wash cold, tumble dry low.".to_string()),
                rating: 4.4,
                review_count: 156,
                in_stock: true,
                colors: vec![
                    "Oatmeal".to_string(),
                    "Sage".to_string(),
                    "Charcoal".to_string(),
                    "Terracotta".to_string(),
                ],
                style: Some("Minimalist".to_string()),
                is_featured: false,
                is_new: false,
                is_trending: true,
            },
            Product {
                id: "7".to_string(),
                name: "Marble Coffee Table".to_string(),
                price: Money::from_dollars(899),
                sale_price: None,
                images: vec!["/assets/products/marble-coffee-table.jpg".to_string()],
                category: "Furniture".to_string(),
                subcategory: Some("Coffee Tables".to_string()),
                description: "Carrara marble top with brass legs. A statement piece for any \
                              living room."
                    .to_string(),
                materials: vec!["Carrara Marble".to_string(), "Brass".to_string()],
                dimensions: Some(Dimensions {
                    width: Some("48\"".to_string()),
                    height: Some("16\"".to_string()),
                    depth: Some("24\"".to_string()),
                    diameter: None,
                }),
                care_instructions: Some(
                    "Seal marble annually. Clean spills immediately.".to_string(),
                ),
                rating: 4.8,
                review_count: 92,
                in_stock: true,
                colors: Vec::new(),
                style: Some("Luxury".to_string()),
                is_featured: true,
                is_new: false,
                is_trending: true,
            },
            Product {
                id: "8".to_string(),
                name: "Rattan Pendant Light".to_string(),
                price: Money::from_dollars(229),
                sale_price: None,
                images: vec!["/assets/products/rattan-pendant.jpg".to_string()],
                category: "Lighting".to_string(),
                subcategory: Some("Pendant Lights".to_string()),
                description: "Hand-woven rattan creates beautiful light patterns.".to_string(),
                materials: vec!["Natural Rattan".to_string()],
                dimensions: Some(Dimensions {
                    width: None,
                    height: Some("18\"".to_string()),
                    depth: None,
                    diameter: Some("20\"".to_string()),
                }),
                care_instructions: Some("Dust regularly with soft brush.".to_string()),
                rating: 4.5,
                review_count: 38,
                in_stock: true,
                colors: Vec::new(),
                style: Some("Bohemian".to_string()),
                is_featured: false,
                is_new: true,
                is_trending: false,
            },
        ])
    }

    /// Category navigation entries with merchandising counts.
    pub fn categories() -> Vec<CategorySummary> {
        [
            ("Furniture", 245),
            ("Rugs", 89),
            ("Lighting", 156),
            ("Decor", 423),
            ("Art", 78),
            ("Appliances", 134),
        ]
        .into_iter()
        .map(|(name, count)| CategorySummary {
            name: name.to_string(),
            count,
        })
        .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
