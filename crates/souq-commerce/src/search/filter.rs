//! Search filter types.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// A search filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Filter by category key.
    Category(String),
    /// Case-insensitive substring of the English or Arabic name.
    Text(String),
    /// Only featured products.
    Featured,
    /// Only new products.
    New,
    /// Filter by price range (inclusive).
    PriceRange { min: Option<i64>, max: Option<i64> },
}

impl Filter {
    /// Create a category filter.
    pub fn category(category: impl Into<String>) -> Self {
        Filter::Category(category.into())
    }

    /// Create a text search filter. The needle is trimmed and lowercased.
    pub fn text(query: impl AsRef<str>) -> Self {
        Filter::Text(query.as_ref().trim().to_lowercase())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<i64>, max: Option<i64>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(category) => &product.category == category,
            Filter::Text(needle) => needle.is_empty() || product.name_matches(needle),
            Filter::Featured => product.is_featured,
            Filter::New => product.is_new,
            Filter::PriceRange { min, max } => {
                min.map_or(true, |min| product.price >= min)
                    && max.map_or(true, |max| product.price <= max)
            }
        }
    }
}
