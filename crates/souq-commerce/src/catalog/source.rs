//! Read-only product catalog.

use std::collections::HashSet;
use std::path::Path;

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Number of products shown in home-page and related-product strips.
pub const SHOWCASE_LIMIT: usize = 4;

const BUILTIN_CATALOG: &str = include_str!("../../data/products.json");

/// A read-only list of products.
pub trait Catalog {
    /// All products, in catalog order.
    fn products(&self) -> &[Product];

    fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products().iter().find(|p| p.slug == slug)
    }

    fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }

    /// Featured products in catalog order, at most `limit`.
    fn featured(&self, limit: usize) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| p.is_featured)
            .take(limit)
            .collect()
    }

    /// Other products from the same category, at most `limit`.
    fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Distinct categories in order of first appearance.
    fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products()
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}

/// Catalog loaded once from JSON and never mutated.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self, CommerceError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Load a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CommerceError::CatalogIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Build from records, rejecting duplicate ids or slugs.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for product in &products {
            if !ids.insert(product.id) {
                return Err(CommerceError::Validation(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if !slugs.insert(product.slug.as_str()) {
                return Err(CommerceError::Validation(format!(
                    "duplicate product slug {}",
                    product.slug
                )));
            }
        }
        tracing::debug!(products = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Catalog for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = StaticCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.find_by_slug("iphone-15").is_some());
        assert_eq!(
            catalog.find_by_id(ProductId::new(1)).map(|p| p.slug.as_str()),
            Some("iphone-15")
        );
    }

    #[test]
    fn test_builtin_categories() {
        let catalog = StaticCatalog::builtin().unwrap();
        assert_eq!(
            catalog.categories(),
            vec!["phones", "laptops", "tablets", "watches", "headphones"]
        );
    }

    #[test]
    fn test_featured_is_capped() {
        let catalog = StaticCatalog::builtin().unwrap();
        let featured = catalog.featured(SHOWCASE_LIMIT);
        assert!(featured.len() <= SHOWCASE_LIMIT);
        assert!(featured.iter().all(|p| p.is_featured));
    }

    #[test]
    fn test_related_excludes_self() {
        let catalog = StaticCatalog::builtin().unwrap();
        let product = catalog.find_by_slug("iphone-15").unwrap();
        let related = catalog.related(product, SHOWCASE_LIMIT);
        assert!(!related.is_empty());
        assert!(related.iter().all(|p| p.category == "phones" && p.id != product.id));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let json = r#"[
            {"id": 1, "slug": "a", "category": "phones", "name": {"en": "A", "ar": "A"},
             "description": {"en": "", "ar": ""}, "price": 1},
            {"id": 2, "slug": "a", "category": "phones", "name": {"en": "B", "ar": "B"},
             "description": {"en": "", "ar": ""}, "price": 2}
        ]"#;
        let err = StaticCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, CommerceError::Validation(msg) if msg.contains("slug")));
    }

    #[test]
    fn test_malformed_json() {
        let err = StaticCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CommerceError::Catalog(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = StaticCatalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, CommerceError::CatalogIo { .. }));
    }
}
