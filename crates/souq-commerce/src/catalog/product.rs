//! Product records.

use serde::{Deserialize, Serialize};

use crate::i18n::{Lang, Localized};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// A product in the catalog.
///
/// Field names follow the catalog JSON (`isNew`, `isFeatured`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Category key (e.g., "phones").
    pub category: String,
    /// Display name.
    pub name: Localized<String>,
    /// Marketing description.
    pub description: Localized<String>,
    /// Price in whole currency units.
    pub price: i64,
    /// Image references, primary first.
    #[serde(default)]
    pub images: Vec<String>,
    /// Feature bullet points.
    #[serde(default)]
    pub features: Localized<Vec<String>>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_featured: bool,
}

impl Product {
    /// Name in the given language.
    pub fn name_in(&self, lang: Lang) -> &str {
        self.name.get(lang)
    }

    /// Primary image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Price as money in the store currency.
    pub fn price_in(&self, currency: Currency) -> Money {
        Money::new(self.price, currency)
    }

    /// Whether either localized name contains the (already lowercased) needle.
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.en.to_lowercase().contains(needle) || self.name.ar.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 1,
            "slug": "iphone-15",
            "category": "phones",
            "name": { "en": "iPhone 15", "ar": "آيفون 15" },
            "description": { "en": "A phone", "ar": "هاتف" },
            "price": 3999,
            "images": ["/img/iphone-15.jpg", "/img/iphone-15-back.jpg"],
            "features": { "en": ["A16 chip"], "ar": ["شريحة A16"] },
            "isNew": true,
            "isFeatured": false
        }"#
    }

    #[test]
    fn test_product_from_json() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name_in(Lang::Ar), "آيفون 15");
        assert_eq!(product.primary_image(), Some("/img/iphone-15.jpg"));
        assert!(product.is_new);
        assert!(!product.is_featured);
        assert_eq!(product.features.get(Lang::En), &vec!["A16 chip".to_string()]);
    }

    #[test]
    fn test_optional_fields_default() {
        let product: Product = serde_json::from_str(
            r#"{"id": 2, "slug": "x", "category": "watches",
                "name": {"en": "X", "ar": "X"},
                "description": {"en": "", "ar": ""}, "price": 10}"#,
        )
        .unwrap();
        assert!(product.images.is_empty());
        assert!(product.primary_image().is_none());
        assert!(!product.is_new);
    }

    #[test]
    fn test_name_matches_either_language() {
        let product: Product = serde_json::from_str(sample_json()).unwrap();
        assert!(product.name_matches("iphone"));
        assert!(product.name_matches("آيفون"));
        assert!(!product.name_matches("galaxy"));
    }
}
