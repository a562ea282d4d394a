//! Variant properties and the selection handed to the cart.

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, VariantAxis};
use crate::i18n::Localized;
use crate::ids::ProductId;

/// The shopper's choice of color, storage and size.
///
/// Equality is field-by-field, so two all-absent values are equal and any
/// value with a field set differs from the all-absent one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct VariantProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl VariantProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_storage(mut self, storage: impl Into<String>) -> Self {
        self.storage = Some(storage.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn get(&self, axis: VariantAxis) -> Option<&str> {
        match axis {
            VariantAxis::Color => self.color.as_deref(),
            VariantAxis::Storage => self.storage.as_deref(),
            VariantAxis::Size => self.size.as_deref(),
        }
    }

    /// Non-empty properties in render order: color, storage, size.
    ///
    /// An empty value still takes part in equality but is never rendered.
    pub fn entries(&self) -> impl Iterator<Item = (VariantAxis, &str)> + '_ {
        VariantAxis::ALL.into_iter().filter_map(move |axis| {
            self.get(axis)
                .filter(|value| !value.is_empty())
                .map(|value| (axis, value))
        })
    }

    /// Whether no property is set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.storage.is_none() && self.size.is_none()
    }
}

/// A product plus variant choice, as added to the cart. Carries no quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSelection {
    pub product_id: ProductId,
    pub product_slug: String,
    pub name: Localized<String>,
    pub price: i64,
    pub image: String,
    pub properties: VariantProperties,
}

impl ProductSelection {
    /// Capture the display data of a product at add-time.
    pub fn from_product(product: &Product, properties: VariantProperties) -> Self {
        Self {
            product_id: product.id,
            product_slug: product.slug.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.primary_image().unwrap_or_default().to_string(),
            properties,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_absent_are_equal() {
        assert_eq!(VariantProperties::default(), VariantProperties::new());
        assert!(VariantProperties::default().is_empty());
    }

    #[test]
    fn test_any_field_set_differs_from_absent() {
        let empty = VariantProperties::default();
        assert_ne!(empty, VariantProperties::new().with_color("Black"));
        assert_ne!(empty, VariantProperties::new().with_storage("256GB"));
        assert_ne!(empty, VariantProperties::new().with_size("41mm"));
    }

    #[test]
    fn test_equality_is_exact() {
        let a = VariantProperties::new().with_color("Black").with_storage("256GB");
        let b = VariantProperties::new().with_storage("256GB").with_color("Black");
        let c = VariantProperties::new().with_color("black").with_storage("256GB");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_entries_in_render_order() {
        let props = VariantProperties::new().with_size("45mm").with_color("Black");
        let entries: Vec<_> = props.entries().collect();
        assert_eq!(
            entries,
            vec![(VariantAxis::Color, "Black"), (VariantAxis::Size, "45mm")]
        );
    }

    #[test]
    fn test_empty_value_is_set_but_not_rendered() {
        let props = VariantProperties::new().with_color("").with_storage("256GB");
        assert_ne!(props, VariantProperties::new().with_storage("256GB"));
        assert!(!props.is_empty());
        let entries: Vec<_> = props.entries().collect();
        assert_eq!(entries, vec![(VariantAxis::Storage, "256GB")]);
    }

    #[test]
    fn test_absent_fields_not_serialized() {
        let json = serde_json::to_string(&VariantProperties::new().with_color("Blue")).unwrap();
        assert_eq!(json, r#"{"color":"Blue"}"#);
    }
}
