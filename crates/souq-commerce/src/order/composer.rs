//! Plain-text order and inquiry messages.
//!
//! Both composers are pure: the same input always yields byte-identical
//! output, and every fragment comes from the localization table.

use crate::cart::{CartLineItem, VariantProperties};
use crate::catalog::Product;
use crate::i18n::{t, Lang};

/// Keycap marker for a 1-based position (e.g., "1️⃣").
fn index_marker(position: usize) -> String {
    format!("{position}\u{FE0F}\u{20E3}")
}

/// "Label: value" lines for the properties that are present.
fn property_lines(properties: &VariantProperties, lang: Lang) -> Vec<String> {
    properties
        .entries()
        .map(|(axis, value)| format!("{}: {}", t(lang, axis.label_key()), value))
        .collect()
}

fn item_block(position: usize, item: &CartLineItem, lang: Lang) -> String {
    let mut lines = vec![format!("{} {}", index_marker(position), item.name_in(lang))];
    lines.extend(property_lines(&item.properties, lang));
    lines.push(format!("{}: {}", t(lang, "order.quantity"), item.quantity));
    lines.join("\n")
}

/// Compose the order summary for a cart.
///
/// Returns an empty string when there are no items; callers must not open an
/// order link in that case.
pub fn compose_cart_message(items: &[CartLineItem], lang: Lang) -> String {
    if items.is_empty() {
        return String::new();
    }

    let blocks = items
        .iter()
        .enumerate()
        .map(|(index, item)| item_block(index + 1, item, lang))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{}\n\n{}\n\n{}",
        t(lang, "order.intro"),
        blocks,
        t(lang, "order.closing")
    )
}

/// Compose an inquiry about one product and the options actually selected.
pub fn compose_inquiry_message(product: &Product, properties: &VariantProperties, lang: Lang) -> String {
    let mut lines = vec![
        t(lang, "inquiry.intro").to_string(),
        format!("{} (ID: {})", product.name_in(lang), product.id),
    ];
    lines.extend(property_lines(properties, lang));

    format!("{}\n\n{}", lines.join("\n"), t(lang, "order.closing"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{CartStore, ProductSelection};
    use crate::i18n::Localized;
    use crate::ids::ProductId;

    fn iphone_selection(properties: VariantProperties) -> ProductSelection {
        ProductSelection {
            product_id: ProductId::new(1),
            product_slug: "iphone-15".to_string(),
            name: Localized::text("iPhone 15", "آيفون 15"),
            price: 3999,
            image: String::new(),
            properties,
        }
    }

    fn iphone_product() -> Product {
        serde_json::from_str(
            r#"{"id": 1, "slug": "iphone-15", "category": "phones",
                "name": {"en": "iPhone 15", "ar": "آيفون 15"},
                "description": {"en": "", "ar": ""}, "price": 3999}"#,
        )
        .unwrap()
    }

    fn two_black_iphones() -> CartStore {
        let props = VariantProperties::new().with_color("Black").with_storage("256GB");
        let mut store = CartStore::new();
        store.add_item(iphone_selection(props.clone()));
        store.add_item(iphone_selection(props));
        store
    }

    #[test]
    fn test_empty_cart_is_empty_message() {
        assert_eq!(compose_cart_message(&[], Lang::En), "");
        assert_eq!(compose_cart_message(&[], Lang::Ar), "");
    }

    #[test]
    fn test_english_message_exact() {
        let store = two_black_iphones();
        let message = compose_cart_message(store.items(), Lang::En);
        assert_eq!(
            message,
            "Hello,\nI would like to order the following products:\n\n\
             1\u{FE0F}\u{20E3} iPhone 15\nColor: Black\nStorage: 256GB\nQuantity: 2\n\n\
             Thank you."
        );
    }

    #[test]
    fn test_property_order_within_block() {
        let store = two_black_iphones();
        let message = compose_cart_message(store.items(), Lang::En);
        let color = message.find("Color: Black").unwrap();
        let storage = message.find("Storage: 256GB").unwrap();
        let quantity = message.find("Quantity: 2").unwrap();
        assert!(color < storage && storage < quantity);
    }

    #[test]
    fn test_arabic_message() {
        let store = two_black_iphones();
        let message = compose_cart_message(store.items(), Lang::Ar);
        assert!(message.starts_with("مرحبًا،\nأود طلب المنتجات التالية:"));
        assert!(message.contains("آيفون 15"));
        assert!(message.contains("اللون: Black"));
        assert!(message.contains("السعة: 256GB"));
        assert!(message.contains("الكمية: 2"));
        assert!(message.ends_with("شكرًا."));
    }

    #[test]
    fn test_blocks_separated_by_blank_line() {
        let mut store = two_black_iphones();
        store.add_item(iphone_selection(VariantProperties::new()));
        let message = compose_cart_message(store.items(), Lang::En);
        assert!(message.contains("Quantity: 2\n\n2\u{FE0F}\u{20E3} iPhone 15\nQuantity: 1"));
    }

    #[test]
    fn test_absent_properties_render_no_lines() {
        let mut store = CartStore::new();
        store.add_item(iphone_selection(VariantProperties::new()));
        let message = compose_cart_message(store.items(), Lang::En);
        assert!(!message.contains("Color"));
        assert!(!message.contains("Storage"));
        assert!(!message.contains("Size"));
        assert!(message.contains("1\u{FE0F}\u{20E3} iPhone 15\nQuantity: 1"));
    }

    #[test]
    fn test_empty_property_value_renders_no_line() {
        let mut store = CartStore::new();
        store.add_item(iphone_selection(VariantProperties::new().with_color("")));
        assert_eq!(
            compose_cart_message(store.items(), Lang::En),
            "Hello,\nI would like to order the following products:\n\n\
             1\u{FE0F}\u{20E3} iPhone 15\nQuantity: 1\n\nThank you."
        );

        let props = VariantProperties::new().with_color("").with_size("");
        assert_eq!(
            compose_inquiry_message(&iphone_product(), &props, Lang::En),
            "Hello,\nI would like to inquire about:\niPhone 15 (ID: 1)\n\nThank you."
        );
    }

    #[test]
    fn test_message_is_deterministic() {
        let store = two_black_iphones();
        let a = compose_cart_message(store.items(), Lang::Ar);
        let b = compose_cart_message(store.items(), Lang::Ar);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_inquiry_lists_only_selected() {
        let product = iphone_product();
        let props = VariantProperties::new().with_storage("512GB");
        let message = compose_inquiry_message(&product, &props, Lang::En);
        assert_eq!(
            message,
            "Hello,\nI would like to inquire about:\niPhone 15 (ID: 1)\nStorage: 512GB\n\nThank you."
        );
    }

    #[test]
    fn test_inquiry_without_selection() {
        let product = iphone_product();
        let message = compose_inquiry_message(&product, &VariantProperties::new(), Lang::Ar);
        assert_eq!(
            message,
            "مرحبًا،\nأود الاستفسار عن:\nآيفون 15 (ID: 1)\n\nشكرًا."
        );
    }
}
