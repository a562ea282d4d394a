//! Shared rendering of products and carts.

use serde::Serialize;
use souq_commerce::catalog::{options_for_category, Product};
use souq_commerce::i18n::t;
use souq_commerce::cart::{CartLineItem, CartState};
use souq_commerce::{Currency, Lang, Money};

use crate::output::{flag_badge, Output};

/// Localized price with currency label.
pub fn price(amount: i64, currency: Currency, lang: Lang) -> String {
    Money::new(amount, currency).display(lang)
}

/// Localized "Color: Black, Storage: 256GB" for a line item.
pub fn describe_properties(item: &CartLineItem, category: Option<&str>, lang: Lang) -> String {
    let options = category.map(options_for_category).unwrap_or_default();
    item.properties
        .entries()
        .map(|(axis, value)| {
            format!(
                "{}: {}",
                t(lang, axis.label_key()),
                options.display_value(axis, value, lang)
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prefix each line with a right-to-left mark when the language needs one,
/// so bidi-aware terminals start Arabic paragraphs from the right.
pub fn directional(text: &str, lang: Lang) -> String {
    if !lang.is_rtl() {
        return text.to_string();
    }
    text.lines()
        .map(|line| format!("\u{200F}{}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print one row per product.
pub fn print_products(output: &Output, products: &[&Product], currency: Currency, lang: Lang) {
    let widths = [22, 28, 14, 0];
    output.table_row(&["SLUG", "NAME", "PRICE", ""], &widths);
    for product in products {
        output.table_row(
            &[
                product.slug.as_str(),
                product.name_in(lang),
                &price(product.price, currency, lang),
                &flag_badge(product.is_new, product.is_featured),
            ],
            &widths,
        );
    }
}

/// Cart summary in JSON mode.
#[derive(Serialize)]
pub struct CartSummary<'a> {
    pub items: &'a [CartLineItem],
    pub total_items: i64,
    pub total_price: i64,
    pub currency: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl<'a> CartSummary<'a> {
    pub fn new(state: &'a CartState, currency: Currency) -> Self {
        Self {
            items: state.items(),
            total_items: state.total_items(),
            total_price: state.total_price(),
            currency: currency.code(),
            url: None,
        }
    }
}

/// Print the cart as a numbered table with a total line.
pub fn print_cart(
    output: &Output,
    state: &CartState,
    category_of: impl Fn(&CartLineItem) -> Option<String>,
    currency: Currency,
    lang: Lang,
) {
    output.header(t(lang, "cart.title"));
    if state.is_empty() {
        output.info(t(lang, "cart.empty"));
        return;
    }

    let widths = [3, 24, 30, 5, 14];
    for (index, item) in state.items().iter().enumerate() {
        let category = category_of(item);
        output.table_row(
            &[
                &format!("{}.", index + 1),
                item.name_in(lang),
                &describe_properties(item, category.as_deref(), lang),
                &format!("x{}", item.quantity),
                &price(item.line_total(), currency, lang),
            ],
            &widths,
        );
    }
    output.kv(
        t(lang, "cart.total"),
        &state.total_money(currency).display(lang),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use souq_commerce::catalog::{Catalog, StaticCatalog};
    use souq_commerce::cart::{CartStore, ProductSelection, VariantProperties};

    #[test]
    fn test_describe_properties_localizes_known_values() {
        let catalog = StaticCatalog::builtin().unwrap();
        let product = catalog.find_by_slug("iphone-15").unwrap();
        let mut store = CartStore::new();
        store.add_item(ProductSelection::from_product(
            product,
            VariantProperties::new().with_color("Black").with_storage("256GB"),
        ));
        let item = &store.items()[0];

        assert_eq!(
            describe_properties(item, Some("phones"), Lang::En),
            "Color: Black, Storage: 256GB"
        );
        assert_eq!(
            describe_properties(item, Some("phones"), Lang::Ar),
            "اللون: أسود, السعة: 256 جيجابايت"
        );
        assert_eq!(describe_properties(item, None, Lang::En), "Color: Black, Storage: 256GB");
    }

    #[test]
    fn test_directional_marks_arabic_lines_only() {
        assert_eq!(directional("Fast\nLight", Lang::En), "Fast\nLight");
        assert_eq!(
            directional("سريع\nخفيف", Lang::Ar),
            "\u{200F}سريع\n\u{200F}خفيف"
        );
    }

    #[test]
    fn test_price_formatting() {
        assert_eq!(price(7998, Currency::QAR, Lang::En), "7,998 QAR");
    }
}
