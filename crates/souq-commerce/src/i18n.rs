//! Localization table for the two storefront languages.
//!
//! Every human-readable fragment the core produces is looked up here by
//! `(language, key)`, so composers never branch on the language themselves.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CommerceError;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    /// All supported languages.
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    /// Parse a language code, ignoring any region suffix (`ar-QA`, `en_US`).
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Lang::En),
            "ar" => Some(Lang::Ar),
            _ => None,
        }
    }

    /// Whether text in this language runs right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Lang::Ar)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Lang {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::from_code(s).ok_or_else(|| CommerceError::UnknownLanguage(s.to_string()))
    }
}

/// A value available in both storefront languages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Localized<T> {
    pub en: T,
    pub ar: T,
}

impl<T> Localized<T> {
    pub fn new(en: T, ar: T) -> Self {
        Self { en, ar }
    }

    /// Get the value for a language.
    pub fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::En => &self.en,
            Lang::Ar => &self.ar,
        }
    }
}

impl Localized<String> {
    /// Build from string slices.
    pub fn text(en: &str, ar: &str) -> Self {
        Self::new(en.to_string(), ar.to_string())
    }
}

/// Translate a key. Unknown keys come back unchanged.
pub fn t(lang: Lang, key: &str) -> &str {
    lookup(lang, key).unwrap_or(key)
}

/// Translate a key, returning `None` when the table has no entry.
pub fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    let text = match (lang, key) {
        // Order message
        (Lang::En, "order.intro") => "Hello,\nI would like to order the following products:",
        (Lang::Ar, "order.intro") => "مرحبًا،\nأود طلب المنتجات التالية:",
        (Lang::En, "order.closing") => "Thank you.",
        (Lang::Ar, "order.closing") => "شكرًا.",
        (Lang::En, "order.color") => "Color",
        (Lang::Ar, "order.color") => "اللون",
        (Lang::En, "order.storage") => "Storage",
        (Lang::Ar, "order.storage") => "السعة",
        (Lang::En, "order.size") => "Size",
        (Lang::Ar, "order.size") => "المقاس",
        (Lang::En, "order.quantity") => "Quantity",
        (Lang::Ar, "order.quantity") => "الكمية",
        (Lang::En, "order.sent.title") => "Order ready",
        (Lang::Ar, "order.sent.title") => "الطلب جاهز",
        (Lang::En, "order.sent.description") => "Complete your order in WhatsApp.",
        (Lang::Ar, "order.sent.description") => "أكمل طلبك عبر واتساب.",

        // Single-product inquiry
        (Lang::En, "inquiry.intro") => "Hello,\nI would like to inquire about:",
        (Lang::Ar, "inquiry.intro") => "مرحبًا،\nأود الاستفسار عن:",

        // Cart
        (Lang::En, "cart.title") => "Shopping Cart",
        (Lang::Ar, "cart.title") => "سلة التسوق",
        (Lang::En, "cart.empty") => "Your cart is empty",
        (Lang::Ar, "cart.empty") => "سلة التسوق فارغة",
        (Lang::En, "cart.total") => "Total",
        (Lang::Ar, "cart.total") => "المجموع",
        (Lang::En, "cart.clear") => "Clear cart",
        (Lang::Ar, "cart.clear") => "إفراغ السلة",
        (Lang::En, "cart.order_via_whatsapp") => "Order via WhatsApp",
        (Lang::Ar, "cart.order_via_whatsapp") => "اطلب عبر واتساب",
        (Lang::En, "cart.added.title") => "Added to cart",
        (Lang::Ar, "cart.added.title") => "تمت الإضافة إلى السلة",

        // Catalog
        (Lang::En, "products.all") => "All",
        (Lang::Ar, "products.all") => "الكل",
        (Lang::En, "products.phones") => "Phones",
        (Lang::Ar, "products.phones") => "هواتف",
        (Lang::En, "products.laptops") => "Laptops",
        (Lang::Ar, "products.laptops") => "حواسيب محمولة",
        (Lang::En, "products.tablets") => "Tablets",
        (Lang::Ar, "products.tablets") => "أجهزة لوحية",
        (Lang::En, "products.watches") => "Watches",
        (Lang::Ar, "products.watches") => "ساعات",
        (Lang::En, "products.headphones") => "Headphones",
        (Lang::Ar, "products.headphones") => "سماعات",
        (Lang::En, "products.new") => "New",
        (Lang::Ar, "products.new") => "جديد",
        (Lang::En, "products.featured") => "Featured",
        (Lang::Ar, "products.featured") => "مميز",
        (Lang::En, "products.no_results") => "No products found",
        (Lang::Ar, "products.no_results") => "لم يتم العثور على منتجات",
        (Lang::En, "product.price") => "Price",
        (Lang::Ar, "product.price") => "السعر",
        (Lang::En, "product.features") => "Features",
        (Lang::Ar, "product.features") => "المميزات",
        (Lang::En, "product.related") => "Related products",
        (Lang::Ar, "product.related") => "منتجات ذات صلة",

        // Interactive shop
        (Lang::En, "shop.prompt") => "What next?",
        (Lang::Ar, "shop.prompt") => "ماذا بعد؟",
        (Lang::En, "shop.browse") => "Browse products",
        (Lang::Ar, "shop.browse") => "تصفح المنتجات",
        (Lang::En, "shop.search") => "Search",
        (Lang::Ar, "shop.search") => "بحث",
        (Lang::En, "shop.add") => "Add to cart",
        (Lang::Ar, "shop.add") => "أضف إلى السلة",
        (Lang::En, "shop.view_cart") => "View cart",
        (Lang::Ar, "shop.view_cart") => "عرض السلة",
        (Lang::En, "shop.change_quantity") => "Change quantity",
        (Lang::Ar, "shop.change_quantity") => "تغيير الكمية",
        (Lang::En, "shop.remove") => "Remove item",
        (Lang::Ar, "shop.remove") => "إزالة منتج",
        (Lang::En, "shop.switch_language") => "Switch language",
        (Lang::Ar, "shop.switch_language") => "تغيير اللغة",
        (Lang::En, "shop.quit") => "Quit",
        (Lang::Ar, "shop.quit") => "خروج",
        (Lang::En, "shop.category") => "Category",
        (Lang::Ar, "shop.category") => "الفئة",
        (Lang::En, "shop.product") => "Product",
        (Lang::Ar, "shop.product") => "المنتج",
        (Lang::En, "shop.item") => "Item",
        (Lang::Ar, "shop.item") => "المنتج في السلة",
        (Lang::En, "shop.language") => "Language",
        (Lang::Ar, "shop.language") => "اللغة",

        // Contact form
        (Lang::En, "contact.whatsapp_intro") => "Hello, I have a new inquiry:",
        (Lang::Ar, "contact.whatsapp_intro") => "مرحبًا، لدي استفسار جديد:",
        (Lang::En, "contact.form.name") => "Name",
        (Lang::Ar, "contact.form.name") => "الاسم",
        (Lang::En, "contact.form.company") => "Company",
        (Lang::Ar, "contact.form.company") => "الشركة",
        (Lang::En, "contact.form.email") => "Email",
        (Lang::Ar, "contact.form.email") => "البريد الإلكتروني",
        (Lang::En, "contact.form.phone") => "Phone",
        (Lang::Ar, "contact.form.phone") => "الهاتف",
        (Lang::En, "contact.form.inquiry_type") => "Inquiry type",
        (Lang::Ar, "contact.form.inquiry_type") => "نوع الاستفسار",
        (Lang::En, "contact.form.message") => "Message",
        (Lang::Ar, "contact.form.message") => "الرسالة",
        (Lang::En, "contact.inquiry_types.bulk") => "Bulk order",
        (Lang::Ar, "contact.inquiry_types.bulk") => "طلب بالجملة",
        (Lang::En, "contact.inquiry_types.corporate") => "Corporate supply",
        (Lang::Ar, "contact.inquiry_types.corporate") => "توريد للشركات",
        (Lang::En, "contact.inquiry_types.general") => "General inquiry",
        (Lang::Ar, "contact.inquiry_types.general") => "استفسار عام",
        (Lang::En, "contact.errors.required") => "This field is required",
        (Lang::Ar, "contact.errors.required") => "هذا الحقل مطلوب",
        (Lang::En, "contact.errors.invalid_email") => "Please enter a valid email address",
        (Lang::Ar, "contact.errors.invalid_email") => "يرجى إدخال بريد إلكتروني صحيح",
        (Lang::En, "contact.errors.too_long") => "This field is too long",
        (Lang::Ar, "contact.errors.too_long") => "هذا الحقل طويل جدًا",
        (Lang::En, "contact.success.title") => "Message ready",
        (Lang::Ar, "contact.success.title") => "الرسالة جاهزة",
        (Lang::En, "contact.success.description") => "We will get back to you shortly.",
        (Lang::Ar, "contact.success.description") => "سنتواصل معك قريبًا.",

        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_from_code() {
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("AR"), Some(Lang::Ar));
        assert_eq!(Lang::from_code("ar-QA"), Some(Lang::Ar));
        assert_eq!(Lang::from_code("en_US"), Some(Lang::En));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::from_code(""), None);
    }

    #[test]
    fn test_lang_parse_error() {
        let err = "de".parse::<Lang>().unwrap_err();
        assert!(matches!(err, CommerceError::UnknownLanguage(code) if code == "de"));
    }

    #[test]
    fn test_rtl() {
        assert!(Lang::Ar.is_rtl());
        assert!(!Lang::En.is_rtl());
    }

    #[test]
    fn test_unknown_key_degrades_to_key() {
        assert_eq!(t(Lang::En, "no.such.key"), "no.such.key");
        assert_eq!(t(Lang::Ar, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_every_english_key_has_arabic() {
        let keys = [
            "order.intro",
            "order.closing",
            "order.color",
            "order.storage",
            "order.size",
            "order.quantity",
            "inquiry.intro",
            "cart.added.title",
            "contact.whatsapp_intro",
            "contact.errors.required",
            "contact.errors.invalid_email",
            "contact.errors.too_long",
        ];
        for key in keys {
            assert!(lookup(Lang::En, key).is_some(), "missing en: {key}");
            assert!(lookup(Lang::Ar, key).is_some(), "missing ar: {key}");
            assert_ne!(lookup(Lang::En, key), lookup(Lang::Ar, key));
        }
    }

    #[test]
    fn test_localized_get() {
        let name = Localized::text("Black", "أسود");
        assert_eq!(name.get(Lang::En), "Black");
        assert_eq!(name.get(Lang::Ar), "أسود");
    }
}
