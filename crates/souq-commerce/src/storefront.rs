//! Storefront facade wiring the cart, catalog and order channel together.

use crate::cart::{CartStore, ProductSelection, VariantProperties};
use crate::catalog::{options_for_category, Catalog, Product, ProductOptions, SHOWCASE_LIMIT};
use crate::contact::{compose_contact_message, ContactForm};
use crate::error::CommerceError;
use crate::i18n::{t, Lang};
use crate::ids::ProductId;
use crate::order::{compose_cart_message, compose_inquiry_message, OrderChannel};
use crate::search::{SearchQuery, SearchResults};

/// Hands a URL to whatever can open it (browser, WhatsApp, a terminal).
pub trait LinkOpener {
    fn open(&self, url: &str);
}

/// Shows a short transient notification.
pub trait Notifier {
    fn notify(&self, title: &str, description: &str);
}

/// Opener that drops every URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOpener;

impl LinkOpener for NoopOpener {
    fn open(&self, _url: &str) {}
}

/// Notifier that drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _title: &str, _description: &str) {}
}

/// One shopper's session: the catalog, their cart and the order channel.
pub struct Storefront<C: Catalog> {
    catalog: C,
    cart: CartStore,
    lang: Lang,
    channel: OrderChannel,
    opener: Box<dyn LinkOpener>,
    notifier: Box<dyn Notifier>,
}

impl<C: Catalog> Storefront<C> {
    pub fn new(
        catalog: C,
        channel: OrderChannel,
        opener: Box<dyn LinkOpener>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            catalog,
            cart: CartStore::new(),
            lang: Lang::default(),
            channel,
            opener,
            notifier,
        }
    }

    /// Set the interface language.
    pub fn with_lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn channel(&self) -> &OrderChannel {
        &self.channel
    }

    /// Look up a product by slug.
    pub fn product(&self, slug: &str) -> Result<&Product, CommerceError> {
        self.catalog
            .find_by_slug(slug)
            .ok_or_else(|| CommerceError::ProductNotFound(slug.to_string()))
    }

    /// Options offered for a product's category.
    pub fn options(&self, slug: &str) -> Result<ProductOptions, CommerceError> {
        Ok(options_for_category(&self.product(slug)?.category))
    }

    /// Add one unit of a product with the chosen properties.
    pub fn add_to_cart(
        &mut self,
        slug: &str,
        properties: VariantProperties,
    ) -> Result<(), CommerceError> {
        let product = self
            .catalog
            .find_by_slug(slug)
            .ok_or_else(|| CommerceError::ProductNotFound(slug.to_string()))?;
        let selection = ProductSelection::from_product(product, properties);
        let name = product.name_in(self.lang).to_string();

        self.cart.add_item(selection);
        self.notifier.notify(t(self.lang, "cart.added.title"), &name);
        Ok(())
    }

    pub fn remove_from_cart(&mut self, product_id: ProductId, properties: VariantProperties) {
        self.cart.remove_item(product_id, properties);
    }

    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        properties: VariantProperties,
        quantity: i64,
    ) {
        self.cart.update_quantity(product_id, properties, quantity);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear_cart();
    }

    /// Compose the cart order, open its WhatsApp link and return the URL.
    ///
    /// The cart is left as is; the order is only confirmed once the shopper
    /// sends the message.
    pub fn checkout(&self) -> Result<String, CommerceError> {
        if self.cart.is_empty() {
            tracing::warn!("checkout requested with an empty cart");
            return Err(CommerceError::EmptyOrderMessage);
        }

        let message = compose_cart_message(self.cart.items(), self.lang);
        let url = self.channel.link(&message)?;
        tracing::info!(
            lines = self.cart.items().len(),
            total_items = self.cart.total_items(),
            message_len = message.len(),
            lang = self.lang.code(),
            "order link created"
        );

        self.opener.open(&url);
        self.notifier.notify(
            t(self.lang, "order.sent.title"),
            t(self.lang, "order.sent.description"),
        );
        Ok(url)
    }

    /// Ask about a single product without touching the cart.
    pub fn inquire(
        &self,
        slug: &str,
        properties: &VariantProperties,
    ) -> Result<String, CommerceError> {
        let product = self.product(slug)?;
        let message = compose_inquiry_message(product, properties, self.lang);
        let url = self.channel.link(&message)?;
        tracing::info!(
            product = %product.id,
            message_len = message.len(),
            "inquiry link created"
        );

        self.opener.open(&url);
        Ok(url)
    }

    /// Validate a contact form and open its WhatsApp link.
    pub fn submit_contact(&self, form: &ContactForm) -> Result<String, CommerceError> {
        let form = form.validate().map_err(CommerceError::InvalidContact)?;
        let message = compose_contact_message(&form, self.lang);
        let url = self.channel.link(&message)?;
        tracing::info!(
            inquiry_type = form.inquiry_type.as_str(),
            message_len = message.len(),
            "contact link created"
        );

        self.opener.open(&url);
        self.notifier.notify(
            t(self.lang, "contact.success.title"),
            t(self.lang, "contact.success.description"),
        );
        Ok(url)
    }

    pub fn search(&self, query: &SearchQuery) -> SearchResults<&Product> {
        query.execute(self.catalog.products())
    }

    /// Featured products for the home page.
    pub fn featured(&self) -> Vec<&Product> {
        self.catalog.featured(SHOWCASE_LIMIT)
    }

    /// Products related to the given one.
    pub fn related(&self, slug: &str) -> Result<Vec<&Product>, CommerceError> {
        let product = self.product(slug)?;
        Ok(self.catalog.related(product, SHOWCASE_LIMIT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::contact::{ContactField, FieldError};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder {
        urls: Rc<RefCell<Vec<String>>>,
        notes: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl LinkOpener for Recorder {
        fn open(&self, url: &str) {
            self.urls.borrow_mut().push(url.to_string());
        }
    }

    impl Notifier for Recorder {
        fn notify(&self, title: &str, description: &str) {
            self.notes
                .borrow_mut()
                .push((title.to_string(), description.to_string()));
        }
    }

    fn storefront() -> (Storefront<StaticCatalog>, Recorder) {
        let recorder = Recorder::default();
        let store = Storefront::new(
            StaticCatalog::builtin().unwrap(),
            OrderChannel::new("+974 5000 0000").unwrap(),
            Box::new(recorder.clone()),
            Box::new(recorder.clone()),
        );
        (store, recorder)
    }

    fn black_256() -> VariantProperties {
        VariantProperties::new()
            .with_color("Black")
            .with_storage("256GB")
    }

    #[test]
    fn test_add_to_cart_notifies() {
        let (mut store, recorder) = storefront();
        store.add_to_cart("iphone-15", black_256()).unwrap();
        store.add_to_cart("iphone-15", black_256()).unwrap();

        assert_eq!(store.cart().items().len(), 1);
        assert_eq!(store.cart().total_items(), 2);
        assert_eq!(store.cart().total_price(), 7998);

        let notes = recorder.notes.borrow();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0], ("Added to cart".to_string(), "iPhone 15".to_string()));
    }

    #[test]
    fn test_add_unknown_product() {
        let (mut store, recorder) = storefront();
        let err = store.add_to_cart("nokia-3310", VariantProperties::new());
        assert!(matches!(err, Err(CommerceError::ProductNotFound(_))));
        assert!(store.cart().is_empty());
        assert!(recorder.notes.borrow().is_empty());
    }

    #[test]
    fn test_checkout_empty_cart_opens_nothing() {
        let (store, recorder) = storefront();
        assert!(matches!(store.checkout(), Err(CommerceError::EmptyOrderMessage)));
        assert!(recorder.urls.borrow().is_empty());
        assert!(recorder.notes.borrow().is_empty());
    }

    #[test]
    fn test_checkout_opens_link_and_keeps_cart() {
        let (mut store, recorder) = storefront();
        store.add_to_cart("iphone-15", black_256()).unwrap();
        let url = store.checkout().unwrap();

        assert!(url.starts_with("https://wa.me/97450000000?text="));
        assert!(url.contains("Color%3A%20Black"));
        assert_eq!(recorder.urls.borrow().as_slice(), &[url.clone()]);
        assert_eq!(recorder.notes.borrow().last().unwrap().0, "Order ready");
        assert_eq!(store.cart().total_items(), 1);
    }

    #[test]
    fn test_update_and_remove() {
        let (mut store, _) = storefront();
        store.add_to_cart("iphone-15", black_256()).unwrap();
        store.update_quantity(ProductId::new(1), black_256(), 5);
        assert_eq!(store.cart().total_items(), 5);
        store.update_quantity(ProductId::new(1), black_256(), 0);
        assert!(store.cart().is_empty());

        store.add_to_cart("iphone-15", black_256()).unwrap();
        store.remove_from_cart(ProductId::new(1), VariantProperties::new());
        assert_eq!(store.cart().items().len(), 1);
        store.clear_cart();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_inquire_leaves_cart_alone() {
        let (store, recorder) = storefront();
        let url = store.inquire("iphone-15", &black_256()).unwrap();
        assert!(url.contains("ID%3A%201"));
        assert!(store.cart().is_empty());
        assert_eq!(recorder.urls.borrow().len(), 1);
    }

    #[test]
    fn test_submit_contact_invalid() {
        let (store, recorder) = storefront();
        let err = store.submit_contact(&ContactForm::default()).unwrap_err();
        match err {
            CommerceError::InvalidContact(errors) => {
                assert_eq!(errors.get(ContactField::Name), Some(FieldError::Required));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(recorder.urls.borrow().is_empty());
    }

    #[test]
    fn test_submit_contact_arabic() {
        let (mut store, recorder) = storefront();
        store.set_lang(Lang::Ar);
        let form = ContactForm {
            name: "سارة".to_string(),
            email: "sara@example.com".to_string(),
            phone: "55551234".to_string(),
            message: "مرحبا".to_string(),
            ..ContactForm::default()
        };
        let url = store.submit_contact(&form).unwrap();
        assert!(url.starts_with("https://wa.me/97450000000?text="));
        assert_eq!(recorder.notes.borrow()[0].0, "الرسالة جاهزة");
    }

    #[test]
    fn test_catalog_reads() {
        let (store, _) = storefront();
        assert_eq!(store.featured().len(), SHOWCASE_LIMIT);
        let related = store.related("iphone-15").unwrap();
        assert!(!related.is_empty());
        assert!(related.iter().all(|p| p.category == "phones" && p.slug != "iphone-15"));
        assert!(store.related("missing").is_err());

        let results = store.search(&SearchQuery::new().with_category(Some("laptops")));
        assert!(results.items.iter().all(|p| p.category == "laptops"));
    }

    #[test]
    fn test_options_by_product() {
        let (store, _) = storefront();
        let options = store.options("iphone-15").unwrap();
        assert!(!options.colors.is_empty());
        assert!(!options.storage.is_empty());
    }
}
