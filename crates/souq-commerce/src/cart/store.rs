//! The single owner of the cart state.

use crate::cart::{CartAction, CartLineItem, CartState, ProductSelection, VariantProperties};
use crate::ids::ProductId;

/// Holds one [`CartState`] and replaces it on every dispatched action.
///
/// Mutation goes through `&mut self`, so a read-modify-write can never
/// interleave with another on the same store. Hosts that share a store
/// across threads must hold their lock across the whole `dispatch` call.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// A store with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing state.
    pub fn with_state(state: CartState) -> Self {
        Self { state }
    }

    /// Apply an action and replace the state.
    pub fn dispatch(&mut self, action: CartAction) {
        let kind = action.kind();
        let current = std::mem::take(&mut self.state);
        self.state = current.reduce(action);
        tracing::debug!(
            action = kind,
            lines = self.state.line_count(),
            total_items = self.state.total_items(),
            "cart updated"
        );
    }

    pub fn add_item(&mut self, selection: ProductSelection) {
        self.dispatch(CartAction::AddItem(selection));
    }

    pub fn remove_item(&mut self, product_id: ProductId, properties: VariantProperties) {
        self.dispatch(CartAction::RemoveItem {
            product_id,
            properties,
        });
    }

    pub fn update_quantity(&mut self, product_id: ProductId, properties: VariantProperties, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity {
            product_id,
            properties,
            quantity,
        });
    }

    pub fn clear_cart(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// Current state snapshot.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn items(&self) -> &[CartLineItem] {
        self.state.items()
    }

    pub fn total_items(&self) -> i64 {
        self.state.total_items()
    }

    pub fn total_price(&self) -> i64 {
        self.state.total_price()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Localized;

    fn iphone(properties: VariantProperties) -> ProductSelection {
        ProductSelection {
            product_id: ProductId::new(1),
            product_slug: "iphone-15".to_string(),
            name: Localized::text("iPhone 15", "آيفون 15"),
            price: 3999,
            image: "/images/products/iphone-15.jpg".to_string(),
            properties,
        }
    }

    #[test]
    fn test_store_starts_empty() {
        let store = CartStore::new();
        assert!(store.is_empty());
        assert_eq!(store.total_items(), 0);
        assert_eq!(store.total_price(), 0);
    }

    #[test]
    fn test_add_twice_example() {
        let props = VariantProperties::new().with_color("Black").with_storage("256GB");
        let mut store = CartStore::new();
        store.add_item(iphone(props.clone()));
        store.add_item(iphone(props));

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, 2);
        assert_eq!(store.items()[0].product_slug, "iphone-15");
        assert_eq!(store.total_items(), 2);
        assert_eq!(store.total_price(), 7998);
    }

    #[test]
    fn test_update_and_remove() {
        let props = VariantProperties::new().with_color("Blue");
        let mut store = CartStore::new();
        store.add_item(iphone(props.clone()));
        store.update_quantity(ProductId::new(1), props.clone(), 3);
        assert_eq!(store.total_items(), 3);

        store.update_quantity(ProductId::new(1), props.clone(), 0);
        assert!(store.is_empty());

        store.add_item(iphone(props.clone()));
        store.remove_item(ProductId::new(1), props);
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_cart() {
        let mut store = CartStore::new();
        store.add_item(iphone(VariantProperties::new()));
        store.add_item(iphone(VariantProperties::new().with_color("White")));
        store.clear_cart();
        assert!(store.is_empty());
    }

    #[test]
    fn test_with_state_resumes() {
        let mut original = CartStore::new();
        original.add_item(iphone(VariantProperties::new()));
        let resumed = CartStore::with_state(original.state().clone());
        assert_eq!(resumed.total_items(), 1);
    }
}
