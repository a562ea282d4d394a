//! Cart state, line items, and the reducer that transitions them.

use serde::{Deserialize, Serialize};

use crate::cart::{ProductSelection, VariantProperties};
use crate::i18n::{Lang, Localized};
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// A line item in the cart.
///
/// Slug, name, price and image are captured when the item is added and are
/// not refreshed from the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub product_slug: String,
    pub name: Localized<String>,
    /// Unit price in whole currency units.
    pub price: i64,
    pub image: String,
    pub properties: VariantProperties,
    /// Always at least 1.
    pub quantity: i64,
}

impl CartLineItem {
    fn from_selection(selection: ProductSelection) -> Self {
        Self {
            product_id: selection.product_id,
            product_slug: selection.product_slug,
            name: selection.name,
            price: selection.price,
            image: selection.image,
            properties: selection.properties,
            quantity: 1,
        }
    }

    /// Whether this item has the identity key `(product_id, properties)`.
    pub fn is_keyed(&self, product_id: ProductId, properties: &VariantProperties) -> bool {
        self.product_id == product_id && &self.properties == properties
    }

    pub fn name_in(&self, lang: Lang) -> &str {
        self.name.get(lang)
    }

    /// Price times quantity.
    pub fn line_total(&self) -> i64 {
        self.price.saturating_mul(self.quantity)
    }
}

/// A transition of the cart state.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Merge into the matching line (+1) or append with quantity 1.
    AddItem(ProductSelection),
    /// Delete the matching line if present.
    RemoveItem {
        product_id: ProductId,
        properties: VariantProperties,
    },
    /// Set the matching line's quantity; below 1 removes it.
    UpdateQuantity {
        product_id: ProductId,
        properties: VariantProperties,
        quantity: i64,
    },
    /// Empty the cart.
    Clear,
}

impl CartAction {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "add_item",
            CartAction::RemoveItem { .. } => "remove_item",
            CartAction::UpdateQuantity { .. } => "update_quantity",
            CartAction::Clear => "clear",
        }
    }
}

/// Ordered line items with unique identity keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action, producing the next state.
    pub fn reduce(mut self, action: CartAction) -> CartState {
        match action {
            CartAction::AddItem(selection) => {
                match self
                    .items
                    .iter_mut()
                    .find(|i| i.is_keyed(selection.product_id, &selection.properties))
                {
                    Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
                    None => self.items.push(CartLineItem::from_selection(selection)),
                }
            }
            CartAction::RemoveItem {
                product_id,
                properties,
            } => {
                self.items.retain(|i| !i.is_keyed(product_id, &properties));
            }
            CartAction::UpdateQuantity {
                product_id,
                properties,
                quantity,
            } => {
                if quantity < 1 {
                    return self.reduce(CartAction::RemoveItem {
                        product_id,
                        properties,
                    });
                }
                if let Some(item) = self
                    .items
                    .iter_mut()
                    .find(|i| i.is_keyed(product_id, &properties))
                {
                    item.quantity = quantity;
                }
            }
            CartAction::Clear => self.items.clear(),
        }
        self
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Find the line with a given identity key.
    pub fn get(&self, product_id: ProductId, properties: &VariantProperties) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.is_keyed(product_id, properties))
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> i64 {
        self.items.iter().fold(0, |sum, i| sum.saturating_add(i.quantity))
    }

    /// Sum of price times quantity.
    pub fn total_price(&self) -> i64 {
        self.items.iter().fold(0, |sum, i| sum.saturating_add(i.line_total()))
    }

    /// Total price as money.
    pub fn total_money(&self, currency: Currency) -> Money {
        Money::new(self.total_price(), currency)
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
