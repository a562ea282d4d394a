//! Shopping cart module.
//!
//! Contains the line-item state, the reducer over it, and the store that
//! owns it.

mod cart;
mod properties;
mod store;

pub use cart::{CartAction, CartLineItem, CartState};
pub use properties::{ProductSelection, VariantProperties};
pub use store::CartStore;
