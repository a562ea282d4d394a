//! Domain types and logic for the Souq bilingual storefront.
//!
//! This crate provides the pieces a storefront front-end needs:
//!
//! - **Catalog**: Products, per-category variant options
//! - **Cart**: Line items keyed by product and variant, driven by a reducer
//! - **Order**: WhatsApp order, inquiry and contact messages and deep links
//! - **Search**: Category, text and flag filters, sorting, pagination
//! - **Contact**: Contact form validation
//!
//! Every user-facing string comes from one English/Arabic table in [`i18n`].
//!
//! # Example
//!
//! ```rust
//! use souq_commerce::prelude::*;
//!
//! let catalog = StaticCatalog::builtin()?;
//! let mut store = Storefront::new(
//!     catalog,
//!     OrderChannel::default(),
//!     Box::new(NoopOpener),
//!     Box::new(NoopNotifier),
//! );
//!
//! let black = VariantProperties::new().with_color("Black").with_storage("256GB");
//! store.add_to_cart("iphone-15", black.clone())?;
//! store.add_to_cart("iphone-15", black)?;
//! assert_eq!(store.cart().total_price(), 7998);
//!
//! let url = store.checkout()?;
//! assert!(url.starts_with("https://wa.me/"));
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod i18n;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod order;
pub mod search;
pub mod storefront;

pub use error::CommerceError;
pub use i18n::{t, Lang, Localized};
pub use ids::*;
pub use money::{Currency, Money};
pub use storefront::{LinkOpener, NoopNotifier, NoopOpener, Notifier, Storefront};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::i18n::{t, Lang, Localized};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        options_for_category, Catalog, OptionChoice, Product, ProductOptions, StaticCatalog,
        VariantAxis,
    };

    // Cart
    pub use crate::cart::{CartAction, CartLineItem, CartState, CartStore, ProductSelection, VariantProperties};

    // Order
    pub use crate::order::{compose_cart_message, compose_inquiry_message, OrderChannel};

    // Contact
    pub use crate::contact::{compose_contact_message, ContactErrors, ContactForm, InquiryType};

    // Search
    pub use crate::search::{Filter, Pagination, SearchQuery, SearchResults, SortOption};

    // Storefront
    pub use crate::storefront::{LinkOpener, NoopNotifier, NoopOpener, Notifier, Storefront};
}
