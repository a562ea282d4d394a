//! Commerce error types.

use thiserror::Error;

use crate::contact::ContactErrors;

/// Errors that can occur at the storefront's fallible boundaries.
///
/// Cart mutations and message composition never fail; these cover catalog
/// loading, lookups, option resolution and the order-link guard.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Catalog JSON could not be parsed.
    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    CatalogIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A variant option value the product's category does not offer.
    #[error("Invalid {axis} option: {value}")]
    InvalidOption { axis: String, value: String },

    /// Unsupported language code.
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Refused to build an order link for an empty message.
    #[error("Order message is empty; nothing to send")]
    EmptyOrderMessage,

    /// Contact form failed validation.
    #[error("Invalid contact form: {0}")]
    InvalidContact(ContactErrors),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}
