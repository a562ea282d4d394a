//! Product catalog module.
//!
//! Contains product records, the read-only catalog, and the per-category
//! option tables.

mod options;
mod product;
mod source;

pub use options::{options_for_category, OptionChoice, ProductOptions, VariantAxis};
pub use product::Product;
pub use source::{Catalog, StaticCatalog, SHOWCASE_LIMIT};
