//! Search module.
//!
//! Category, text and flag filters over the catalog, with sorting and
//! pagination.

mod filter;
mod query;
mod results;

pub use filter::Filter;
pub use query::{SearchQuery, SortOption, ALL_CATEGORIES};
pub use results::{Pagination, SearchResults};
