//! Search query builder.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::search::{Filter, Pagination, SearchResults};

/// Category value that means "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Position,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by English name A-Z.
    NameAsc,
    /// New products first, otherwise catalog order.
    Newest,
}

impl SortOption {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "position" | "featured" => Some(SortOption::Position),
            "price_asc" => Some(SortOption::PriceAsc),
            "price_desc" => Some(SortOption::PriceDesc),
            "name" | "name_asc" => Some(SortOption::NameAsc),
            "newest" | "new" => Some(SortOption::Newest),
            _ => None,
        }
    }

    fn sort(&self, products: &mut [&Product]) {
        // Stable sorts keep catalog order between equal keys.
        match self {
            SortOption::Position => {}
            SortOption::PriceAsc => products.sort_by_key(|p| p.price),
            SortOption::PriceDesc => products.sort_by_key(|p| std::cmp::Reverse(p.price)),
            SortOption::NameAsc => products.sort_by_key(|p| p.name.en.to_lowercase()),
            SortOption::Newest => products.sort_by_key(|p| !p.is_new),
        }
    }
}

/// A search query over the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Text query.
    pub query: Option<String>,
    /// Filters to apply (all must match).
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self {
            query: None,
            filters: Vec::new(),
            sort: SortOption::Position,
            page: 1,
            per_page: 24,
        }
    }

    /// Set the text query. Blank input leaves the query unset.
    pub fn with_query(mut self, q: impl AsRef<str>) -> Self {
        let q = q.as_ref().trim();
        if !q.is_empty() {
            self.query = Some(q.to_string());
            self.filters.push(Filter::text(q));
        }
        self
    }

    /// Restrict to a category. `None` or `"all"` leaves the query unrestricted.
    pub fn with_category(mut self, category: Option<&str>) -> Self {
        if let Some(category) = category.filter(|c| *c != ALL_CATEGORIES && !c.is_empty()) {
            self.filters.push(Filter::category(category));
        }
        self
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Calculate offset of the first item on the page.
    pub fn offset(&self) -> i64 {
        self.page.max(1).saturating_sub(1).saturating_mul(self.per_page.max(0))
    }

    /// Whether a product passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Run the query against a product list.
    pub fn execute<'a>(&self, products: &'a [Product]) -> SearchResults<&'a Product> {
        let mut matched: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        self.sort.sort(&mut matched);

        let pagination = Pagination::new(self.page, self.per_page, matched.len() as i64);
        let items = matched
            .into_iter()
            .skip(self.offset() as usize)
            .take(self.per_page as usize)
            .collect();

        SearchResults::new(items, pagination)
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}
