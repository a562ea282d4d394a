//! Search results and pagination.

use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of matching items.
    pub total: i64,
    /// Total number of pages; at least 1 even with no matches.
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.saturating_add(per_page - 1) / per_page
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// 1-indexed number of the first item on this page (0 when empty).
    pub fn start_item(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            self.page
                .saturating_sub(1)
                .saturating_mul(self.per_page)
                .saturating_add(1)
                .min(self.total)
        }
    }

    /// Number of the last item on this page.
    pub fn end_item(&self) -> i64 {
        self.page.saturating_mul(self.per_page).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 24, 0)
    }
}

/// One page of search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> SearchResults<T> {
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self { items, pagination }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_middle_page() {
        let p = Pagination::new(2, 4, 15);
        assert_eq!(p.total_pages, 4);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.start_item(), 5);
        assert_eq!(p.end_item(), 8);
    }

    #[test]
    fn test_pagination_last_partial_page() {
        let p = Pagination::new(4, 4, 15);
        assert!(!p.has_next);
        assert_eq!(p.start_item(), 13);
        assert_eq!(p.end_item(), 15);
    }

    #[test]
    fn test_pagination_past_the_end_saturates() {
        let p = Pagination::new(i64::MAX, 100, 15);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next);
        assert_eq!(p.start_item(), 15);
        assert_eq!(p.end_item(), 15);
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::new(1, 24, 0);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next);
        assert!(!p.has_prev);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }
}
