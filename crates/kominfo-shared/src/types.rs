//! Common types

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// 1-based page request, as sent by list screens (`?page=2&per_page=10`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, per_page: DEFAULT_PAGE_SIZE }
    }
}

impl Pagination {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }.normalized()
    }

    /// Page below 1 becomes 1, page size is clamped to `1..=MAX_PAGE_SIZE`.
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn offset(&self) -> i64 {
        let p = self.normalized();
        (p.page as i64 - 1) * p.per_page as i64
    }

    pub fn limit(&self) -> i64 {
        self.normalized().per_page as i64
    }
}

/// One page of results plus the numbers a pager needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Wraps an already-sliced page (server-side pagination).
    pub fn from_parts(items: Vec<T>, pagination: Pagination, total: u64) -> Self {
        let p = pagination.normalized();
        Self {
            items,
            page: p.page,
            per_page: p.per_page,
            total,
            total_pages: total_pages(total, p.per_page),
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}

/// `ceil(total / per_page)`; zero items means zero pages.
pub fn total_pages(total: u64, per_page: u32) -> u32 {
    let per_page = per_page.max(1) as u64;
    total.div_ceil(per_page) as u32
}

/// Slices an in-memory result set: page `k` holds `[(k-1)p, kp)` clipped to the length.
pub fn paginate<T>(items: Vec<T>, pagination: Pagination) -> Page<T> {
    let p = pagination.normalized();
    let total = items.len() as u64;
    let start = ((p.page as u64 - 1) * p.per_page as u64).min(total) as usize;
    let end = (start + p.per_page as usize).min(items.len());

    let items = items.into_iter().skip(start).take(end - start).collect();
    Page::from_parts(items, p, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_middle_page() {
        let items: Vec<u32> = (0..25).collect();
        let page = paginate(items, Pagination::new(2, 10));
        assert_eq!(page.items, (10..20).collect::<Vec<_>>());
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_paginate_last_page_is_clipped() {
        let items: Vec<u32> = (0..25).collect();
        let page = paginate(items, Pagination::new(3, 10));
        assert_eq!(page.items, vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_paginate_past_the_end_is_empty() {
        let items: Vec<u32> = (0..5).collect();
        let page = paginate(items, Pagination::new(4, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let items: Vec<u32> = (0..5).collect();
        let page = paginate(items, Pagination { page: 0, per_page: 2 });
        assert_eq!(page.page, 1);
        assert_eq!(page.items, vec![0, 1]);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(7, 0), 7);
    }

    #[test]
    fn test_pagination_from_query_defaults() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p, Pagination::default());
        assert_eq!(Pagination::new(3, 500).limit(), MAX_PAGE_SIZE as i64);
        assert_eq!(Pagination::new(3, 20).offset(), 40);
    }
}
