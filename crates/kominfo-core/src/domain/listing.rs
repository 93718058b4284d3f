//! In-memory search/filter/sort/paginate used by the public pages.
//!
//! Public pages fetch the whole published set once and narrow it here; only
//! admin screens paginate in SQL.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use kominfo_shared::types::{paginate, Page, Pagination};

/// Row shape the public list pages can filter on.
pub trait Listable {
    fn title(&self) -> &str;

    /// Extra text matched by the search box besides the title.
    fn search_text(&self) -> Option<&str> {
        None
    }

    fn category(&self) -> Option<&str> {
        None
    }

    fn year(&self) -> Option<String> {
        None
    }

    fn sort_date(&self) -> DateTime<Utc>;

    fn display_order(&self) -> i32 {
        0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
    /// Admin-defined `display_order`, then title
    Ordered,
}

/// Query string of a public list page (`?search=&category=&year=&sort=&page=&per_page=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub year: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListQuery {
    pub fn pagination(&self) -> Pagination {
        let default = Pagination::default();
        Pagination::new(
            self.page.unwrap_or(default.page),
            self.per_page.unwrap_or(default.per_page),
        )
    }

    fn search_term(&self) -> Option<String> {
        non_blank(&self.search).map(|s| s.to_lowercase())
    }

    pub fn matches<T: Listable>(&self, item: &T) -> bool {
        if let Some(term) = self.search_term() {
            let in_title = item.title().to_lowercase().contains(&term);
            let in_text = item
                .search_text()
                .is_some_and(|t| t.to_lowercase().contains(&term));
            if !in_title && !in_text {
                return false;
            }
        }
        if let Some(category) = non_blank(&self.category) {
            if !item.category().is_some_and(|c| c.eq_ignore_ascii_case(category)) {
                return false;
            }
        }
        if let Some(year) = non_blank(&self.year) {
            if item.year().as_deref() != Some(year) {
                return false;
            }
        }
        true
    }
}

/// Query string of an admin table (`?search=&page=&per_page=`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminListQuery {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl AdminListQuery {
    pub fn pagination(&self) -> Pagination {
        let default = Pagination::default();
        Pagination::new(
            self.page.unwrap_or(default.page),
            self.per_page.unwrap_or(default.per_page),
        )
    }

    pub fn search_term(&self) -> Option<String> {
        non_blank(&self.search).map(str::to_string)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub fn sort_items<T: Listable>(items: &mut [T], sort: SortOrder) {
    match sort {
        SortOrder::Newest => items.sort_by(|a, b| b.sort_date().cmp(&a.sort_date())),
        SortOrder::Oldest => items.sort_by_key(|i| i.sort_date()),
        SortOrder::TitleAsc => items.sort_by_key(|i| i.title().to_lowercase()),
        SortOrder::TitleDesc => items.sort_by(|a, b| b.title().to_lowercase().cmp(&a.title().to_lowercase())),
        SortOrder::Ordered => items.sort_by(|a, b| {
            a.display_order()
                .cmp(&b.display_order())
                .then_with(|| a.title().to_lowercase().cmp(&b.title().to_lowercase()))
        }),
    }
}

/// Filter → sort → paginate over the full result set.
pub fn apply_listing<T: Listable>(items: Vec<T>, query: &ListQuery) -> Page<T> {
    let mut filtered: Vec<T> = items.into_iter().filter(|i| query.matches(i)).collect();
    sort_items(&mut filtered, query.sort);
    paginate(filtered, query.pagination())
}

/// Distinct categories in first-seen order, for the filter dropdowns.
pub fn distinct_categories<T: Listable>(items: &[T]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for category in items.iter().filter_map(Listable::category) {
        if !seen.iter().any(|c| c.eq_ignore_ascii_case(category)) {
            seen.push(category.to_string());
        }
    }
    seen
}

/// Distinct years, newest first.
pub fn distinct_years<T: Listable>(items: &[T]) -> Vec<String> {
    let mut years: Vec<String> = items.iter().filter_map(Listable::year).collect();
    years.sort_by(|a, b| b.cmp(a));
    years.dedup();
    years
}
