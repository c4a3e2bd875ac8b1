//! Search query and page envelope primitives
//!
//! Pages are 0-based. Paging here works on in-process collections that have
//! already been filtered and sorted by the caller.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Default page size when the caller does not provide one
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Default sort field
pub const DEFAULT_SORT: &str = "name";

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Apply this direction to an ascending ordering
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("unknown sort direction '{other}'")),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Generic search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub page: u32,
    pub per_page: u32,
    pub terms: String,
    pub sort: String,
    pub direction: SortDirection,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: DEFAULT_PER_PAGE,
            terms: String::new(),
            sort: DEFAULT_SORT.to_string(),
            direction: SortDirection::Asc,
        }
    }
}

impl SearchQuery {
    /// Terms trimmed and lowercased, `None` when blank
    pub fn normalized_terms(&self) -> Option<String> {
        let terms = self.terms.trim();
        (!terms.is_empty()).then(|| terms.to_lowercase())
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<T> {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: u32, per_page: u32, total: u64, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Cut the requested page out of a full, ordered result set
    pub fn slice(all: Vec<T>, query: &SearchQuery) -> Self {
        let total = all.len() as u64;
        let per_page = query.per_page as usize;
        let skip = (query.page as usize).saturating_mul(per_page);
        let items = all.into_iter().skip(skip).take(per_page).collect();
        Self::new(query.page, query.per_page, total, items)
    }

    pub fn map<U, F>(self, f: F) -> Pagination<U>
    where
        F: FnMut(T) -> U,
    {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
