//! Offset pagination: request parsing, sort resolution and the page envelope returned to clients.

use crate::case::to_snake_case;
use crate::error::AppError;
use crate::model::Record;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// Requested ordering as sent by the client: a JSON property name and a direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sort {
    pub property: String,
    pub direction: Direction,
}

impl Sort {
    /// Parse `property[,asc|desc]`. Direction is case-insensitive and defaults to ascending.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split(',').map(str::trim);
        let property = parts.next().filter(|p| !p.is_empty())?.to_string();
        let direction = match parts.next() {
            Some(d) if d.eq_ignore_ascii_case("desc") => Direction::Desc,
            _ => Direction::Asc,
        };
        Some(Sort {
            property,
            direction,
        })
    }

    /// Map the property onto a column of `R`. Unknown properties are an error.
    pub fn resolve<R: Record>(&self) -> Result<OrderBy, AppError> {
        let column = to_snake_case(&self.property);
        let key = if column == "id" {
            SortKey::Id
        } else {
            let idx = R::COLUMNS
                .iter()
                .position(|c| *c == column)
                .ok_or_else(|| {
                    AppError::InvalidSort(format!(
                        "No property '{}' found for type '{}'",
                        self.property,
                        R::NAME
                    ))
                })?;
            SortKey::Column(idx)
        };
        Ok(OrderBy {
            key,
            direction: self.direction,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Id,
    /// Index into `Record::COLUMNS`.
    Column(usize),
}

/// A sort checked against a record's columns. Ties are broken by ascending id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderBy {
    pub key: SortKey,
    pub direction: Direction,
}

impl Default for OrderBy {
    fn default() -> Self {
        OrderBy {
            key: SortKey::Id,
            direction: Direction::Asc,
        }
    }
}

impl OrderBy {
    pub fn column<R: Record>(&self) -> &'static str {
        match self.key {
            SortKey::Id => "id",
            SortKey::Column(idx) => R::COLUMNS[idx],
        }
    }

    /// Same order PostgreSQL produces: NULLs last when ascending, first when descending.
    pub fn compare<R: Record>(&self, a: &R, b: &R) -> Ordering {
        let primary = match self.key {
            SortKey::Id => a.id().cmp(&b.id()),
            SortKey::Column(idx) => {
                let av = a.column_values().swap_remove(idx);
                let bv = b.column_values().swap_remove(idx);
                match (av, bv) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            }
        };
        let primary = match self.direction {
            Direction::Asc => primary,
            Direction::Desc => primary.reverse(),
        };
        primary.then_with(|| a.id().cmp(&b.id()))
    }
}

/// Zero-based page index, page size and optional sort.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Option<Sort>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        PageRequest {
            page,
            size,
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Read `page`, `size` and `sort` from query parameters. Missing, unparsable or
    /// out-of-range paging values fall back to defaults; `size` is capped at `MAX_PAGE_SIZE`.
    pub fn from_query(params: &HashMap<String, String>) -> Self {
        let page = params
            .get("page")
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map(|p| p.clamp(0, u32::MAX as i64) as u32)
            .unwrap_or(0);
        let size = params
            .get("size")
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|s| *s >= 1)
            .map(|s| s.min(MAX_PAGE_SIZE as i64) as u32)
            .unwrap_or(DEFAULT_PAGE_SIZE);
        let sort = params.get("sort").and_then(|v| Sort::parse(v));
        Self { page, size, sort }
    }

    /// Clamp a request built in code to the same bounds `from_query` enforces.
    pub fn normalize(self) -> Self {
        let size = if self.size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.size.min(MAX_PAGE_SIZE)
        };
        Self { size, ..self }
    }

    pub fn offset(&self) -> u64 {
        self.page as u64 * self.size as u64
    }

    /// Resolved ordering for `R`; ascending id when no sort was requested.
    pub fn order_by<R: Record>(&self) -> Result<OrderBy, AppError> {
        match &self.sort {
            Some(sort) => sort.resolve::<R>(),
            None => Ok(OrderBy::default()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SortMeta {
    pub sorted: bool,
    pub unsorted: bool,
    pub empty: bool,
}

/// One page of results plus total-count metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub size: u32,
    pub number: u32,
    pub number_of_elements: usize,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
    pub sort: SortMeta,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let size = request.size.max(1);
        let total_pages = total_elements.div_ceil(size as u64);
        let number_of_elements = content.len();
        let sorted = request.sort.is_some();
        Page {
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            size: request.size,
            number: request.page,
            number_of_elements,
            first: request.page == 0,
            last: request.page as u64 + 1 >= total_pages,
            sort: SortMeta {
                sorted,
                unsorted: !sorted,
                empty: !sorted,
            },
        }
    }
}
