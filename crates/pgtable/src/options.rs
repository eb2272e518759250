//! Option bags for the bulk read operations.

use crate::value::Value;

/// Sort direction for the configured id column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

/// Options for [`TableClient::fetch_all`](crate::TableClient::fetch_all).
///
/// Every clause is optional; an unset clause is omitted from the statement
/// entirely.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub(crate) filter: Option<(String, Value)>,
    pub(crate) order: Option<Order>,
    pub(crate) limit: Option<i64>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on `column = value`.
    pub fn filter(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filter = Some((column.to_string(), value.into()));
        self
    }

    /// Order by the client's configured id column.
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Options for [`TableClient::fetch_page`](crate::TableClient::fetch_page).
///
/// Page and page size are both clamped to at least 1; they default to page 1
/// of 10 rows.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub(crate) filter: Option<(String, Value)>,
    pub(crate) page: i64,
    pub(crate) page_size: i64,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            filter: None,
            page: 1,
            page_size: 10,
        }
    }
}

impl PageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on `column = value`.
    pub fn filter(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filter = Some((column.to_string(), value.into()));
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn page_size(mut self, page_size: i64) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

/// One page of rows plus pagination metadata.
///
/// `page_count` is `ceil(total / page_size)` for the page size the query
/// ran with; both derive from the same filter as `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page_count: i64,
}

pub(crate) fn page_count(total: i64, page_size: i64) -> i64 {
    (total + page_size - 1) / page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_options_default_to_first_page_of_ten() {
        let opts = PageOptions::new();
        assert_eq!(opts.page, 1);
        assert_eq!(opts.page_size, 10);
    }

    #[test]
    fn page_options_clamp_to_one() {
        let opts = PageOptions::new().page(0).page_size(-5);
        assert_eq!(opts.page, 1);
        assert_eq!(opts.page_size, 1);
    }

    #[test]
    fn page_count_is_ceiling_division() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }
}
