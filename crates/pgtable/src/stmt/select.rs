//! SELECT statement assembly: point lookup, filtered list, paginated pair.

use crate::ident::Ident;
use crate::options::Order;
use crate::stmt::param::ParamList;
use crate::value::Value;

/// SELECT builder covering point lookup, the filtered/ordered/limited list,
/// and the count+page statement pair.
///
/// Each optional clause is omitted entirely when unset; no clause keyword is
/// ever emitted without its body. `build` and `build_count` share the same
/// filter state, so a page and its total always apply an identical
/// predicate.
#[derive(Debug, Clone)]
pub struct SelectStmt {
    table: Ident,
    filter: Option<(Ident, Value)>,
    order: Option<(Ident, Order)>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl SelectStmt {
    pub fn new(table: &str) -> Self {
        Self {
            table: Ident::new(table),
            filter: None,
            order: None,
            limit: None,
            offset: None,
        }
    }

    /// Add the single equality predicate: `WHERE "column" = $n`.
    pub fn filter(mut self, column: &str, value: Value) -> Self {
        self.filter = Some((Ident::new(column), value));
        self
    }

    /// Order by a column, ascending or descending.
    pub fn order_by(mut self, column: &str, order: Order) -> Self {
        self.order = Some((Ident::new(column), order));
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// `ORDER BY "column" LIMIT page_size OFFSET (page-1)*page_size`.
    ///
    /// Page and page size are clamped to at least 1.
    pub fn paginate(mut self, column: &str, page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        self.order = Some((Ident::new(column), Order::Asc));
        self.limit = Some(page_size);
        self.offset = Some((page - 1) * page_size);
        self
    }

    /// Build `SELECT * …` with all configured clauses.
    pub fn build(&self) -> (String, ParamList) {
        self.build_select(false)
    }

    /// Build `SELECT COUNT(*) …` with the same WHERE, no ordering or paging.
    pub fn build_count(&self) -> (String, ParamList) {
        self.build_select(true)
    }

    fn build_select(&self, is_count: bool) -> (String, ParamList) {
        let mut params = ParamList::new();

        let mut sql = String::from("SELECT ");
        sql.push_str(if is_count { "COUNT(*)" } else { "*" });
        sql.push_str(" FROM ");
        self.table.write_sql(&mut sql);

        if let Some((column, value)) = &self.filter {
            let idx = params.push(value.clone());
            sql.push_str(" WHERE ");
            column.write_sql(&mut sql);
            sql.push_str(&format!(" = ${idx}"));
        }

        if !is_count {
            if let Some((column, order)) = &self.order {
                sql.push_str(" ORDER BY ");
                column.write_sql(&mut sql);
                sql.push_str(match order {
                    Order::Asc => " ASC",
                    Order::Desc => " DESC",
                });
            }
            // Counts are i64, never caller text; they go inline rather than
            // through the parameter list.
            if let Some(limit) = self.limit {
                sql.push_str(&format!(" LIMIT {limit}"));
            }
            if let Some(offset) = self.offset {
                sql.push_str(&format!(" OFFSET {offset}"));
            }
        }

        (sql, params)
    }

    /// Get the built SQL string (for debugging).
    pub fn to_sql(&self) -> String {
        self.build().0
    }

    /// Get the COUNT SQL string (for debugging).
    pub fn to_count_sql(&self) -> String {
        self.build_count().0
    }
}
