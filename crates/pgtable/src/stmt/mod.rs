//! Statement assembly.
//!
//! Builders turn a table reference plus shape-specific inputs into a
//! `(String, ParamList)` pair. Identifiers are rendered through
//! [`Ident`](crate::Ident) only, values travel as `$n` parameters only, and
//! placeholder numbering comes from [`param::ParamList::push`] at build time
//! rather than string replacement.
//!
//! ```ignore
//! use pgtable::stmt;
//! use pgtable::Value;
//!
//! let (sql, params) = stmt::select("users")
//!     .filter("status", Value::from("active"))
//!     .limit(10)
//!     .build();
//! ```

mod delete;
mod insert;
pub mod param;
mod select;
mod update;

pub use delete::DeleteStmt;
pub use insert::InsertStmt;
pub use param::ParamList;
pub use select::SelectStmt;
pub use update::UpdateStmt;

use crate::value::{InputData, Value};

/// Create a SELECT builder for the given table.
pub fn select(table: &str) -> SelectStmt {
    SelectStmt::new(table)
}

/// Create an INSERT builder for the given table and input bag.
pub fn insert(table: &str, fields: &InputData) -> InsertStmt {
    InsertStmt::new(table, fields)
}

/// Create an UPDATE builder for the given table, input bag, and key.
pub fn update(table: &str, fields: &InputData, key_column: &str, key: Value) -> UpdateStmt {
    UpdateStmt::new(table, fields, key_column, key)
}

/// Create a DELETE builder for the given table and key.
pub fn delete(table: &str, key_column: &str, key: Value) -> DeleteStmt {
    DeleteStmt::new(table, key_column, key)
}
