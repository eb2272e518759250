//! DELETE statement assembly.

use crate::ident::Ident;
use crate::stmt::param::ParamList;
use crate::value::Value;

/// DELETE keyed on one identifier column.
#[derive(Debug, Clone)]
pub struct DeleteStmt {
    table: Ident,
    key_column: Ident,
    key: Value,
}

impl DeleteStmt {
    pub fn new(table: &str, key_column: &str, key: Value) -> Self {
        Self {
            table: Ident::new(table),
            key_column: Ident::new(key_column),
            key,
        }
    }

    /// Build the SQL and parameters.
    pub fn build(&self) -> (String, ParamList) {
        let mut params = ParamList::new();
        let idx = params.push(self.key.clone());
        let sql = format!(
            "DELETE FROM {} WHERE {} = ${idx}",
            self.table.to_sql(),
            self.key_column.to_sql(),
        );
        (sql, params)
    }

    /// Get the built SQL string (for debugging).
    pub fn to_sql(&self) -> String {
        self.build().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_by_id() {
        let stmt = DeleteStmt::new("users", "id", Value::Int(9));
        let (sql, params) = stmt.build();
        assert_eq!(sql, r#"DELETE FROM "users" WHERE "id" = $1"#);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn delete_quotes_table_name() {
        let stmt = DeleteStmt::new("User Sessions", "id", Value::Int(1));
        assert_eq!(
            stmt.to_sql(),
            r#"DELETE FROM "User Sessions" WHERE "id" = $1"#
        );
    }
}
