//! INSERT statement assembly.

use crate::ident::Ident;
use crate::stmt::param::ParamList;
use crate::value::InputData;

/// INSERT built from ordered `(column, value)` pairs, `RETURNING *`.
///
/// The column list and placeholder list are zipped from the same pairs in a
/// single pass, so column `i` can only ever bind value `i`.
#[derive(Debug, Clone)]
pub struct InsertStmt {
    table: Ident,
    fields: InputData,
}

impl InsertStmt {
    pub fn new(table: &str, fields: &InputData) -> Self {
        Self {
            table: Ident::new(table),
            fields: fields.clone(),
        }
    }

    /// Build the SQL and parameters.
    pub fn build(&self) -> (String, ParamList) {
        let mut params = ParamList::new();
        let mut columns = Vec::with_capacity(self.fields.len());
        let mut placeholders = Vec::with_capacity(self.fields.len());

        for (column, value) in self.fields.iter() {
            columns.push(Ident::new(column).to_sql());
            let idx = params.push(value.clone());
            placeholders.push(format!("${idx}"));
        }

        // An empty input bag emits empty parens. The server rejects that
        // statement, which is the contract for inserting nothing.
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            self.table.to_sql(),
            columns.join(", "),
            placeholders.join(", "),
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
    use crate::value::Value;

    #[test]
    fn insert_two_columns() {
        let fields = InputData::new().set("username", "alice").set("age", 30i64);
        let (sql, params) = InsertStmt::new("users", &fields).build();
        assert_eq!(
            sql,
            r#"INSERT INTO "users" ("username", "age") VALUES ($1, $2) RETURNING *"#
        );
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn insert_pairs_columns_and_values_in_order() {
        let fields = InputData::new()
            .set("c", "third")
            .set("a", "first")
            .set("b", "second");
        let (sql, params) = InsertStmt::new("t", &fields).build();
        assert_eq!(
            sql,
            r#"INSERT INTO "t" ("c", "a", "b") VALUES ($1, $2, $3) RETURNING *"#
        );
        assert_eq!(
            params.values(),
            &[
                Value::Text("third".to_string()),
                Value::Text("first".to_string()),
                Value::Text("second".to_string()),
            ]
        );
    }

    #[test]
    fn insert_empty_bag_is_malformed_not_default_values() {
        let (sql, params) = InsertStmt::new("users", &InputData::new()).build();
        assert_eq!(sql, r#"INSERT INTO "users" () VALUES () RETURNING *"#);
        assert!(params.is_empty());
    }
}
