//! UPDATE statement assembly.

use crate::ident::Ident;
use crate::stmt::param::ParamList;
use crate::value::{InputData, Value};

/// UPDATE built from ordered SET pairs, keyed on one identifier column,
/// `RETURNING *`.
///
/// `updated_at = now()` is always appended last, after the caller's pairs.
/// That means an empty input bag still produces a valid statement that
/// touches only the timestamp; that asymmetry with INSERT is deliberate.
#[derive(Debug, Clone)]
pub struct UpdateStmt {
    table: Ident,
    fields: InputData,
    key_column: Ident,
    key: Value,
}

impl UpdateStmt {
    pub fn new(table: &str, fields: &InputData, key_column: &str, key: Value) -> Self {
        Self {
            table: Ident::new(table),
            fields: fields.clone(),
            key_column: Ident::new(key_column),
            key,
        }
    }

    /// Single-column form: exactly one SET pair besides the timestamp.
    pub fn single(table: &str, column: &str, value: Value, key_column: &str, key: Value) -> Self {
        Self::new(table, &InputData::new().set(column, value), key_column, key)
    }

    /// Build the SQL and parameters.
    pub fn build(&self) -> (String, ParamList) {
        let mut params = ParamList::new();
        let mut set_parts = Vec::with_capacity(self.fields.len() + 1);

        for (column, value) in self.fields.iter() {
            let idx = params.push(value.clone());
            set_parts.push(format!("{} = ${idx}", Ident::new(column).to_sql()));
        }
        set_parts.push("updated_at = now()".to_string());

        let key_idx = params.push(self.key.clone());
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ${key_idx} RETURNING *",
            self.table.to_sql(),
            set_parts.join(", "),
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
    fn update_single_column() {
        let stmt = UpdateStmt::single(
            "users",
            "status",
            Value::from("inactive"),
            "id",
            Value::Int(7),
        );
        assert_eq!(
            stmt.to_sql(),
            r#"UPDATE "users" SET "status" = $1, updated_at = now() WHERE "id" = $2 RETURNING *"#
        );
    }

    #[test]
    fn update_multi_column_keeps_order_and_appends_timestamp_last() {
        let fields = InputData::new().set("b", 2i64).set("a", 1i64);
        let stmt = UpdateStmt::new("t", &fields, "id", Value::Int(1));
        assert_eq!(
            stmt.to_sql(),
            r#"UPDATE "t" SET "b" = $1, "a" = $2, updated_at = now() WHERE "id" = $3 RETURNING *"#
        );
    }

    #[test]
    fn update_custom_key_column() {
        let fields = InputData::new().set("x", "v");
        let stmt = UpdateStmt::new("t", &fields, "uuid", Value::from("abc"));
        assert_eq!(
            stmt.to_sql(),
            r#"UPDATE "t" SET "x" = $1, updated_at = now() WHERE "uuid" = $2 RETURNING *"#
        );
    }

    #[test]
    fn update_empty_bag_still_touches_timestamp() {
        let stmt = UpdateStmt::new("t", &InputData::new(), "id", Value::Int(1));
        let (sql, params) = stmt.build();
        assert_eq!(
            sql,
            r#"UPDATE "t" SET updated_at = now() WHERE "id" = $1 RETURNING *"#
        );
        assert_eq!(params.len(), 1);
    }
}
