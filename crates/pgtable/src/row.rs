//! Row decoding: the [`FromRow`] seam and the loosely-typed [`Record`] map.

use crate::error::{AccessError, AccessResult};
use crate::value::Value;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tokio_postgres::Row;
use tokio_postgres::types::Type;

/// Convert a database row into a caller-defined type.
///
/// Decoding happens explicitly at the boundary; a failed decode is an error,
/// never a cast.
///
/// # Example
///
/// ```ignore
/// use pgtable::{AccessResult, FromRow, RowExt};
///
/// struct User {
///     id: i64,
///     username: String,
/// }
///
/// impl FromRow for User {
///     fn from_row(row: &tokio_postgres::Row) -> AccessResult<Self> {
///         Ok(Self {
///             id: row.try_get_column("id")?,
///             username: row.try_get_column("username")?,
///         })
///     }
/// }
/// ```
pub trait FromRow: Sized {
    /// Convert a database row into Self.
    fn from_row(row: &Row) -> AccessResult<Self>;
}

/// Extension trait for typed single-column access with error mapping.
pub trait RowExt {
    fn try_get_column<T>(&self, column: &str) -> AccessResult<T>
    where
        T: for<'a> tokio_postgres::types::FromSql<'a>;
}

impl RowExt for Row {
    fn try_get_column<T>(&self, column: &str) -> AccessResult<T>
    where
        T: for<'a> tokio_postgres::types::FromSql<'a>,
    {
        self.try_get(column)
            .map_err(|e| AccessError::unknown(format!("decode column '{column}': {e}")))
    }
}

/// An ordered column-name to [`Value`] map decoded from a row.
///
/// This is the loosely-typed fallback for callers without a schema struct.
/// Columns outside the closed value domain render to their canonical text
/// form (timestamps, uuid, json); any other column type is a decode error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    columns: Vec<(String, Value)>,
}

impl Record {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn as_str(&self, column: &str) -> Option<&str> {
        match self.get(column)? {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self, column: &str) -> Option<i64> {
        match self.get(column)? {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self, column: &str) -> Option<f64> {
        match self.get(column)? {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self, column: &str) -> Option<bool> {
        match self.get(column)? {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text_array(&self, column: &str) -> Option<&[String]> {
        match self.get(column)? {
            Value::TextArray(items) => Some(items),
            _ => None,
        }
    }

    /// Whether the column is present and SQL NULL.
    pub fn is_null(&self, column: &str) -> bool {
        matches!(self.get(column), Some(Value::Null))
    }

    /// Iterate columns in result-set order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns.iter().map(|(c, v)| (c.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromRow for Record {
    fn from_row(row: &Row) -> AccessResult<Self> {
        let mut columns = Vec::with_capacity(row.len());
        for (idx, col) in row.columns().iter().enumerate() {
            let value = decode_column(row, idx, col.name(), col.type_())?;
            columns.push((col.name().to_string(), value));
        }
        Ok(Self { columns })
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, value) in &self.columns {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

fn decode_column(row: &Row, idx: usize, name: &str, ty: &Type) -> AccessResult<Value> {
    fn decode<'a, T>(row: &'a Row, idx: usize, name: &str) -> AccessResult<Option<T>>
    where
        T: tokio_postgres::types::FromSql<'a>,
    {
        row.try_get(idx)
            .map_err(|e| AccessError::unknown(format!("decode column '{name}': {e}")))
    }

    let value = match *ty {
        Type::BOOL => decode::<bool>(row, idx, name)?.map(Value::Bool),
        Type::INT2 => decode::<i16>(row, idx, name)?.map(|v| Value::Int(v as i64)),
        Type::INT4 => decode::<i32>(row, idx, name)?.map(|v| Value::Int(v as i64)),
        Type::INT8 => decode::<i64>(row, idx, name)?.map(Value::Int),
        Type::FLOAT4 => decode::<f32>(row, idx, name)?.map(|v| Value::Float(v as f64)),
        Type::FLOAT8 => decode::<f64>(row, idx, name)?.map(Value::Float),
        Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME => {
            decode::<String>(row, idx, name)?.map(Value::Text)
        }
        Type::TIMESTAMPTZ => decode::<chrono::DateTime<chrono::Utc>>(row, idx, name)?
            .map(|v| Value::Text(v.to_rfc3339())),
        Type::TIMESTAMP => {
            decode::<chrono::NaiveDateTime>(row, idx, name)?.map(|v| Value::Text(v.to_string()))
        }
        Type::DATE => {
            decode::<chrono::NaiveDate>(row, idx, name)?.map(|v| Value::Text(v.to_string()))
        }
        Type::UUID => decode::<uuid::Uuid>(row, idx, name)?.map(|v| Value::Text(v.to_string())),
        Type::JSON | Type::JSONB => {
            decode::<serde_json::Value>(row, idx, name)?.map(|v| Value::Text(v.to_string()))
        }
        Type::TEXT_ARRAY | Type::VARCHAR_ARRAY => {
            decode::<Vec<String>>(row, idx, name)?.map(Value::TextArray)
        }
        _ => {
            return Err(AccessError::unknown(format!(
                "column '{name}' has unsupported type {ty}"
            )));
        }
    };

    Ok(value.unwrap_or(Value::Null))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, Value)]) -> Record {
        Record {
            columns: pairs
                .iter()
                .map(|(c, v)| (c.to_string(), v.clone()))
                .collect(),
        }
    }

    #[test]
    fn typed_accessors() {
        let rec = record(&[
            ("id", Value::Int(7)),
            ("name", Value::Text("alice".to_string())),
            ("score", Value::Float(1.5)),
            ("active", Value::Bool(true)),
            ("tags", Value::TextArray(vec!["a".to_string()])),
            ("deleted_at", Value::Null),
        ]);

        assert_eq!(rec.as_i64("id"), Some(7));
        assert_eq!(rec.as_str("name"), Some("alice"));
        assert_eq!(rec.as_f64("score"), Some(1.5));
        assert_eq!(rec.as_bool("active"), Some(true));
        assert_eq!(rec.as_text_array("tags"), Some(&["a".to_string()][..]));
        assert!(rec.is_null("deleted_at"));
        assert!(!rec.is_null("missing"));
        assert_eq!(rec.as_i64("name"), None);
    }

    #[test]
    fn int_widens_to_f64_but_not_the_reverse() {
        let rec = record(&[("n", Value::Int(4))]);
        assert_eq!(rec.as_f64("n"), Some(4.0));
        let rec = record(&[("f", Value::Float(4.0))]);
        assert_eq!(rec.as_i64("f"), None);
    }

    #[test]
    fn serializes_as_json_object_in_column_order() {
        let rec = record(&[("b", Value::Int(2)), ("a", Value::Null)]);
        let json = serde_json::to_string(&rec).unwrap();
        assert_eq!(json, r#"{"b":2,"a":null}"#);
    }
}
