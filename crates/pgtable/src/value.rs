//! The loosely-typed value domain and input bags for writes.

use bytes::BytesMut;
use serde::Serialize;
use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};

use crate::error::AccessError;

/// A loosely-typed SQL parameter value.
///
/// The domain is closed: strings, 64-bit integers, doubles, booleans, SQL
/// NULL, and text arrays. Values are always bound through the driver's
/// parameter path and never concatenated into statement text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    TextArray(Vec<String>),
}

impl std::fmt::Display for Value {
    /// Literal-like rendering for log and error context. This is never used
    /// to build statement text.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Null => write!(f, "NULL"),
            Value::TextArray(items) => write!(f, "{{{}}}", items.join(",")),
        }
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        match self {
            Value::Text(v) => v.to_sql(ty, out),
            Value::Int(v) => match *ty {
                Type::INT2 => (*v as i16).to_sql(ty, out),
                Type::INT4 => (*v as i32).to_sql(ty, out),
                _ => v.to_sql(ty, out),
            },
            Value::Float(v) => match *ty {
                Type::FLOAT4 => (*v as f32).to_sql(ty, out),
                _ => v.to_sql(ty, out),
            },
            Value::Bool(v) => v.to_sql(ty, out),
            Value::Null => Ok(IsNull::Yes),
            Value::TextArray(v) => v.to_sql(ty, out),
        }
    }

    fn accepts(_ty: &Type) -> bool {
        // The server has the schema; a type mismatch surfaces as an
        // execution fault, not a bind-time rejection.
        true
    }

    to_sql_checked!();
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::TextArray(v)
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::TextArray(v.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = AccessError;

    /// Convert a JSON scalar or string array into a bindable value.
    ///
    /// Objects and mixed arrays are outside the value domain and are
    /// rejected rather than coerced.
    fn try_from(v: serde_json::Value) -> Result<Self, AccessError> {
        use serde_json::Value as Json;
        Ok(match v {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    return Err(AccessError::unknown(format!(
                        "number {n} is not representable as i64 or f64"
                    )));
                }
            }
            Json::String(s) => Value::Text(s),
            Json::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Json::String(s) => out.push(s),
                        other => {
                            return Err(AccessError::unknown(format!(
                                "array elements must be strings, got {other}"
                            )));
                        }
                    }
                }
                Value::TextArray(out)
            }
            Json::Object(_) => {
                return Err(AccessError::unknown(
                    "objects are not bindable values".to_string(),
                ));
            }
        })
    }
}

/// An ordered list of `(column, value)` pairs for INSERT and UPDATE.
///
/// Order is explicit and preserved: column `i` always pairs with value `i`
/// in the emitted statement, so the column/value pairing never depends on
/// map iteration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputData {
    fields: Vec<(String, Value)>,
}

impl InputData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column value (builder form).
    pub fn set(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.fields.push((column.to_string(), value.into()));
        self
    }

    /// Append a column value in place.
    pub fn push(&mut self, column: &str, value: impl Into<Value>) {
        self.fields.push((column.to_string(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(c, v)| (c.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for InputData {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<serde_json::Map<String, serde_json::Value>> for InputData {
    type Error = AccessError;

    /// Convert a JSON object into an input bag, in the map's entry order.
    fn try_from(map: serde_json::Map<String, serde_json::Value>) -> Result<Self, AccessError> {
        let mut data = InputData::new();
        for (column, value) in map {
            data.push(&column, Value::try_from(value)?);
        }
        Ok(data)
    }
}
