//! Ordered parameter storage for assembled statements.

use crate::value::Value;
use tokio_postgres::types::ToSql;

/// Parameters collected while assembling a statement, in placeholder order.
///
/// `push` returns the 1-based index the statement text should reference, so
/// placeholder numbering and bind order cannot drift apart.
#[derive(Debug, Clone, Default)]
pub struct ParamList {
    params: Vec<Value>,
}

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter and return its 1-based placeholder index.
    pub fn push(&mut self, value: Value) -> usize {
        self.params.push(value);
        self.params.len()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The collected values, in bind order.
    pub fn values(&self) -> &[Value] {
        &self.params
    }

    /// Borrow all parameters for tokio-postgres.
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_returns_one_based_index() {
        let mut params = ParamList::new();
        assert_eq!(params.push(Value::Int(1)), 1);
        assert_eq!(params.push(Value::Text("x".to_string())), 2);
        assert_eq!(params.len(), 2);
        assert_eq!(params.as_refs().len(), 2);
    }
}
