//! Error types for pgtable.
//!
//! Two categories flow out of every operation: *absence* (a point-identified
//! operation matched zero rows) and *execution faults* (anything the store
//! raised). Faults are classified by SQLSTATE so callers branch on category
//! instead of parsing message text.

use thiserror::Error;

/// Result type alias for pgtable operations.
pub type AccessResult<T> = Result<T, AccessError>;

/// Error categories for table access operations.
#[derive(Debug, Error)]
pub enum AccessError {
    /// A point-identified operation matched zero rows.
    #[error("{0}")]
    NotFound(String),

    /// Unique, foreign key, check, or not-null violation (SQLSTATE class 23).
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Pool checkout, connect-string, or connectivity failure.
    #[error("Connection failure: {0}")]
    ConnectionFailure(String),

    /// Syntax error, undefined table/column, or statement-level type
    /// mismatch (SQLSTATE class 42).
    #[error("Malformed statement: {0}")]
    MalformedStatement(String),

    /// Anything the other categories do not cover.
    #[error("{0}")]
    Unknown(String),
}

impl AccessError {
    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a connection failure error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::ConnectionFailure(message.into())
    }

    /// Create an unknown error.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown(message.into())
    }

    /// Check if this is a not found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is a constraint violation.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }

    /// Check if this is a malformed statement error.
    pub fn is_malformed_statement(&self) -> bool {
        matches!(self, Self::MalformedStatement(_))
    }

    /// Classify a driver error into an access error.
    pub fn from_db_error(err: tokio_postgres::Error) -> Self {
        if let Some(db_err) = err.as_db_error() {
            let detail = match db_err.constraint() {
                Some(constraint) => format!("{}: {}", constraint, db_err.message()),
                None => db_err.message().to_string(),
            };
            return Self::from_sqlstate(db_err.code().code(), detail);
        }
        if err.is_closed() {
            return Self::ConnectionFailure(err.to_string());
        }
        Self::Unknown(err.to_string())
    }

    /// Classify by SQLSTATE class.
    pub(crate) fn from_sqlstate(code: &str, detail: String) -> Self {
        match code.get(..2) {
            Some("23") => Self::ConstraintViolation(detail),
            Some("42") => Self::MalformedStatement(detail),
            // 08 = connection exception, 53 = insufficient resources,
            // 57 = operator intervention (admin shutdown, crash shutdown).
            Some("08") | Some("53") | Some("57") => Self::ConnectionFailure(detail),
            _ => Self::Unknown(format!("{code}: {detail}")),
        }
    }

    /// Fold the table name into the fault detail.
    ///
    /// Absence is untouched; its literal is the contract.
    pub(crate) fn in_table(self, table: &str) -> Self {
        match self {
            Self::NotFound(m) => Self::NotFound(m),
            Self::ConstraintViolation(m) => {
                Self::ConstraintViolation(format!("table({table}): {m}"))
            }
            Self::ConnectionFailure(m) => Self::ConnectionFailure(format!("table({table}): {m}")),
            Self::MalformedStatement(m) => {
                Self::MalformedStatement(format!("table({table}): {m}"))
            }
            Self::Unknown(m) => Self::Unknown(format!("table({table}): {m}")),
        }
    }
}

impl From<deadpool_postgres::PoolError> for AccessError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::ConnectionFailure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlstate_class_23_is_constraint() {
        let err = AccessError::from_sqlstate("23505", "users_pkey: duplicate".to_string());
        assert!(err.is_constraint_violation());
    }

    #[test]
    fn sqlstate_class_42_is_malformed() {
        let err = AccessError::from_sqlstate("42601", "syntax error".to_string());
        assert!(err.is_malformed_statement());
        let err = AccessError::from_sqlstate("42P01", "relation does not exist".to_string());
        assert!(err.is_malformed_statement());
    }

    #[test]
    fn sqlstate_connection_classes() {
        for code in ["08006", "53300", "57P01"] {
            let err = AccessError::from_sqlstate(code, "gone".to_string());
            assert!(matches!(err, AccessError::ConnectionFailure(_)), "{code}");
        }
    }

    #[test]
    fn sqlstate_other_is_unknown_with_code() {
        let err = AccessError::from_sqlstate("22P02", "bad input".to_string());
        match err {
            AccessError::Unknown(m) => assert!(m.contains("22P02")),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn in_table_prefixes_fault_detail() {
        let err = AccessError::ConstraintViolation("dup".to_string()).in_table("users");
        assert_eq!(err.to_string(), "Constraint violation: table(users): dup");
    }

    #[test]
    fn in_table_leaves_absence_untouched() {
        let err = AccessError::not_found("No data").in_table("users");
        assert_eq!(err.to_string(), "No data");
    }
}
