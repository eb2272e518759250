//! Safe SQL identifier handling.
//!
//! [`Ident`] carries a caller-supplied table or column name and renders it as
//! a quoted postgres identifier (`"` doubled inside the quotes). Names are
//! opaque at this layer: nothing is validated against a schema, and the only
//! character quoting cannot carry (NUL) is rejected by the server at
//! execution time rather than here.
//!
//! Dynamic identifiers must reach statement text only through this type;
//! values never do (they travel as `$n` parameters).

/// A SQL identifier (table or column name), rendered quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident(String);

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The raw name as the caller supplied it.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Render the identifier as SQL.
    pub fn to_sql(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + 2);
        self.write_sql(&mut out);
        out
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        out.push('"');
        for ch in self.0.chars() {
            if ch == '"' {
                out.push('"');
                out.push('"');
            } else {
                out.push(ch);
            }
        }
        out.push('"');
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Ident {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_simple() {
        assert_eq!(Ident::new("users").to_sql(), r#""users""#);
    }

    #[test]
    fn ident_preserves_case() {
        assert_eq!(Ident::new("UserTable").to_sql(), r#""UserTable""#);
    }

    #[test]
    fn ident_escapes_embedded_quote() {
        assert_eq!(Ident::new(r#"has"quote"#).to_sql(), r#""has""quote""#);
    }

    #[test]
    fn ident_keeps_injection_text_inert() {
        // Everything stays inside the quotes, including the would-be
        // statement terminator.
        let ident = Ident::new(r#"users"; DROP TABLE users; --"#);
        assert_eq!(ident.to_sql(), r#""users""; DROP TABLE users; --""#);
    }

    #[test]
    fn ident_empty_renders_empty_quotes() {
        // An empty name is not special-cased; `""` is rejected by the server
        // at execution time.
        assert_eq!(Ident::new("").to_sql(), r#""""#);
    }
}
