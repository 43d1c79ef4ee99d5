//! Key-expression grammar.
//!
//! ```text
//! key_expr  ::= [ prefix ":" ] key_path      ; split at the first ':'
//! prefix    ::= { any char except ':' }      ; empty prefix => default namespace
//! key_path  ::= segment { "." segment }
//! segment   ::= { any char except '.' }
//! ```
//!
//! A namespace reaches the resolver either through the prefix or through
//! an explicit override ([`KeyExpr::with_namespace`]), never both: the
//! override form takes its key path verbatim, so a `:` inside it is an
//! ordinary segment character.

use crate::error::I18nError;

/// A parsed key expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyExpr<'a> {
    namespace: Option<&'a str>,
    path: &'a str,
}

impl<'a> KeyExpr<'a> {
    /// Parse `[namespace:]keyPath`.
    ///
    /// # Errors
    ///
    /// [`I18nError::EmptyKey`] if `expr` is empty.
    pub fn parse(expr: &'a str) -> Result<Self, I18nError> {
        if expr.is_empty() {
            return Err(I18nError::EmptyKey);
        }
        let (namespace, path) = match expr.split_once(':') {
            Some((prefix, path)) => ((!prefix.is_empty()).then_some(prefix), path),
            None => (None, expr),
        };
        Ok(Self { namespace, path })
    }

    /// Address `path` inside `namespace` without prefix parsing.
    ///
    /// # Errors
    ///
    /// [`I18nError::EmptyKey`] if `path` is empty.
    pub fn with_namespace(namespace: &'a str, path: &'a str) -> Result<Self, I18nError> {
        if path.is_empty() {
            return Err(I18nError::EmptyKey);
        }
        Ok(Self {
            namespace: Some(namespace),
            path,
        })
    }

    /// The namespace named by the expression, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&'a str> {
        self.namespace
    }

    /// The namespace to resolve in, given the store's default.
    #[must_use]
    pub fn namespace_or(&self, default: &'a str) -> &'a str {
        self.namespace.unwrap_or(default)
    }

    /// The dotted key path.
    #[must_use]
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// Dot-separated segments. Always yields at least one (possibly empty) segment.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.path.split('.')
    }
}
