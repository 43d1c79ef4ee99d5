//! Key resolution and placeholder interpolation.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Error |
//! |---------|-------|-------|
//! | Empty key | `""` passed as key expression | `EmptyKey` |
//! | Unknown namespace | prefix / override / default not in tree | `NamespaceNotFound` |
//! | Unknown key | missing segment, or path ends at a branch | `StringNotFound` |
//! | Wrong arity | distinct placeholders ≠ substitution entries | `SubstitutionCountMismatch` |
//! | Wrong name | placeholder without a substitution entry | `MissingSubstitution` |
//!
//! A leaf without placeholders resolves unchanged whatever substitutions
//! are passed.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::error::I18nError;
use crate::key::KeyExpr;
use crate::placeholder;
use crate::store::I18n;

/// Placeholder values for [`I18n::t`].
///
/// Values are stored as strings; anything `Display` (numbers included) is
/// converted on insertion without locale formatting.
///
/// ```
/// use glossa::Substitutions;
///
/// let subs = Substitutions::new().with("name", "Bob").with("count", 5);
/// assert_eq!(subs.get("count"), Some("5"));
/// assert_eq!(subs.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    values: BTreeMap<String, String>,
}

impl Substitutions {
    /// Create an empty substitution map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, builder style. A repeated name keeps the last value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Add a value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        self.values.insert(name.into(), value.to_string());
    }

    /// Value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether `name` has a value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Substitutions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut subs = Self::new();
        for (name, value) in iter {
            subs.insert(name, value);
        }
        subs
    }
}

impl<K: Into<String>, V: Display, const N: usize> From<[(K, V); N]> for Substitutions {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// Count and presence check shared by the resolver and the strict
/// fragment policy.
pub(crate) fn check_substitutions<F>(
    namespace: &str,
    key: &str,
    names: &[&str],
    passed: usize,
    contains: F,
) -> Result<(), I18nError>
where
    F: Fn(&str) -> bool,
{
    if names.len() != passed {
        return Err(I18nError::SubstitutionCountMismatch {
            namespace: namespace.to_string(),
            key: key.to_string(),
            expected: names.len(),
            passed,
        });
    }
    match names.iter().find(|&&name| !contains(name)) {
        Some(name) => Err(missing(namespace, key, name)),
        None => Ok(()),
    }
}

fn missing(namespace: &str, key: &str, name: &str) -> I18nError {
    I18nError::MissingSubstitution {
        namespace: namespace.to_string(),
        key: key.to_string(),
        name: name.to_string(),
    }
}

impl I18n {
    /// Resolve `[namespace:]keyPath` and interpolate its placeholders.
    ///
    /// # Errors
    ///
    /// See the module-level failure table.
    pub fn t(&self, key: &str, subs: Option<&Substitutions>) -> Result<String, I18nError> {
        self.interpolate(&KeyExpr::parse(key)?, subs)
    }

    /// Resolve `key_path` in an explicit namespace.
    ///
    /// No prefix parsing happens here: `key_path` is used verbatim.
    ///
    /// # Errors
    ///
    /// As [`t`](Self::t).
    pub fn t_ns(
        &self,
        namespace: &str,
        key_path: &str,
        subs: Option<&Substitutions>,
    ) -> Result<String, I18nError> {
        self.interpolate(&KeyExpr::with_namespace(namespace, key_path)?, subs)
    }

    /// The un-interpolated leaf for a key expression.
    ///
    /// # Errors
    ///
    /// `EmptyKey`, `NamespaceNotFound` or `StringNotFound`; placeholders are
    /// not validated.
    pub fn raw(&self, key: &str) -> Result<&str, I18nError> {
        self.lookup(&KeyExpr::parse(key)?)
    }

    /// Raw lookup in an explicit namespace.
    ///
    /// # Errors
    ///
    /// As [`raw`](Self::raw).
    pub fn raw_ns(&self, namespace: &str, key_path: &str) -> Result<&str, I18nError> {
        self.lookup(&KeyExpr::with_namespace(namespace, key_path)?)
    }

    pub(crate) fn effective_namespace<'a>(&'a self, key: &KeyExpr<'a>) -> &'a str {
        key.namespace_or(&self.default_namespace)
    }

    /// Walk the key path to a string leaf.
    pub(crate) fn lookup(&self, key: &KeyExpr<'_>) -> Result<&str, I18nError> {
        let namespace = self.effective_namespace(key);
        let entries =
            self.resources
                .namespace(namespace)
                .ok_or_else(|| I18nError::NamespaceNotFound {
                    namespace: namespace.to_string(),
                })?;

        let not_found = || I18nError::StringNotFound {
            namespace: namespace.to_string(),
            key: key.path().to_string(),
        };

        let mut segments = key.segments();
        let mut node = segments
            .next()
            .and_then(|first| entries.get(first))
            .ok_or_else(not_found)?;
        for segment in segments {
            node = node.child(segment).ok_or_else(not_found)?;
        }
        node.as_leaf().ok_or_else(not_found)
    }

    fn interpolate(
        &self,
        key: &KeyExpr<'_>,
        subs: Option<&Substitutions>,
    ) -> Result<String, I18nError> {
        let leaf = self.lookup(key)?;
        let names = placeholder::names(leaf);
        if names.is_empty() {
            return Ok(leaf.to_string());
        }

        let namespace = self.effective_namespace(key);
        let passed = subs.map_or(0, Substitutions::len);
        check_substitutions(namespace, key.path(), &names, passed, |name| {
            subs.is_some_and(|s| s.contains(name))
        })?;

        placeholder::interpolate(leaf, |name| subs.and_then(|s| s.get(name)))
            .map_err(|name| missing(namespace, key.path(), name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{ResourceNode, ResourceTree};

    fn store() -> I18n {
        let resources = ResourceTree::new()
            .with_namespace(
                "namespace",
                [
                    ("someKey", ResourceNode::from("This is some value")),
                    (
                        "single",
                        ResourceNode::from("This is a value with variable {{variable1}}."),
                    ),
                    (
                        "multiple",
                        ResourceNode::from(
                            "This is a value with variables {{variable1}}, {{variable2}} and {{variable3}}.",
                        ),
                    ),
                    ("repeated", ResourceNode::from("{{x}}, {{x}} and {{x}}")),
                    ("variable1", ResourceNode::from("4")),
                    (
                        "menu",
                        [(
                            "file",
                            [("open", ResourceNode::from("Open {{name}}"))]
                                .into_iter()
                                .collect::<ResourceNode>(),
                        )]
                        .into_iter()
                        .collect::<ResourceNode>(),
                    ),
                ],
            )
            .with_namespace(
                "anotherNamespace",
                [("someKey", ResourceNode::from("This is some key"))],
            );
        I18n::new("en", "namespace", resources)
    }

    #[test]
    fn resolves_from_default_namespace() {
        assert_eq!(store().t("someKey", None).unwrap(), "This is some value");
    }

    #[test]
    fn resolves_from_prefixed_namespace() {
        assert_eq!(
            store().t("anotherNamespace:someKey", None).unwrap(),
            "This is some key"
        );
        assert_eq!(
            store().t_ns("anotherNamespace", "someKey", None).unwrap(),
            "This is some key"
        );
    }

    #[test]
    fn interpolates_multiple_variables() {
        let subs = Substitutions::from([("variable1", "1"), ("variable2", "2"), ("variable3", "3")]);
        assert_eq!(
            store().t("multiple", Some(&subs)).unwrap(),
            "This is a value with variables 1, 2 and 3."
        );
    }

    #[test]
    fn nested_lookup_result_feeds_substitution() {
        let i18n = store();
        let subs = Substitutions::new().with("variable1", i18n.t("variable1", None).unwrap());
        assert_eq!(
            i18n.t("single", Some(&subs)).unwrap(),
            "This is a value with variable 4."
        );
    }

    #[test]
    fn numbers_are_coerced_to_decimal() {
        let subs = Substitutions::new().with("variable1", 42).with("ignored", 0);
        let subs_one = Substitutions::new().with("variable1", 2.5);
        assert_eq!(
            store().t("single", Some(&subs_one)).unwrap(),
            "This is a value with variable 2.5."
        );
        // Two entries for one placeholder is an arity error.
        assert!(matches!(
            store().t("single", Some(&subs)),
            Err(I18nError::SubstitutionCountMismatch {
                expected: 1,
                passed: 2,
                ..
            })
        ));
    }

    #[test]
    fn repeated_placeholder_counts_once() {
        let subs = Substitutions::new().with("x", "a");
        assert_eq!(store().t("repeated", Some(&subs)).unwrap(), "a, a and a");
    }

    #[test]
    fn dotted_path_descends_branches() {
        let subs = Substitutions::new().with("name", "file.txt");
        assert_eq!(
            store().t("menu.file.open", Some(&subs)).unwrap(),
            "Open file.txt"
        );
    }

    #[test]
    fn path_ending_at_branch_is_not_a_string() {
        let err = store().t("menu.file", None).unwrap_err();
        assert_eq!(err.to_string(), "No string found! namespace.menu.file");
    }

    #[test]
    fn path_through_leaf_is_not_a_string() {
        let err = store().t("someKey.deeper", None).unwrap_err();
        assert_eq!(
            err,
            I18nError::StringNotFound {
                namespace: "namespace".into(),
                key: "someKey.deeper".into(),
            }
        );
    }

    #[test]
    fn unknown_namespace_is_reported() {
        let err = store().t("blog:title", None).unwrap_err();
        assert_eq!(err.to_string(), "Namespace not found: blog");
        let err = store().t_ns("blog", "title", None).unwrap_err();
        assert_eq!(err.to_string(), "Namespace not found: blog");
    }

    #[test]
    fn empty_key_is_rejected() {
        assert_eq!(store().t("", None), Err(I18nError::EmptyKey));
        assert_eq!(store().raw(""), Err(I18nError::EmptyKey));
    }

    #[test]
    fn missing_substitutions_report_counts() {
        let err = store().t("multiple", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Mismatch between string variables(3) and passed substitutions(0) for namespace.multiple"
        );
    }

    #[test]
    fn misnamed_substitution_names_the_placeholder() {
        let subs = Substitutions::from([
            ("variable1WithWrongName", "4"),
            ("variable2", "5"),
            ("variable3", "6"),
        ]);
        let err = store().t("multiple", Some(&subs)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing substitution variable {{variable1}} in namespace.multiple"
        );
    }

    #[test]
    fn unused_substitutions_on_plain_leaf_are_ignored() {
        let subs = Substitutions::new().with("x", "y");
        assert_eq!(
            store().t("someKey", Some(&subs)).unwrap(),
            "This is some value"
        );
    }

    #[test]
    fn raw_skips_validation() {
        assert_eq!(
            store().raw("multiple").unwrap(),
            "This is a value with variables {{variable1}}, {{variable2}} and {{variable3}}."
        );
        assert_eq!(store().raw_ns("namespace", "menu.file.open").unwrap(), "Open {{name}}");
    }

    #[test]
    fn check_substitutions_orders_count_before_presence() {
        let err = check_substitutions("ns", "k", &["a", "b"], 1, |_| false).unwrap_err();
        assert!(matches!(err, I18nError::SubstitutionCountMismatch { .. }));
        let err = check_substitutions("ns", "k", &["a", "b"], 2, |n| n == "a").unwrap_err();
        assert_eq!(
            err,
            I18nError::MissingSubstitution {
                namespace: "ns".into(),
                key: "k".into(),
                name: "b".into(),
            }
        );
        assert!(check_substitutions("ns", "k", &["a"], 1, |_| true).is_ok());
    }
}
