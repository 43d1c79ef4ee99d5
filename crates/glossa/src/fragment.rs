//! Fragment projection: split a translation into text and rich content.
//!
//! The projector resolves a key in raw mode, splits the leaf on its
//! placeholders and replaces each captured name with caller-supplied
//! content of any type `C` (styled spans, widgets, numbers, ...).
//!
//! # Invariants
//!
//! 1. **Alternation**: the output starts and ends with [`Fragment::Text`]
//!    and alternates text / content, so `n` placeholders give `2n + 1`
//!    fragments. Empty text fragments are kept; use [`compact`] to drop
//!    them.
//!
//! 2. **Order**: fragments appear in the order of the source string.
//!
//! 3. **Strict by default**: [`I18n::resolve_fragments`] applies the same
//!    count and presence checks as [`I18n::t`]. Only
//!    [`FragmentPolicy::Passthrough`] lets an unmatched name through as
//!    text.

use std::collections::BTreeMap;

use crate::error::I18nError;
use crate::key::KeyExpr;
use crate::placeholder::{self, Piece};
use crate::resolver::check_substitutions;
use crate::store::I18n;

/// One element of a projected translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a, C> {
    /// Literal text from the translation (or a passed-through name).
    Text(&'a str),
    /// Substituted content.
    Content(&'a C),
}

impl<C> Fragment<'_, C> {
    /// Whether this is a text fragment with no characters.
    #[must_use]
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }

    /// The text, if this is a text fragment.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(*text),
            Self::Content(_) => None,
        }
    }
}

/// Drop empty text fragments.
#[must_use]
pub fn compact<'a, C>(fragments: Vec<Fragment<'a, C>>) -> Vec<Fragment<'a, C>> {
    fragments
        .into_iter()
        .filter(|fragment| !fragment.is_empty_text())
        .collect()
}

/// How unmatched placeholder names are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FragmentPolicy {
    /// Validate like [`I18n::t`]: arity and names must match exactly.
    #[default]
    Strict,
    /// No validation; a name without content is emitted as text.
    Passthrough,
}

/// Named content for the projector.
///
/// ```
/// use glossa::FragmentArgs;
///
/// let args = FragmentArgs::new().with("count", "<b>5</b>");
/// assert!(args.contains("count"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentArgs<C> {
    content: BTreeMap<String, C>,
}

impl<C> Default for FragmentArgs<C> {
    fn default() -> Self {
        Self {
            content: BTreeMap::new(),
        }
    }
}

impl<C> FragmentArgs<C> {
    /// Create an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add content, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, content: C) -> Self {
        self.insert(name, content);
        self
    }

    /// Add content.
    pub fn insert(&mut self, name: impl Into<String>, content: C) {
        self.content.insert(name.into(), content);
    }

    /// Content for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&C> {
        self.content.get(name)
    }

    /// Whether `name` has content.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.content.contains_key(name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl<K: Into<String>, C> FromIterator<(K, C)> for FragmentArgs<C> {
    fn from_iter<I: IntoIterator<Item = (K, C)>>(iter: I) -> Self {
        Self {
            content: iter.into_iter().map(|(k, c)| (k.into(), c)).collect(),
        }
    }
}

impl I18n {
    /// Project a translation into text and content fragments, strictly.
    ///
    /// # Errors
    ///
    /// Every error of [`I18n::t`]: lookup failures from the raw
    /// resolution, then `SubstitutionCountMismatch` / `MissingSubstitution`
    /// when `args` does not match the placeholders exactly.
    pub fn resolve_fragments<'a, C>(
        &'a self,
        key: &str,
        args: &'a FragmentArgs<C>,
    ) -> Result<Vec<Fragment<'a, C>>, I18nError> {
        self.resolve_fragments_with(key, args, FragmentPolicy::Strict)
    }

    /// Project a translation with an explicit [`FragmentPolicy`].
    ///
    /// # Errors
    ///
    /// Lookup errors always; substitution errors only under
    /// [`FragmentPolicy::Strict`].
    pub fn resolve_fragments_with<'a, C>(
        &'a self,
        key: &str,
        args: &'a FragmentArgs<C>,
        policy: FragmentPolicy,
    ) -> Result<Vec<Fragment<'a, C>>, I18nError> {
        self.project(&KeyExpr::parse(key)?, args, policy)
    }

    /// Project a translation from an explicit namespace, strictly.
    ///
    /// `key_path` is taken verbatim, as in [`I18n::t_ns`].
    ///
    /// # Errors
    ///
    /// As [`I18n::resolve_fragments`].
    pub fn resolve_fragments_ns<'a, C>(
        &'a self,
        namespace: &str,
        key_path: &str,
        args: &'a FragmentArgs<C>,
    ) -> Result<Vec<Fragment<'a, C>>, I18nError> {
        self.resolve_fragments_ns_with(namespace, key_path, args, FragmentPolicy::Strict)
    }

    /// Namespace-override form of [`I18n::resolve_fragments_with`].
    ///
    /// # Errors
    ///
    /// As [`I18n::resolve_fragments_with`].
    pub fn resolve_fragments_ns_with<'a, C>(
        &'a self,
        namespace: &str,
        key_path: &str,
        args: &'a FragmentArgs<C>,
        policy: FragmentPolicy,
    ) -> Result<Vec<Fragment<'a, C>>, I18nError> {
        self.project(&KeyExpr::with_namespace(namespace, key_path)?, args, policy)
    }

    fn project<'a, C>(
        &'a self,
        key: &KeyExpr<'_>,
        args: &'a FragmentArgs<C>,
        policy: FragmentPolicy,
    ) -> Result<Vec<Fragment<'a, C>>, I18nError> {
        let leaf = self.lookup(key)?;

        if policy == FragmentPolicy::Strict {
            let names = placeholder::names(leaf);
            if !names.is_empty() {
                check_substitutions(
                    self.effective_namespace(key),
                    key.path(),
                    &names,
                    args.len(),
                    |name| args.contains(name),
                )?;
            }
        }

        Ok(placeholder::split(leaf)
            .into_iter()
            .map(|piece| match piece {
                Piece::Text(text) => Fragment::Text(text),
                Piece::Name(name) => match args.get(name) {
                    Some(content) => Fragment::Content(content),
                    None => Fragment::Text(name),
                },
            })
            .collect())
    }
}
