//! The resource store: active language, default namespace, resource tree.
//!
//! # Invariants
//!
//! 1. **Single writer**: state changes only through [`I18n::init`], which
//!    takes `&mut self`; every lookup takes `&self`. Concurrent readers
//!    after initialization are therefore safe, and re-initialization while
//!    readers hold the store does not compile.
//!
//! 2. **No shape validation**: `init` accepts any tree. Problems surface as
//!    typed errors at lookup time.

use crate::resource::ResourceTree;

/// Owned i18n context passed to every lookup.
///
/// # Example
///
/// ```
/// use glossa::{I18n, ResourceNode, ResourceTree, Substitutions};
///
/// let resources = ResourceTree::new().with_namespace(
///     "home",
///     [
///         ("title", ResourceNode::from("Welcome")),
///         ("status", ResourceNode::from("We are currently {{currentStatus}}")),
///     ],
/// );
/// let i18n = I18n::new("en", "home", resources);
///
/// assert_eq!(i18n.t("title", None).unwrap(), "Welcome");
/// let subs = Substitutions::new().with("currentStatus", "open");
/// assert_eq!(
///     i18n.t("home:status", Some(&subs)).unwrap(),
///     "We are currently open"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct I18n {
    pub(crate) lang: String,
    pub(crate) default_namespace: String,
    pub(crate) resources: ResourceTree,
}

impl I18n {
    /// Create an initialized store.
    #[must_use]
    pub fn new(
        lang: impl Into<String>,
        default_namespace: impl Into<String>,
        resources: ResourceTree,
    ) -> Self {
        let mut store = Self::default();
        store.init(lang, default_namespace, resources);
        store
    }

    /// Replace language, default namespace and resources together.
    pub fn init(
        &mut self,
        lang: impl Into<String>,
        default_namespace: impl Into<String>,
        resources: ResourceTree,
    ) {
        self.lang = lang.into();
        self.default_namespace = default_namespace.into();
        self.resources = resources;
        tracing::debug!(
            lang = %self.lang,
            default_namespace = %self.default_namespace,
            namespaces = self.resources.len(),
            "i18n store initialized"
        );
    }

    /// Active language tag. Empty before initialization.
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Namespace used when a key carries no prefix.
    #[must_use]
    pub fn default_namespace(&self) -> &str {
        &self.default_namespace
    }

    /// The loaded resource tree.
    #[must_use]
    pub fn resources(&self) -> &ResourceTree {
        &self.resources
    }
}
