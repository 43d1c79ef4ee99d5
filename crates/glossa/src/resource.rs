//! Resource tree: namespaces of nested translation mappings.
//!
//! # Invariants
//!
//! 1. **Leaves are strings**: a `ResourceNode` is either a string leaf or a
//!    branch of further nodes. JSON numbers, booleans, arrays and `null`
//!    are rejected when deserializing.
//!
//! 2. **Deterministic order**: branches and namespaces are `BTreeMap`s, so
//!    iteration (and therefore lint output) is stable across runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One node of a namespace's key mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceNode {
    /// A translation string, possibly containing `{{name}}` placeholders.
    Leaf(String),
    /// A nested mapping addressed by further key-path segments.
    Branch(BTreeMap<String, ResourceNode>),
}

impl ResourceNode {
    /// Create an empty branch.
    #[must_use]
    pub fn branch() -> Self {
        Self::Branch(BTreeMap::new())
    }

    /// The leaf string, if this node is a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(s) => Some(s.as_str()),
            Self::Branch(_) => None,
        }
    }

    /// Look up a direct child. Leaves have no children.
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&ResourceNode> {
        match self {
            Self::Branch(children) => children.get(segment),
            Self::Leaf(_) => None,
        }
    }

    /// Visit every leaf with its dotted key path relative to this node.
    pub fn for_each_leaf<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&str, &'a str),
    {
        let mut path = String::new();
        self.walk_leaves(&mut path, &mut visit);
    }

    fn walk_leaves<'a, F>(&'a self, path: &mut String, visit: &mut F)
    where
        F: FnMut(&str, &'a str),
    {
        match self {
            Self::Leaf(s) => visit(path.as_str(), s),
            Self::Branch(children) => {
                for (key, child) in children {
                    let restore = path.len();
                    if !path.is_empty() {
                        path.push('.');
                    }
                    path.push_str(key);
                    child.walk_leaves(path, visit);
                    path.truncate(restore);
                }
            }
        }
    }
}

impl From<&str> for ResourceNode {
    fn from(value: &str) -> Self {
        Self::Leaf(value.to_string())
    }
}

impl From<String> for ResourceNode {
    fn from(value: String) -> Self {
        Self::Leaf(value)
    }
}

impl<K: Into<String>> FromIterator<(K, ResourceNode)> for ResourceNode {
    fn from_iter<I: IntoIterator<Item = (K, ResourceNode)>>(iter: I) -> Self {
        Self::Branch(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// All namespaces of the active language.
///
/// # Example
///
/// ```
/// use glossa::{ResourceNode, ResourceTree};
///
/// let mut tree = ResourceTree::new();
/// tree.insert_namespace("home", [("title", ResourceNode::from("Welcome"))]);
/// assert_eq!(tree.namespace("home").and_then(|ns| ns.get("title")),
///            Some(&ResourceNode::from("Welcome")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceTree {
    namespaces: BTreeMap<String, BTreeMap<String, ResourceNode>>,
}

impl ResourceTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) a namespace.
    pub fn insert_namespace<K, I>(&mut self, namespace: impl Into<String>, entries: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ResourceNode)>,
    {
        let entries = entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.namespaces.insert(namespace.into(), entries);
    }

    /// Builder form of [`insert_namespace`](Self::insert_namespace).
    #[must_use]
    pub fn with_namespace<K, I>(mut self, namespace: impl Into<String>, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ResourceNode)>,
    {
        self.insert_namespace(namespace, entries);
        self
    }

    /// The key mapping of a namespace.
    #[must_use]
    pub fn namespace(&self, namespace: &str) -> Option<&BTreeMap<String, ResourceNode>> {
        self.namespaces.get(namespace)
    }

    /// Whether the namespace exists.
    #[must_use]
    pub fn contains_namespace(&self, namespace: &str) -> bool {
        self.namespaces.contains_key(namespace)
    }

    /// Namespace names in sorted order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Iterate namespaces with their mappings.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, ResourceNode>)> {
        self.namespaces.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Whether the tree has no namespaces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Move every namespace of `other` into `self`, replacing duplicates.
    pub fn merge(&mut self, other: ResourceTree) {
        self.namespaces.extend(other.namespaces);
    }
}
