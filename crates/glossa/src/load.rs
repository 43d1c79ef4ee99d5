//! Building resource trees from JSON and static-site node data.
//!
//! A locale file holds one language:
//!
//! ```json
//! { "home": { "title": "Welcome", "nav": { "about": "About us" } } }
//! ```
//!
//! Node data is the payload a static-site data layer hands to a page. It
//! carries three node lists, applied in this order so later sources
//! replace earlier namespaces:
//!
//! | Field | Node shape | Filter |
//! |-------|------------|--------|
//! | `i18nStatic` | `lang`, `namespace`, `allTranslations` (JSON text) | `lang` must match |
//! | `i18nPage` | same as static | none |
//! | `i18nAdditions` | `namespace`, `singleTranslations` (object) | none |

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::resource::{ResourceNode, ResourceTree};
use crate::store::I18n;

impl ResourceTree {
    /// Parse a locale document.
    ///
    /// # Errors
    ///
    /// [`LoadError::Parse`] when the text is not a namespace → mapping
    /// object with string leaves.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|source| LoadError::Parse {
            origin: "<string>".to_string(),
            source,
        })
    }

    /// Parse a locale document from a reader.
    ///
    /// # Errors
    ///
    /// [`LoadError::Parse`] on malformed input or read failure.
    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        serde_json::from_reader(reader).map_err(|source| LoadError::Parse {
            origin: "<reader>".to_string(),
            source,
        })
    }

    /// Read and parse a locale file.
    ///
    /// # Errors
    ///
    /// [`LoadError::Io`] if the file cannot be read, [`LoadError::Parse`]
    /// if its content is not a resource tree.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tree: Self = serde_json::from_str(&text).map_err(|source| LoadError::Parse {
            origin: path.display().to_string(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            namespaces = tree.len(),
            "loaded locale file"
        );
        Ok(tree)
    }
}

/// Read `<dir>/<lang>.json`.
///
/// # Errors
///
/// As [`ResourceTree::from_path`].
pub fn load_locale(dir: impl AsRef<Path>, lang: &str) -> Result<ResourceTree, LoadError> {
    ResourceTree::from_path(dir.as_ref().join(format!("{lang}.json")))
}

/// Static-site payload with translation nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// Shared translations for every language.
    #[serde(default)]
    pub i18n_static: Option<NodeList<TranslationNode>>,
    /// Page-specific translations, already filtered by the data layer.
    #[serde(default)]
    pub i18n_page: Option<NodeList<TranslationNode>>,
    /// Inline additions, already structured.
    #[serde(default)]
    pub i18n_additions: Option<NodeList<AdditionNode>>,
}

/// A `{ "nodes": [...] }` wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeList<N> {
    pub nodes: Vec<N>,
}

/// A namespace whose translations arrive as serialized JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationNode {
    #[serde(default)]
    pub lang: String,
    pub namespace: String,
    pub all_translations: String,
}

/// A namespace whose translations arrive as a structured object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionNode {
    pub namespace: String,
    pub single_translations: BTreeMap<String, ResourceNode>,
}

impl NodeData {
    /// Parse node data from JSON text.
    ///
    /// # Errors
    ///
    /// [`LoadError::Parse`] on malformed input.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|source| LoadError::Parse {
            origin: "<node data>".to_string(),
            source,
        })
    }

    /// Assemble the resource tree for `lang`.
    ///
    /// # Errors
    ///
    /// [`LoadError::NodeTranslations`] when an `allTranslations` payload of
    /// a used node is not a valid mapping.
    pub fn to_resources(&self, lang: &str) -> Result<ResourceTree, LoadError> {
        let mut tree = ResourceTree::new();

        let statics = self
            .i18n_static
            .iter()
            .flat_map(|list| &list.nodes)
            .filter(|node| node.lang == lang);
        let pages = self.i18n_page.iter().flat_map(|list| &list.nodes);
        for node in statics.chain(pages) {
            let entries: BTreeMap<String, ResourceNode> =
                serde_json::from_str(&node.all_translations).map_err(|source| {
                    LoadError::NodeTranslations {
                        namespace: node.namespace.clone(),
                        source,
                    }
                })?;
            tracing::debug!(namespace = %node.namespace, keys = entries.len(), "namespace from node data");
            tree.insert_namespace(node.namespace.clone(), entries);
        }

        for node in self.i18n_additions.iter().flat_map(|list| &list.nodes) {
            tracing::debug!(namespace = %node.namespace, "namespace from additions");
            tree.insert_namespace(node.namespace.clone(), node.single_translations.clone());
        }

        Ok(tree)
    }
}

impl I18n {
    /// Initialize from static-site node data.
    ///
    /// # Errors
    ///
    /// As [`NodeData::to_resources`].
    pub fn from_node_data(
        lang: impl Into<String>,
        default_namespace: impl Into<String>,
        data: &NodeData,
    ) -> Result<Self, LoadError> {
        let lang = lang.into();
        let resources = data.to_resources(&lang)?;
        Ok(Self::new(lang, default_namespace, resources))
    }
}
