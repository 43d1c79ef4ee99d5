//! Error types for resolution and loading.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while resolving a key expression.
///
/// Every variant that refers to a string carries the effective namespace
/// and key path so the message can name `namespace.keyPath`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// The key expression had zero length.
    EmptyKey,
    /// The effective namespace is absent from the resource tree.
    NamespaceNotFound { namespace: String },
    /// The key path does not end at a string leaf.
    StringNotFound { namespace: String, key: String },
    /// Distinct placeholder count differs from the number of substitutions.
    SubstitutionCountMismatch {
        namespace: String,
        key: String,
        expected: usize,
        passed: usize,
    },
    /// A placeholder has no entry in the substitution map.
    MissingSubstitution {
        namespace: String,
        key: String,
        name: String,
    },
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey => f.write_str("Key string is empty."),
            Self::NamespaceNotFound { namespace } => {
                write!(f, "Namespace not found: {namespace}")
            }
            Self::StringNotFound { namespace, key } => {
                write!(f, "No string found! {namespace}.{key}")
            }
            Self::SubstitutionCountMismatch {
                namespace,
                key,
                expected,
                passed,
            } => write!(
                f,
                "Mismatch between string variables({expected}) and passed substitutions({passed}) for {namespace}.{key}"
            ),
            Self::MissingSubstitution {
                namespace,
                key,
                name,
            } => write!(
                f,
                "Missing substitution variable {{{{{name}}}}} in {namespace}.{key}"
            ),
        }
    }
}

impl std::error::Error for I18nError {}

/// Errors from reading translation resources.
#[derive(Debug)]
pub enum LoadError {
    /// A locale file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// Input was not a valid resource tree.
    Parse {
        origin: String,
        source: serde_json::Error,
    },
    /// A node-data entry carried an unparseable `allTranslations` payload.
    NodeTranslations {
        namespace: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Parse { origin, source } => {
                write!(f, "invalid resource tree in {origin}: {source}")
            }
            Self::NodeTranslations { namespace, source } => {
                write!(f, "invalid translations for namespace '{namespace}': {source}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } | Self::NodeTranslations { source, .. } => Some(source),
        }
    }
}
