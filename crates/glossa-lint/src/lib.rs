#![forbid(unsafe_code)]

//! Length checks for glossa locale files.
//!
//! Rules bind a maximum word or paragraph length to a key path. Findings
//! carry a level; any `error` finding fails the run.

pub mod cli;
pub mod lint;
pub mod rules;

use std::fmt;
use std::io;
use std::path::PathBuf;

use glossa::LoadError;

pub use lint::{Finding, LintReport, Violation, lint_dir, lint_file, lint_tree};
pub use rules::{Level, LintRule, RuleKind, load_rules, parse_rules};

/// Errors that stop a lint run before findings are produced.
#[derive(Debug)]
pub enum LintError {
    /// A directory or rules file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// A locale file could not be loaded.
    Load(LoadError),
    /// A rules document was malformed.
    Rules {
        origin: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for LintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Load(err) => write!(f, "{err}"),
            Self::Rules { origin, source } => write!(f, "invalid rules in {origin}: {source}"),
        }
    }
}

impl std::error::Error for LintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Load(err) => Some(err),
            Self::Rules { source, .. } => Some(source),
        }
    }
}

impl From<LoadError> for LintError {
    fn from(err: LoadError) -> Self {
        Self::Load(err)
    }
}
