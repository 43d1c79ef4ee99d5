//! Length rules for translation strings.
//!
//! Rules files use this JSON shape:
//!
//! ```json
//! [
//!   { "key": "title", "type": "word", "maxCharacters": 12, "level": "error" },
//!   { "key": "intro", "type": "paragraph", "maxCharacters": 280, "level": "warning" }
//! ]
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::LintError;

/// What a rule measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Every space-separated word must fit.
    Word,
    /// The whole string must fit.
    Paragraph,
}

/// Severity of a rule's findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Fails the lint run.
    Error,
    /// Reported, does not fail the run.
    #[default]
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("Error"),
            Self::Warning => f.write_str("Warning"),
        }
    }
}

/// A length limit bound to one key path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintRule {
    /// Dotted key path inside a namespace, e.g. `hero.title`.
    pub key: String,
    #[serde(rename = "type")]
    pub kind: RuleKind,
    /// Maximum length in characters.
    pub max_characters: usize,
    #[serde(default)]
    pub level: Level,
}

impl LintRule {
    #[must_use]
    pub fn word(key: impl Into<String>, max_characters: usize, level: Level) -> Self {
        Self {
            key: key.into(),
            kind: RuleKind::Word,
            max_characters,
            level,
        }
    }

    #[must_use]
    pub fn paragraph(key: impl Into<String>, max_characters: usize, level: Level) -> Self {
        Self {
            key: key.into(),
            kind: RuleKind::Paragraph,
            max_characters,
            level,
        }
    }
}

/// Parse a rules document.
///
/// # Errors
///
/// [`LintError::Rules`] if the text is not a list of rules.
pub fn parse_rules(json: &str) -> Result<Vec<LintRule>, LintError> {
    serde_json::from_str(json).map_err(|source| LintError::Rules {
        origin: "<string>".to_string(),
        source,
    })
}

/// Read a rules file.
///
/// # Errors
///
/// [`LintError::Io`] on read failure, [`LintError::Rules`] on bad content.
pub fn load_rules(path: impl AsRef<Path>) -> Result<Vec<LintRule>, LintError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rules: Vec<LintRule> = serde_json::from_str(&text).map_err(|source| LintError::Rules {
        origin: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), rules = rules.len(), "loaded lint rules");
    Ok(rules)
}
