//! Rule evaluation over locale trees, files and directories.
//!
//! Lengths are counted in `char`s. A directory scan reads `<dir>/*.json`
//! (not recursive) in file-name order; the file stem is the language.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use glossa::ResourceTree;

use crate::LintError;
use crate::rules::{Level, LintRule, RuleKind};

/// What exceeded its limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A single word is too long.
    LongWord {
        word: String,
        length: usize,
        max: usize,
    },
    /// The whole string is too long.
    LongParagraph { length: usize, max: usize },
}

/// One rule violation at `lang.namespace.key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub level: Level,
    pub lang: String,
    pub namespace: String,
    pub key: String,
    pub violation: Violation,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}.{}.{}", self.lang, self.namespace, self.key)?;
        match &self.violation {
            Violation::LongWord { word, length, max } => {
                writeln!(f, "String contains a word with too many characters!")?;
                writeln!(
                    f,
                    "Character count of {length} for \"{word}\" is more than the maximum character count of {max}"
                )
            }
            Violation::LongParagraph { length, max } => {
                writeln!(
                    f,
                    "Paragraph length of {length} is greater than set maximum of {max}"
                )
            }
        }
    }
}

/// Findings of a lint run, errors first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    findings: Vec<Finding>,
}

impl LintReport {
    /// Build a report; errors move ahead of warnings, order is otherwise kept.
    #[must_use]
    pub fn new(mut findings: Vec<Finding>) -> Self {
        findings.sort_by_key(|finding| finding.level);
        Self { findings }
    }

    /// All findings, errors first.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Number of error findings.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|finding| finding.level == Level::Error)
            .count()
    }

    /// Number of warning findings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.findings.len() - self.error_count()
    }

    /// A report with the error findings only.
    #[must_use]
    pub fn errors_only(&self) -> Self {
        Self {
            findings: self
                .findings
                .iter()
                .filter(|finding| finding.level == Level::Error)
                .cloned()
                .collect(),
        }
    }

    /// True when no finding is an error.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }

    /// Human-readable report.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        if self.findings.is_empty() {
            return writeln!(out, "Success\nNo problems found in translation lengths.");
        }
        for finding in &self.findings {
            writeln!(out, "{}:\n=> {finding}", finding.level)?;
        }
        Ok(())
    }
}

/// Check every leaf of `tree` against `rules`, in namespace and key order.
#[must_use]
pub fn lint_tree(lang: &str, tree: &ResourceTree, rules: &[LintRule]) -> Vec<Finding> {
    let mut findings = Vec::new();
    for (namespace, entries) in tree.iter() {
        for (top, node) in entries {
            node.for_each_leaf(|rest, value| {
                let key = if rest.is_empty() {
                    top.clone()
                } else {
                    format!("{top}.{rest}")
                };
                for rule in rules.iter().filter(|rule| rule.key == key) {
                    for violation in check(rule, value) {
                        findings.push(Finding {
                            level: rule.level,
                            lang: lang.to_string(),
                            namespace: namespace.to_string(),
                            key: key.clone(),
                            violation,
                        });
                    }
                }
            });
        }
    }
    findings
}

fn check(rule: &LintRule, value: &str) -> Vec<Violation> {
    let max = rule.max_characters;
    match rule.kind {
        RuleKind::Word => value
            .split(' ')
            .filter_map(|word| {
                let length = word.chars().count();
                (length > max).then(|| Violation::LongWord {
                    word: word.to_string(),
                    length,
                    max,
                })
            })
            .collect(),
        RuleKind::Paragraph => {
            let length = value.chars().count();
            if length > max {
                vec![Violation::LongParagraph { length, max }]
            } else {
                Vec::new()
            }
        }
    }
}

/// Lint one locale file; the language is the file stem.
///
/// # Errors
///
/// [`LintError::Load`] when the file cannot be read or parsed.
pub fn lint_file(path: impl AsRef<Path>, rules: &[LintRule]) -> Result<Vec<Finding>, LintError> {
    let path = path.as_ref();
    let lang = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let tree = ResourceTree::from_path(path)?;
    let findings = lint_tree(&lang, &tree, rules);
    tracing::debug!(path = %path.display(), findings = findings.len(), "linted locale file");
    Ok(findings)
}

/// Lint every `*.json` file directly inside `dir`.
///
/// # Errors
///
/// [`LintError::Io`] if the directory cannot be listed, or the first
/// error from [`lint_file`].
pub fn lint_dir(dir: impl AsRef<Path>, rules: &[LintRule]) -> Result<LintReport, LintError> {
    let dir = dir.as_ref();
    let io_err = |source: io::Error| LintError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        tracing::warn!(dir = %dir.display(), "no locale files found");
    }

    let mut findings = Vec::new();
    for file in &files {
        findings.extend(lint_file(file, rules)?);
    }
    Ok(LintReport::new(findings))
}
