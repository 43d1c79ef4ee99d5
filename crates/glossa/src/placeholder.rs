//! `{{name}}` placeholder scanning.
//!
//! A placeholder is `{{`, one or more characters other than `{`, then `}}`.
//! Matching is leftmost-first and greedy, so `{{a}}}` names `a}`. Names are
//! taken literally: no trimming, no case folding.

use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{]+)\}\}").expect("placeholder pattern compiles"));

/// One piece of a split template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    /// Literal text between placeholders (may be empty).
    Text(&'a str),
    /// The name captured from a placeholder.
    Name(&'a str),
}

/// Whether `template` contains at least one placeholder.
#[must_use]
pub fn has_placeholders(template: &str) -> bool {
    PLACEHOLDER.is_match(template)
}

/// Distinct placeholder names in order of first occurrence.
#[must_use]
pub fn names(template: &str) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(template) {
        if let Some(name) = caps.get(1).map(|m| m.as_str())
            && !out.contains(&name)
        {
            out.push(name);
        }
    }
    out
}

/// Split `template` into alternating text and names.
///
/// The result always starts and ends with [`Piece::Text`] and alternates
/// strictly, so a template with `n` placeholders yields `2n + 1` pieces.
#[must_use]
pub fn split(template: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for caps in PLACEHOLDER.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        pieces.push(Piece::Text(&template[last..whole.start()]));
        pieces.push(Piece::Name(name.as_str()));
        last = whole.end();
    }
    pieces.push(Piece::Text(&template[last..]));
    pieces
}

/// Single-pass replacement of every placeholder.
///
/// Replacement values are not re-scanned. On the first name `lookup`
/// cannot resolve, that name is returned as the error.
pub fn interpolate<'t, 'v, F>(template: &'t str, mut lookup: F) -> Result<String, &'t str>
where
    F: FnMut(&str) -> Option<&'v str>,
{
    let mut out = String::with_capacity(template.len());
    for piece in split(template) {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Name(name) => out.push_str(lookup(name).ok_or(name)?),
        }
    }
    Ok(out)
}
