//! Extraction of variant groups from free-form dictionary text.
//!
//! Dictionary entries declare alternative forms inside parentheses, e.g.
//! `forma (rower, welocyped) jazdy`. Only parentheses made of word
//! characters, commas and whitespace are considered; everything else in the
//! dictionary is prose and is ignored.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([\w,\s]+)\)").expect("bracket pattern is valid"));

/// Grammatical-number notes ("plural form", "singular form") that are never
/// variant lists.
const RESERVED_ANNOTATIONS: &[&str] = &["l. mn.", "l. poj."];

const MIN_GROUP_LEN: usize = 2;

/// What to do with pieces that are empty after trimming, e.g. `(word,, )`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyPieces {
    /// Filter empty pieces out before the length check.
    #[default]
    Drop,
    /// Keep empty pieces as group members.
    Keep,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub empty_pieces: EmptyPieces,
}

impl ParseOptions {
    #[must_use]
    pub const fn keep_empty() -> Self {
        Self {
            empty_pieces: EmptyPieces::Keep,
        }
    }
}

/// Alternative forms declared inside one parenthesis, in dictionary order.
///
/// Always holds at least two members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VariantGroup(Vec<String>);

impl VariantGroup {
    fn from_pieces(pieces: Vec<String>) -> Option<Self> {
        (pieces.len() >= MIN_GROUP_LEN).then_some(Self(pieces))
    }

    pub fn members(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a VariantGroup {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for VariantGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(", "))
    }
}

/// Parse dictionary text with the default options.
pub fn parse(dict_text: &str) -> Vec<VariantGroup> {
    parse_with(dict_text, &ParseOptions::default())
}

pub fn parse_with(dict_text: &str, options: &ParseOptions) -> Vec<VariantGroup> {
    let groups: Vec<VariantGroup> = BRACKET
        .captures_iter(dict_text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|content| group_from_bracket(content.as_str(), options))
        .collect();

    tracing::debug!("Parsed {} variant groups from dictionary", groups.len());
    groups
}

fn group_from_bracket(content: &str, options: &ParseOptions) -> Option<VariantGroup> {
    if !content.contains(',') {
        tracing::trace!("Skipping single-form bracket: ({content})");
        return None;
    }
    if is_annotation(content) {
        tracing::trace!("Skipping grammatical annotation: ({content})");
        return None;
    }

    let pieces = content
        .split(',')
        .map(str::trim)
        .filter(|piece| options.empty_pieces == EmptyPieces::Keep || !piece.is_empty())
        .map(str::to_string)
        .collect();

    let group = VariantGroup::from_pieces(pieces);
    if group.is_none() {
        tracing::trace!("Skipping bracket with fewer than two forms: ({content})");
    }
    group
}

/// Whether bracket content is a plural/singular note rather than a variant list.
pub fn is_annotation(content: &str) -> bool {
    let lowered = content.to_lowercase();
    RESERVED_ANNOTATIONS
        .iter()
        .any(|annotation| lowered.contains(annotation))
}
