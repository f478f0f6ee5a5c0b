use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dictionary::{self, ParseOptions, VariantGroup};
use crate::error::{Error, Result};

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("punctuation pattern is valid"));

/// Minimum number of distinct forms from one group that must occur together.
pub const CO_OCCURRENCE_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    pub min_found: usize,
    pub parse: ParseOptions,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_found: CO_OCCURRENCE_THRESHOLD,
            parse: ParseOptions::default(),
        }
    }
}

impl AnalysisOptions {
    #[must_use]
    pub const fn with_min_found(mut self, min_found: usize) -> Self {
        self.min_found = min_found;
        self
    }

    #[must_use]
    pub const fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_found < CO_OCCURRENCE_THRESHOLD {
            return Err(Error::InvalidThreshold(self.min_found));
        }
        Ok(())
    }
}

/// Lower-cased word tokens of a document.
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    tokens: HashSet<String>,
}

impl TokenSet {
    pub fn contains(&self, word: &str) -> bool {
        self.tokens.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub group: VariantGroup,
    pub found: Vec<String>,
}

/// Punctuation is replaced with a space rather than removed, so `a,b` stays
/// two tokens.
pub fn build_token_set(document_text: &str) -> TokenSet {
    let lowered = document_text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");
    let tokens: HashSet<String> = cleaned.split_whitespace().map(str::to_string).collect();

    tracing::debug!("Document normalized to {} distinct tokens", tokens.len());
    TokenSet { tokens }
}

/// Distinct members of `group` present in the document, in group order and
/// original casing. Members equal up to case count once, as their first spelling.
pub fn match_group(tokens: &TokenSet, group: &VariantGroup) -> Vec<String> {
    let mut seen = HashSet::new();
    group
        .iter()
        .filter(|word| tokens.contains(word) && seen.insert(word.to_lowercase()))
        .cloned()
        .collect()
}

pub fn analyze(document_text: &str, groups: &[VariantGroup]) -> Vec<MatchResult> {
    collect_matches(&build_token_set(document_text), groups, CO_OCCURRENCE_THRESHOLD)
}

pub fn analyze_with(
    document_text: &str,
    groups: &[VariantGroup],
    options: &AnalysisOptions,
) -> Result<Vec<MatchResult>> {
    options.validate()?;
    Ok(collect_matches(
        &build_token_set(document_text),
        groups,
        options.min_found,
    ))
}

/// Parse the dictionary and analyze the document in one pass.
pub fn analyze_texts(
    dict_text: &str,
    document_text: &str,
    options: &AnalysisOptions,
) -> Result<(Vec<VariantGroup>, Vec<MatchResult>)> {
    options.validate()?;
    let groups = dictionary::parse_with(dict_text, &options.parse);
    let results = collect_matches(&build_token_set(document_text), &groups, options.min_found);
    Ok((groups, results))
}

fn collect_matches(
    tokens: &TokenSet,
    groups: &[VariantGroup],
    min_found: usize,
) -> Vec<MatchResult> {
    let results: Vec<MatchResult> = groups
        .iter()
        .filter_map(|group| {
            let found = match_group(tokens, group);
            (found.len() >= min_found).then(|| MatchResult {
                group: group.clone(),
                found,
            })
        })
        .collect();

    tracing::debug!(
        "{} of {} variant groups co-occur in document",
        results.len(),
        groups.len()
    );
    results
}
