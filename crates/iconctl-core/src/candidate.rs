//! Candidate selection from search result titles.

use crate::config::NamingConfig;
use regex::Regex;
use std::sync::LazyLock;

/// Separator between a page's subject and the rest of its title: `-`, `|`, `:` or an
/// em-dash, with whitespace on both sides.
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s[-|:—]\s").expect("valid separator regex"));
static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("valid digit regex"));

/// Leading clause of a title: everything before the first separator, trimmed.
pub fn leading_clause(title: &str) -> &str {
    match SEPARATOR.find(title) {
        Some(m) => title[..m.start()].trim(),
        None => title.trim(),
    }
}

/// Stop-phrase and format rules for candidate names.
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    stop_phrases: Vec<String>,
    min_len: usize,
    max_len: usize,
}

impl CandidateFilter {
    pub fn new<I, S>(stop_phrases: I, min_len: usize, max_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_phrases: stop_phrases
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
            min_len,
            max_len,
        }
    }

    pub fn from_config(cfg: &NamingConfig) -> Self {
        Self::new(&cfg.stop_phrases, cfg.min_candidate_len, cfg.max_candidate_len)
    }

    /// True if `candidate` passes every rule.
    pub fn accepts(&self, candidate: &str) -> bool {
        let lower = candidate.to_lowercase();
        if self.stop_phrases.iter().any(|p| lower.contains(p.as_str())) {
            return false;
        }
        if DIGIT.is_match(candidate) {
            return false;
        }
        let len = candidate.chars().count();
        len >= self.min_len && len <= self.max_len
    }

    /// First title whose leading clause passes the rules.
    pub fn select_candidate<S: AsRef<str>>(&self, titles: &[S]) -> Option<String> {
        titles
            .iter()
            .map(|t| leading_clause(t.as_ref()))
            .find(|c| self.accepts(c))
            .map(str::to_string)
    }
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self::from_config(&NamingConfig::default())
    }
}
