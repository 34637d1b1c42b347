//! Hint extraction from an asset's own `<title>` / `<desc>` metadata.

use regex::Regex;
use std::sync::LazyLock;

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title>(.*?)</title>").expect("valid title regex"));
static DESC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<desc>(.*?)</desc>").expect("valid desc regex"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Collapses whitespace runs to a single space and trims.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Returns non-empty hints: every title match in document order, then every desc match.
pub fn extract_hints(text: &str) -> Vec<String> {
    [&*TITLE, &*DESC]
        .into_iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|caps| caps.get(1))
        .map(|m| collapse_whitespace(m.as_str()))
        .filter(|hint| !hint.is_empty())
        .collect()
}
