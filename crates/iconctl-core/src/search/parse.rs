//! Result title extraction from a search results page.

use crate::hints::collapse_whitespace;
use scraper::{Html, Selector};

const RESULT_TITLE: &str = "a.result__a";

/// Text of every `a.result__a` anchor, markup stripped and entities decoded,
/// whitespace collapsed. Empty titles are dropped; page order is kept.
pub fn parse_result_titles(page: &str) -> Vec<String> {
    let selector = Selector::parse(RESULT_TITLE).expect("valid result selector");
    let document = Html::parse_document(page);
    let mut anchors = 0usize;
    let titles: Vec<String> = document
        .select(&selector)
        .inspect(|_| anchors += 1)
        .map(|a| collapse_whitespace(&a.text().collect::<String>()))
        .filter(|t| !t.is_empty())
        .collect();

    if anchors == 0 && !page.trim().is_empty() {
        tracing::warn!(
            bytes = page.len(),
            "results page has no result__a anchors; page layout may have changed"
        );
    }
    titles
}
