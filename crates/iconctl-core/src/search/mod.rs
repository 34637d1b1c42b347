//! Web search for institution names.
//!
//! A [`SearchEngine`] turns a query into result titles in page order. The
//! production engine scrapes DuckDuckGo's HTML endpoint; the orchestrator only
//! depends on the trait.

mod duckduckgo;
mod parse;

pub use duckduckgo::DuckDuckGo;
pub use parse::parse_result_titles;

/// Search failure. Callers treat any variant as "no titles for this query".
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Transport(#[from] curl::Error),
    #[error("search returned HTTP {0}")]
    Http(u32),
}

pub trait SearchEngine {
    /// Result titles for `query`, in the order they appear on the results page.
    fn search(&self, query: &str) -> Result<Vec<String>, SearchError>;
}

impl<T: SearchEngine + ?Sized> SearchEngine for &T {
    fn search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        (**self).search(query)
    }
}
