//! Institution identification: queries -> titles -> candidate -> slug.

use crate::candidate::CandidateFilter;
use crate::config::NamingConfig;
use crate::search::SearchEngine;
use crate::slug::Slug;
use std::time::Duration;

/// A successful identification and how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identification {
    pub slug: Slug,
    /// Leading clause of the winning result title, before normalization.
    pub candidate: String,
    /// Query whose results produced the candidate.
    pub query: String,
}

/// Runs the query plan for one asset against a search engine.
pub struct InstitutionIdentifier<S> {
    search: S,
    filter: CandidateFilter,
    primary_query: String,
    hint_query: String,
    pause: Duration,
}

impl<S: SearchEngine> InstitutionIdentifier<S> {
    pub fn new(search: S, cfg: &NamingConfig) -> Self {
        Self {
            search,
            filter: CandidateFilter::from_config(cfg),
            primary_query: cfg.primary_query.clone(),
            hint_query: cfg.hint_query.clone(),
            pause: cfg.pause(),
        }
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Queries in priority order: the identifier query, then the first hint (if any).
    pub fn queries(&self, id: u64, hints: &[String]) -> Vec<String> {
        let mut queries = vec![self.primary_query.replace("{id}", &id.to_string())];
        if let Some(hint) = hints.first() {
            queries.push(self.hint_query.replace("{hint}", hint));
        }
        queries
    }

    /// Returns the first slug any query yields. Later queries are not issued once one wins.
    ///
    /// A failed search is logged and treated as an empty result, so this never errors.
    pub fn identify(&self, id: u64, hints: &[String]) -> Option<Identification> {
        for query in self.queries(id, hints) {
            match self.search.search(&query) {
                Ok(titles) => {
                    if let Some(found) = self.pick(&titles, &query) {
                        return Some(found);
                    }
                    tracing::debug!(id, query = %query, titles = titles.len(), "no usable candidate");
                }
                Err(e) => {
                    tracing::warn!(id, query = %query, "search failed: {}", e);
                }
            }
            if !self.pause.is_zero() {
                std::thread::sleep(self.pause);
            }
        }
        None
    }

    fn pick(&self, titles: &[String], query: &str) -> Option<Identification> {
        let candidate = self.filter.select_candidate(titles)?;
        let slug = Slug::new(&candidate)?;
        Some(Identification {
            slug,
            candidate,
            query: query.to_string(),
        })
    }
}
