//! Driver loop: scan identifiers upward until the remote range ends.

use super::{FetchOutcome, Fetcher};
use crate::http::HttpClient;

/// Why the scan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The CDN reported the identifier as missing (normal end of data).
    NotFound,
    /// A failure that survived retries, or a storage error.
    Failed(String),
    /// The configured upper bound was reached.
    RangeExhausted,
}

/// Summary of a fetch run.
#[derive(Debug, Clone)]
pub struct FetchReport {
    /// Identifiers stored, in order.
    pub stored: Vec<u64>,
    /// The identifier the scan stopped on, if it stopped on a miss or failure.
    pub stopped_at: Option<u64>,
    pub reason: StopReason,
}

impl<C: HttpClient> Fetcher<C> {
    /// Fetches `start_id`, `start_id + 1`, ... until the first non-success or `end_id`.
    ///
    /// `on_stored` is called after each stored identifier (the CLI prints progress there).
    pub fn run_with<F>(&self, mut on_stored: F) -> FetchReport
    where
        F: FnMut(u64, &std::path::Path),
    {
        let mut stored = Vec::new();
        let mut id = self.start_id;
        loop {
            if self.end_id.is_some_and(|end| id > end) {
                tracing::info!(last = id.saturating_sub(1), "reached configured end of range");
                return FetchReport {
                    stored,
                    stopped_at: None,
                    reason: StopReason::RangeExhausted,
                };
            }

            match self.fetch_and_store(id) {
                FetchOutcome::Stored(path) => {
                    tracing::debug!(id, path = %path.display(), "stored icon");
                    on_stored(id, &path);
                    stored.push(id);
                }
                FetchOutcome::NotFound => {
                    tracing::info!(id, "not found, end of available range");
                    return FetchReport {
                        stored,
                        stopped_at: Some(id),
                        reason: StopReason::NotFound,
                    };
                }
                FetchOutcome::Failed(e) => {
                    tracing::warn!(id, url = %self.url_for(id), "fetch failed: {}", e);
                    return FetchReport {
                        stored,
                        stopped_at: Some(id),
                        reason: StopReason::Failed(e.to_string()),
                    };
                }
            }

            id = match id.checked_add(1) {
                Some(next) => next,
                None => {
                    return FetchReport {
                        stored,
                        stopped_at: None,
                        reason: StopReason::RangeExhausted,
                    }
                }
            };
        }
    }

    pub fn run(&self) -> FetchReport {
        self.run_with(|_, _| {})
    }
}
