//! CDN icon fetcher.
//!
//! Downloads `{id}.svg` for consecutive identifiers and stores each body
//! verbatim in the output directory. The driver loop in [`Fetcher::run`]
//! treats the first definitive miss as the end of the remote range.

mod run;

use crate::config::FetchConfig;
use crate::http::{HttpClient, HttpRequest};
use crate::retry::{run_with_retry, FetchError, RetryPolicy};
use std::fs;
use std::path::{Path, PathBuf};

pub use run::{FetchReport, StopReason};

/// Result of fetching one identifier (after retries).
#[derive(Debug)]
pub enum FetchOutcome {
    /// Body written to the given path.
    Stored(PathBuf),
    /// CDN has no resource for this identifier.
    NotFound,
    /// Transport, HTTP or storage failure.
    Failed(FetchError),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Stored(_))
    }
}

/// Downloads icons from the CDN into `output_dir`.
pub struct Fetcher<C> {
    client: C,
    url_template: String,
    output_dir: PathBuf,
    extension: String,
    start_id: u64,
    end_id: Option<u64>,
    retry: RetryPolicy,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C, cfg: &FetchConfig, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            url_template: cfg.url_template.clone(),
            output_dir: output_dir.into(),
            extension: "svg".to_string(),
            start_id: cfg.start_id,
            end_id: cfg.end_id,
            retry: cfg.retry_policy(),
        }
    }

    /// Overrides the retry policy (tests use [`RetryPolicy::none`] or zero delays).
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Local file extension (without the dot).
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn with_range(mut self, start_id: u64, end_id: Option<u64>) -> Self {
        self.start_id = start_id;
        self.end_id = end_id;
        self
    }

    /// Resource URL for an identifier.
    pub fn url_for(&self, id: u64) -> String {
        self.url_template.replace("{id}", &id.to_string())
    }

    /// Local path an identifier is stored at.
    pub fn path_for(&self, id: u64) -> PathBuf {
        self.output_dir.join(format!("{}.{}", id, self.extension))
    }

    /// Fetches one identifier (retrying transient failures) and writes it to disk.
    pub fn fetch_and_store(&self, id: u64) -> FetchOutcome {
        let url = self.url_for(id);
        let body = match run_with_retry(&self.retry, || self.fetch_once(&url)) {
            Ok(body) => body,
            Err(e) if e.is_not_found() => return FetchOutcome::NotFound,
            Err(e) => return FetchOutcome::Failed(e),
        };

        let path = self.path_for(id);
        match self.store(&path, &body) {
            Ok(()) => FetchOutcome::Stored(path),
            Err(e) => FetchOutcome::Failed(FetchError::Storage(e)),
        }
    }

    fn fetch_once(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(&HttpRequest::get(url))?;
        if !response.is_success() {
            return Err(FetchError::Http(response.status));
        }
        Ok(response.body)
    }

    fn store(&self, path: &Path, body: &[u8]) -> std::io::Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        fs::write(path, body)
    }
}
