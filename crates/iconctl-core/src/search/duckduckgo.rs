//! DuckDuckGo HTML search client.

use super::{parse_result_titles, SearchEngine, SearchError};
use crate::config::SearchConfig;
use crate::http::{HttpClient, HttpRequest};
use std::time::Duration;

/// Scrapes result titles from the HTML (no-JS) endpoint.
pub struct DuckDuckGo<C> {
    client: C,
    url_template: String,
    user_agent: String,
    timeout: Duration,
}

impl<C: HttpClient> DuckDuckGo<C> {
    pub fn new(client: C, cfg: &SearchConfig) -> Self {
        Self {
            client,
            url_template: cfg.url_template.clone(),
            user_agent: cfg.user_agent.clone(),
            timeout: cfg.timeout(),
        }
    }

    /// Search URL with `query` form-encoded (spaces become `+`).
    pub fn url_for(&self, query: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        self.url_template.replace("{query}", &encoded)
    }
}

impl<C: HttpClient> SearchEngine for DuckDuckGo<C> {
    fn search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        let url = self.url_for(query);
        let request = HttpRequest::get(&url)
            .header("User-Agent", &self.user_agent)
            .connect_timeout(self.timeout)
            .timeout(self.timeout);
        let response = self.client.get(&request)?;
        if !response.is_success() {
            return Err(SearchError::Http(response.status));
        }
        let page = String::from_utf8_lossy(&response.body);
        let titles = parse_result_titles(&page);
        tracing::debug!(query, titles = titles.len(), "search results");
        Ok(titles)
    }
}
