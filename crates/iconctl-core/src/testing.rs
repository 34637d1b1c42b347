//! In-memory fakes for the network seams.

use crate::http::{HttpClient, HttpRequest, HttpResponse};
use crate::search::{SearchEngine, SearchError};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// Scripted responses keyed by URL. The last scripted reply for a URL repeats;
/// unknown URLs answer 404.
#[derive(Default)]
pub(crate) struct FakeHttp {
    routes: RefCell<HashMap<String, VecDeque<Result<HttpResponse, u32>>>>,
    pub requests: RefCell<Vec<RecordedRequest>>,
}

impl FakeHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, url: &str, status: u32, body: &[u8]) -> &Self {
        self.push(url, Ok(HttpResponse {
            status,
            body: body.to_vec(),
        }))
    }

    /// Scripts a curl transport error (e.g. 7 = couldn't connect).
    pub fn fail(&self, url: &str, curl_code: u32) -> &Self {
        self.push(url, Err(curl_code))
    }

    fn push(&self, url: &str, reply: Result<HttpResponse, u32>) -> &Self {
        self.routes
            .borrow_mut()
            .entry(url.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.url.clone()).collect()
    }
}

impl HttpClient for FakeHttp {
    fn get(&self, request: &HttpRequest<'_>) -> Result<HttpResponse, curl::Error> {
        self.requests.borrow_mut().push(RecordedRequest {
            url: request.url.to_string(),
            headers: request
                .headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            timeout: request.timeout,
            connect_timeout: request.connect_timeout,
        });
        let mut routes = self.routes.borrow_mut();
        let reply = match routes.get_mut(request.url) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        match reply {
            Some(Ok(resp)) => Ok(resp),
            Some(Err(code)) => Err(curl::Error::new(code as _)),
            None => Ok(HttpResponse {
                status: 404,
                body: Vec::new(),
            }),
        }
    }
}

/// Search engine answering from a query -> titles table; unknown queries return no titles.
#[derive(Default)]
pub(crate) struct FakeSearch {
    results: HashMap<String, Result<Vec<String>, u32>>,
    pub queries: RefCell<Vec<String>>,
}

impl FakeSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, query: &str, titles: &[&str]) -> Self {
        self.results.insert(
            query.to_string(),
            Ok(titles.iter().map(|t| t.to_string()).collect()),
        );
        self
    }

    pub fn failing(mut self, query: &str, curl_code: u32) -> Self {
        self.results.insert(query.to_string(), Err(curl_code));
        self
    }
}

impl SearchEngine for FakeSearch {
    fn search(&self, query: &str) -> Result<Vec<String>, SearchError> {
        self.queries.borrow_mut().push(query.to_string());
        match self.results.get(query) {
            Some(Ok(titles)) => Ok(titles.clone()),
            Some(Err(code)) => Err(SearchError::Transport(curl::Error::new(*code as _))),
            None => Ok(Vec::new()),
        }
    }
}
