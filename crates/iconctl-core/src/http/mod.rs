//! Blocking HTTP GET transport.
//!
//! Both pipelines go through [`HttpClient`] so the CDN and the search engine
//! can be replaced by fakes in tests. [`CurlClient`] is the libcurl-backed
//! implementation used by the CLI.

mod curl_client;

use std::time::Duration;

pub use curl_client::CurlClient;

/// A GET request.
#[derive(Debug, Clone)]
pub struct HttpRequest<'a> {
    pub url: &'a str,
    /// Extra headers as (name, value) pairs.
    pub headers: Vec<(&'a str, &'a str)>,
    /// Total transfer timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Connection phase timeout; `None` leaves libcurl's default.
    pub connect_timeout: Option<Duration>,
}

impl<'a> HttpRequest<'a> {
    pub fn get(url: &'a str) -> Self {
        Self {
            url,
            headers: Vec::new(),
            timeout: None,
            connect_timeout: None,
        }
    }

    pub fn header(mut self, name: &'a str, value: &'a str) -> Self {
        self.headers.push((name, value));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}

/// Status and raw body of a completed transfer. Non-2xx statuses are not errors at this layer.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a blocking GET. Errors are transport failures only.
pub trait HttpClient {
    fn get(&self, request: &HttpRequest<'_>) -> Result<HttpResponse, curl::Error>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn get(&self, request: &HttpRequest<'_>) -> Result<HttpResponse, curl::Error> {
        (**self).get(request)
    }
}
