//! libcurl-backed [`HttpClient`].

use super::{HttpClient, HttpRequest, HttpResponse};

/// Stateless client; each request uses a fresh `Easy` handle. Timeouts come from the request.
#[derive(Debug, Clone, Default)]
pub struct CurlClient;

impl CurlClient {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HttpClient for CurlClient {
    fn get(&self, request: &HttpRequest<'_>) -> Result<HttpResponse, curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(request.url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        if let Some(timeout) = request.connect_timeout {
            easy.connect_timeout(timeout)?;
        }
        if let Some(timeout) = request.timeout {
            easy.timeout(timeout)?;
        }

        let mut list = curl::easy::List::new();
        for (k, v) in &request.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if !request.headers.is_empty() {
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(url = request.url, status, bytes = body.len(), "GET");
        Ok(HttpResponse { status, body })
    }
}
