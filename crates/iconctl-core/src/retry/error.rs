//! Fetch error type for retry classification.

use std::fmt;

/// Error returned by a single identifier fetch (curl failure, HTTP status, or storage failure).
/// Used so we can classify and decide retries before reporting.
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, DNS, etc.).
    Curl(curl::Error),
    /// HTTP response had a non-2xx status.
    Http(u32),
    /// Writing the icon to disk failed. Not retried.
    Storage(std::io::Error),
}

impl FetchError {
    /// True for statuses that mean "this identifier does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Http(404) | FetchError::Http(410))
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Curl(e) => write!(f, "network error: {}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
            FetchError::Storage(e) => write!(f, "storage: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Curl(e) => Some(e),
            FetchError::Storage(e) => Some(e),
            FetchError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for FetchError {
    fn from(e: curl::Error) -> Self {
        FetchError::Curl(e)
    }
}
