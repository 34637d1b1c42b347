//! Retry and backoff policy for CDN fetches.
//!
//! Separates definitive misses (404/410, other 4xx) from transient failures
//! (timeouts, throttling, connection errors, 5xx) so the fetcher can retry
//! the latter with exponential backoff and stop on the former.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use error::FetchError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
