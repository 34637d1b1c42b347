pub mod config;
pub mod logging;

// Pipelines: fetch icons from the CDN, then rename them by institution.
pub mod candidate;
pub mod fetcher;
pub mod hints;
pub mod http;
pub mod identify;
pub mod rename;
pub mod retry;
pub mod search;
pub mod slug;

#[cfg(test)]
pub(crate) mod testing;
