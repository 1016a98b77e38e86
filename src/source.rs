//! Trait definition for pluggable search backends.
//!
//! Each backend (DuckDuckGo, Bing) implements [`ResultSource`] to provide
//! a uniform interface for harvesting candidate URLs for a query.

use crate::config::ReconConfig;
use crate::error::Result;
use crate::types::SearchBackend;

/// A pluggable search backend yielding candidate URLs for a query.
///
/// Implementors scrape a specific engine's results pages and return
/// normalised absolute URLs. Each backend handles its own:
///
/// - endpoint URL construction and pagination parameters
/// - HTML parsing via CSS selectors
/// - early termination on empty pages or transport errors
///
/// A source yields at most `budget` URLs and must tolerate queries that
/// produce zero results. All implementations must be `Send + Sync` so the
/// collector can hold them behind a shared reference.
pub trait ResultSource: Send + Sync {
    /// Harvest up to `budget` candidate URLs for `query`.
    ///
    /// Pagination errors after the first page are terminal for the
    /// backend but not for the run: the URLs gathered so far are still
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backend produced nothing at all —
    /// the caller logs it and moves on to the next backend.
    fn fetch(
        &self,
        client: &reqwest::Client,
        query: &str,
        budget: usize,
        config: &ReconConfig,
    ) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;

    /// Returns which [`SearchBackend`] variant this implementation represents.
    fn backend(&self) -> SearchBackend;
}
