//! # linkhound
//!
//! Query-driven web reconnaissance: harvest candidate URLs from multiple
//! search backends, deduplicate them, fetch each page concurrently, and
//! extract hyperlinks relevant to the original query using exact and
//! fuzzy text matching.
//!
//! ## Design
//!
//! - Scrapes DuckDuckGo and Bing with CSS selectors on HTML responses —
//!   no API keys, no external services
//! - Merges backend results into one deduplicated, budget-capped URL set
//! - Analyses every page with a bounded worker pool; each URL produces
//!   exactly one record, success or failure
//! - Per-request failure isolation: a dead page, a dead backend, or a
//!   panicked worker never aborts the run
//! - User-Agent rotation, optional proxying, bounded transport retries
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() -> linkhound::Result<()> {
//! let config = linkhound::ReconConfig::default();
//! let records = linkhound::recon("rust programming", &config).await?;
//! for record in &records {
//!     println!("{}: {} relevant links", record.url, record.links.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod http;
pub mod pipeline;
pub mod source;
pub mod sources;
pub mod types;

pub use config::ReconConfig;
pub use error::{ReconError, Result};
pub use source::ResultSource;
pub use types::{LinkMatch, MatchReason, PageRecord, SearchBackend};

/// Run the full reconnaissance pipeline for `query`.
///
/// Collects candidate URLs from every backend in `config.backends`
/// (sequentially, deduplicated, capped at `config.max_results`), then
/// analyses them with `config.workers` concurrent workers. Every
/// collected URL yields one [`PageRecord`] in the returned collection;
/// record order is completion order and therefore non-deterministic.
///
/// # Errors
///
/// Returns [`ReconError::Config`] for an invalid configuration,
/// [`ReconError::Http`] if the HTTP client cannot be built, and
/// [`ReconError::NoUrls`] when no backend produced a single candidate
/// URL. Failures below that level degrade into failure records instead
/// of erroring.
pub async fn recon(query: &str, config: &ReconConfig) -> Result<Vec<PageRecord>> {
    config.validate()?;

    tracing::info!(query, "starting reconnaissance run");
    let client = http::build_client(config)?;

    let urls = pipeline::collect::collect_urls(&client, query, config).await;
    if urls.is_empty() {
        return Err(ReconError::NoUrls);
    }
    tracing::info!(count = urls.len(), "collected candidate URLs, analysing");

    let records = pipeline::dispatch::run_analysis(&client, urls, query, config).await;
    tracing::info!(pages = records.len(), "analysis finished");

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn recon_validates_config_zero_max_results() {
        let config = ReconConfig {
            max_results: 0,
            ..Default::default()
        };
        let result = recon("test", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_results"));
    }

    #[tokio::test]
    async fn recon_validates_config_empty_backends() {
        let config = ReconConfig {
            backends: vec![],
            ..Default::default()
        };
        let result = recon("test", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("backend"));
    }

    #[tokio::test]
    async fn recon_validates_config_zero_workers() {
        let config = ReconConfig {
            workers: 0,
            ..Default::default()
        };
        let result = recon("test", &config).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("workers"));
    }
}
