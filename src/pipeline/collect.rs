//! Candidate URL collection: drains each backend in order and merges
//! the results into one deduplicated, budget-capped list.

use std::collections::HashSet;

use crate::config::ReconConfig;
use crate::error::Result;
use crate::source::ResultSource;
use crate::sources::{BingSource, DuckDuckGoSource};
use crate::types::SearchBackend;

/// Collect candidate URLs for `query` from every configured backend.
///
/// Backends are drained sequentially in configuration order; each one is
/// given only the budget slots still remaining. URLs are deduplicated by
/// exact string equality, preserving first-seen order. A backend whose
/// fetch fails entirely is logged at warn level and skipped — one dead
/// engine never aborts the run.
pub async fn collect_urls(
    client: &reqwest::Client,
    query: &str,
    config: &ReconConfig,
) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut urls: Vec<String> = Vec::new();

    for &backend in &config.backends {
        if urls.len() >= config.max_results {
            break;
        }
        let budget = config.max_results - urls.len();

        tracing::info!(%backend, budget, "fetching candidate URLs");
        match fetch_backend(backend, client, query, budget, config).await {
            Ok(fetched) => {
                let added = merge_capped(&mut urls, &mut seen, fetched, config.max_results);
                tracing::debug!(%backend, added, total = urls.len(), "backend drained");
            }
            Err(err) => {
                tracing::warn!(%backend, error = %err, "backend failed, skipping");
            }
        }
    }

    urls
}

/// Query a single backend, dispatching to the concrete implementation.
async fn fetch_backend(
    backend: SearchBackend,
    client: &reqwest::Client,
    query: &str,
    budget: usize,
    config: &ReconConfig,
) -> Result<Vec<String>> {
    match backend {
        SearchBackend::DuckDuckGo => DuckDuckGoSource.fetch(client, query, budget, config).await,
        SearchBackend::Bing => BingSource.fetch(client, query, budget, config).await,
    }
}

/// Merge `fetched` into `urls`, skipping duplicates and stopping at `cap`.
///
/// Returns how many URLs were actually added.
pub(crate) fn merge_capped(
    urls: &mut Vec<String>,
    seen: &mut HashSet<String>,
    fetched: Vec<String>,
    cap: usize,
) -> usize {
    let before = urls.len();
    for url in fetched {
        if urls.len() >= cap {
            break;
        }
        if seen.insert(url.clone()) {
            urls.push(url);
        }
    }
    urls.len() - before
}
