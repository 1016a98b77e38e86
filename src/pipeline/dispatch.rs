//! Concurrent page-analysis dispatcher.
//!
//! Runs the analyzer over the candidate URL set with a bounded worker
//! pool and funnels every result into one collection, regardless of
//! completion order or individual failures.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::config::ReconConfig;
use crate::pipeline::analyze::analyze_page;
use crate::types::PageRecord;

/// Analyse every candidate URL with `config.workers` concurrent workers.
///
/// One task is spawned per URL, gated by a semaphore so at most
/// `workers` fetches are in flight at once. Results are collected in
/// completion order, which is non-deterministic. A task that panics is
/// logged at error level and skipped; it never aborts the run or the
/// other in-flight analyses. Returns only after every task has been
/// joined.
pub async fn run_analysis(
    client: &reqwest::Client,
    urls: Vec<String>,
    query: &str,
    config: &ReconConfig,
) -> Vec<PageRecord> {
    let semaphore = Arc::new(Semaphore::new(config.workers.max(1)));
    let mut tasks: JoinSet<PageRecord> = JoinSet::new();

    for url in urls {
        let semaphore = Arc::clone(&semaphore);
        let client = client.clone();
        let query = query.to_owned();
        let config = config.clone();
        tasks.spawn(async move {
            // Never closed, so acquisition cannot fail; the permit is
            // held for the duration of the analysis.
            let _permit = semaphore.acquire_owned().await.ok();
            analyze_page(&client, &url, &query, &config).await
        });
    }

    let mut records = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(record) => records.push(record),
            Err(err) => {
                tracing::error!(error = %err, "analysis task failed unexpectedly");
            }
        }
    }

    records
}
