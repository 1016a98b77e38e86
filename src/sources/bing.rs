//! Bing backend — Microsoft's index, paginated with the `first` parameter.
//!
//! Result anchors on Bing carry absolute target URLs, so no base
//! resolution is needed — hrefs go through the normaliser as-is.

use crate::config::ReconConfig;
use crate::error::{ReconError, Result};
use crate::http;
use crate::pipeline::normalize::normalize_href;
use crate::source::ResultSource;
use crate::types::SearchBackend;
use scraper::{Html, Selector};

/// Search endpoint.
const SEARCH_ENDPOINT: &str = "https://www.bing.com/search";

/// Results requested per page; `first` advances by this much.
const RESULTS_PER_PAGE: usize = 10;

/// Bing URL harvester.
pub struct BingSource;

impl ResultSource for BingSource {
    async fn fetch(
        &self,
        client: &reqwest::Client,
        query: &str,
        budget: usize,
        config: &ReconConfig,
    ) -> Result<Vec<String>> {
        tracing::trace!(query, budget, "Bing fetch");

        let mut urls: Vec<String> = Vec::new();

        // Bing's `first` parameter is the 1-based index of the first
        // result on the page: 1, 11, 21, …
        for first in (1..=budget).step_by(RESULTS_PER_PAGE) {
            let first_param = first.to_string();
            let count_param = RESULTS_PER_PAGE.to_string();
            let request = client
                .get(SEARCH_ENDPOINT)
                .query(&[
                    ("q", query),
                    ("first", first_param.as_str()),
                    ("count", count_param.as_str()),
                ])
                .header("Accept", "text/html,application/xhtml+xml")
                .header("Accept-Language", "en-US,en;q=0.9");

            let html = match http::fetch_text(request, config.retry_attempts).await {
                Ok(body) => body,
                Err(err) if urls.is_empty() => return Err(err),
                Err(err) => {
                    tracing::warn!(first, error = %err, "Bing pagination stopped");
                    break;
                }
            };

            let page_urls = parse_result_page(&html, budget - urls.len())?;
            if page_urls.is_empty() {
                tracing::debug!(first, "Bing results exhausted");
                break;
            }
            urls.extend(page_urls);
            if urls.len() >= budget {
                break;
            }
        }

        Ok(urls)
    }

    fn backend(&self) -> SearchBackend {
        SearchBackend::Bing
    }
}

/// Parse a Bing results page into candidate URLs.
///
/// Extracted as a separate function for testability with mock HTML.
pub(crate) fn parse_result_page(html: &str, budget: usize) -> Result<Vec<String>> {
    let document = Html::parse_document(html);

    // Organic results live in li.b_algo containers with the link in h2 > a.
    let anchor_sel = Selector::parse("li.b_algo h2 a")
        .map_err(|e| ReconError::Parse(format!("invalid result selector: {e:?}")))?;

    let mut urls = Vec::new();
    for anchor in document.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some(url) = normalize_href(href, None) else {
            continue;
        };
        urls.push(url);
        if urls.len() >= budget {
            break;
        }
    }

    tracing::debug!(count = urls.len(), "Bing page parsed");
    Ok(urls)
}
