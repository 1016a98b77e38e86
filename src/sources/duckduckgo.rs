//! DuckDuckGo backend — most scraper-friendly, queried first.
//!
//! Prefers the lite endpoint (`lite.duckduckgo.com`), a single request
//! with very simple markup. On any failure there it transparently falls
//! back to paginated scraping of the HTML-only endpoint at
//! `html.duckduckgo.com`, which requires no JavaScript.

use crate::config::ReconConfig;
use crate::error::{ReconError, Result};
use crate::http;
use crate::pipeline::normalize::normalize_href;
use crate::source::ResultSource;
use crate::types::SearchBackend;
use scraper::{Html, Selector};
use url::Url;

/// Base URL relative result anchors are resolved against.
const DDG_BASE: &str = "https://duckduckgo.com";

/// HTML-only search endpoint used for paginated scraping.
const HTML_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Lite endpoint tried first — one request, simpler markup, no pagination.
const LITE_ENDPOINT: &str = "https://lite.duckduckgo.com/lite/";

/// Results per page on the HTML endpoint, used to size pagination.
const RESULTS_PER_PAGE: usize = 30;

/// DuckDuckGo URL harvester.
pub struct DuckDuckGoSource;

impl DuckDuckGoSource {
    /// Single-request harvest from the lite endpoint.
    async fn fetch_lite(
        &self,
        client: &reqwest::Client,
        query: &str,
        budget: usize,
        config: &ReconConfig,
    ) -> Result<Vec<String>> {
        let request = client.get(LITE_ENDPOINT).query(&[("q", query)]);
        let html = http::fetch_text(request, config.retry_attempts).await?;
        parse_lite_page(&html, budget)
    }

    /// Paginated harvest from the HTML-only endpoint.
    ///
    /// Stops early when a page yields zero results (index exhausted) or a
    /// page after the first fails to fetch; URLs gathered so far are kept.
    async fn fetch_paginated(
        &self,
        client: &reqwest::Client,
        query: &str,
        budget: usize,
        config: &ReconConfig,
    ) -> Result<Vec<String>> {
        let pages = budget / RESULTS_PER_PAGE + 1;
        let mut urls: Vec<String> = Vec::new();

        for page in 0..pages {
            let offset = (page * RESULTS_PER_PAGE).to_string();
            let request = client
                .get(HTML_ENDPOINT)
                .query(&[("q", query), ("s", offset.as_str())])
                .header("Accept-Language", "en-US,en;q=0.9");

            let html = match http::fetch_text(request, config.retry_attempts).await {
                Ok(body) => body,
                Err(err) if urls.is_empty() => return Err(err),
                Err(err) => {
                    tracing::warn!(page, error = %err, "DuckDuckGo pagination stopped");
                    break;
                }
            };

            let page_urls = parse_result_page(&html, budget - urls.len())?;
            if page_urls.is_empty() {
                tracing::debug!(page, "DuckDuckGo results exhausted");
                break;
            }
            urls.extend(page_urls);
            if urls.len() >= budget {
                break;
            }
        }

        Ok(urls)
    }
}

impl ResultSource for DuckDuckGoSource {
    async fn fetch(
        &self,
        client: &reqwest::Client,
        query: &str,
        budget: usize,
        config: &ReconConfig,
    ) -> Result<Vec<String>> {
        tracing::trace!(query, budget, "DuckDuckGo fetch");

        match self.fetch_lite(client, query, budget, config).await {
            Ok(urls) if !urls.is_empty() => {
                tracing::debug!(count = urls.len(), "DuckDuckGo lite results");
                return Ok(urls);
            }
            Ok(_) => {
                tracing::debug!("lite endpoint returned nothing, falling back to scraping");
            }
            Err(err) => {
                tracing::warn!(error = %err, "lite endpoint failed, falling back to scraping");
            }
        }

        self.fetch_paginated(client, query, budget, config).await
    }

    fn backend(&self) -> SearchBackend {
        SearchBackend::DuckDuckGo
    }
}

/// Resolve a result anchor href to the actual target URL.
///
/// DuckDuckGo wraps targets in a redirect like
/// `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=…`; the `uddg`
/// query parameter carries the real URL. Direct hrefs pass through the
/// normaliser unchanged.
pub(crate) fn extract_result_url(href: &str) -> Option<String> {
    let absolute = normalize_href(href, Some(DDG_BASE))?;
    let parsed = Url::parse(&absolute).ok()?;

    if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
        let unwrapped = parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned())?;
        normalize_href(&unwrapped, None)
    } else {
        Some(absolute)
    }
}

/// Parse an HTML-endpoint results page into candidate URLs.
///
/// Extracted as a separate function for testability with mock HTML.
pub(crate) fn parse_result_page(html: &str, budget: usize) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let anchor_sel = Selector::parse("a.result__a")
        .map_err(|e| ReconError::Parse(format!("invalid result selector: {e:?}")))?;

    let mut urls = Vec::new();
    for anchor in document.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some(url) = extract_result_url(href) else {
            continue;
        };
        urls.push(url);
        if urls.len() >= budget {
            break;
        }
    }

    tracing::debug!(count = urls.len(), "DuckDuckGo page parsed");
    Ok(urls)
}

/// Parse a lite-endpoint results page into candidate URLs.
pub(crate) fn parse_lite_page(html: &str, budget: usize) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let anchor_sel = Selector::parse("a.result-link")
        .map_err(|e| ReconError::Parse(format!("invalid lite selector: {e:?}")))?;

    let mut urls = Vec::new();
    for anchor in document.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some(url) = extract_result_url(href) else {
            continue;
        };
        urls.push(url);
        if urls.len() >= budget {
            break;
        }
    }

    Ok(urls)
}
