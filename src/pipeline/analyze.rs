//! Single-page fetch and analysis.
//!
//! Fetches one candidate URL, extracts the document title and every
//! anchor, and classifies each anchor against the query. Failures never
//! escape — a page that cannot be fetched or parsed produces a degraded
//! record with no title and no links.

use std::collections::HashSet;

use scraper::{Html, Selector};

use crate::config::ReconConfig;
use crate::http;
use crate::pipeline::normalize::normalize_href;
use crate::pipeline::relevance::classify;
use crate::types::{LinkMatch, PageRecord};

/// Fetch and analyse one candidate URL. Never fails.
///
/// On transport or HTTP failure the returned record has `title: None` and
/// an empty link list; the failure is terminal for this URL only.
pub async fn analyze_page(
    client: &reqwest::Client,
    url: &str,
    query: &str,
    config: &ReconConfig,
) -> PageRecord {
    tracing::info!(url, "analysing page");

    let html = match http::fetch_text(client.get(url), config.retry_attempts).await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(url, error = %err, "page fetch failed");
            return PageRecord::failed(url);
        }
    };

    let (title, links) = extract_record(url, query, &html);

    match title {
        Some(ref t) => tracing::debug!(url, title = %t, matches = links.len(), "page analysed"),
        None => tracing::debug!(url, matches = links.len(), "page analysed, no title"),
    }

    PageRecord {
        url: url.to_owned(),
        title,
        links,
    }
}

/// Extract the title and relevant links from a fetched page body.
///
/// Synchronous on purpose: parsed [`Html`] documents are not `Send`, so
/// all scraper work stays out of the async fetch path.
pub(crate) fn extract_record(
    page_url: &str,
    query: &str,
    html: &str,
) -> (Option<String>, Vec<LinkMatch>) {
    let document = Html::parse_document(html);

    let title = extract_title(&document);

    let Ok(anchor_sel) = Selector::parse("a[href]") else {
        return (title, Vec::new());
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut links = Vec::new();

    for anchor in document.select(&anchor_sel) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some(target) = normalize_href(href, Some(page_url)) else {
            continue;
        };
        if !seen.insert(target.clone()) {
            continue;
        }

        let text = anchor.text().collect::<String>().trim().to_string();
        if let Some(reason) = classify(query, &text, &target) {
            tracing::trace!(url = %target, %reason, "relevant link");
            links.push(LinkMatch {
                url: target,
                text,
                reason,
            });
        }
    }

    (title, links)
}

/// Document title, `None` when missing or empty.
fn extract_title(document: &Html) -> Option<String> {
    let Ok(selector) = Selector::parse("title") else {
        return None;
    };
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_owned())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MatchReason;

    const PAGE_URL: &str = "https://news.example.com/tech/article";

    const MOCK_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Tech News Digest</title></head>
<body>
  <a href="/tags/rust">rust coverage</a>
  <a href="https://rust-lang.org/learn">Learn the language</a>
  <a href="https://other.example/unrelated">gardening tips</a>
  <a href="javascript:void(0)">rust popup</a>
  <a href="/tags/rust">rust coverage again</a>
  <a href="https://store.example/sale">big rust sale</a>
</body>
</html>"#;

    #[test]
    fn extracts_title() {
        let (title, _) = extract_record(PAGE_URL, "rust", MOCK_PAGE);
        assert_eq!(title.as_deref(), Some("Tech News Digest"));
    }

    #[test]
    fn missing_title_is_none() {
        let (title, _) = extract_record(PAGE_URL, "rust", "<html><body></body></html>");
        assert!(title.is_none());
    }

    #[test]
    fn empty_title_is_none() {
        let (title, _) = extract_record(
            PAGE_URL,
            "rust",
            "<html><head><title>  </title></head><body></body></html>",
        );
        assert!(title.is_none());
    }

    #[test]
    fn matches_in_discovery_order() {
        let (_, links) = extract_record(PAGE_URL, "rust", MOCK_PAGE);
        let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://news.example.com/tags/rust",
                "https://rust-lang.org/learn",
                "https://store.example/sale",
            ]
        );
    }

    #[test]
    fn match_reasons_follow_tier_order() {
        let (_, links) = extract_record(PAGE_URL, "rust", MOCK_PAGE);
        // Relative anchor resolves to a URL containing the query.
        assert_eq!(links[0].reason, MatchReason::UrlContainsQuery);
        // Absolute anchor whose URL contains the query, even though the
        // text does not.
        assert_eq!(links[1].reason, MatchReason::UrlContainsQuery);
        // Text-only match.
        assert_eq!(links[2].reason, MatchReason::TextContainsQuery);
        assert_eq!(links[2].text, "big rust sale");
    }

    #[test]
    fn duplicate_urls_within_page_suppressed() {
        let (_, links) = extract_record(PAGE_URL, "rust", MOCK_PAGE);
        let tag_links = links
            .iter()
            .filter(|l| l.url.ends_with("/tags/rust"))
            .count();
        assert_eq!(tag_links, 1);
    }

    #[test]
    fn non_navigable_anchors_skipped() {
        let (_, links) = extract_record(PAGE_URL, "rust", MOCK_PAGE);
        assert!(links.iter().all(|l| !l.url.starts_with("javascript:")));
    }

    #[test]
    fn anchor_without_text_gets_empty_string() {
        let html = r#"<html><body><a href="https://example.com/rust"><img src="x.png"></a></body></html>"#;
        let (_, links) = extract_record(PAGE_URL, "rust", html);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "");
        assert_eq!(links[0].reason, MatchReason::UrlContainsQuery);
    }

    #[test]
    fn irrelevant_page_yields_no_links() {
        let html = r#"<html><head><title>Plain</title></head>
            <body><a href="https://a.example/one">one</a></body></html>"#;
        let (title, links) = extract_record(PAGE_URL, "kubernetes", html);
        assert_eq!(title.as_deref(), Some("Plain"));
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn unreachable_url_yields_failure_record() {
        let config = ReconConfig {
            timeout_seconds: 2,
            retry_attempts: 1,
            ..Default::default()
        };
        let client = crate::http::build_client(&config).expect("client");
        let record = analyze_page(&client, "http://127.0.0.1:1/page", "rust", &config).await;
        assert_eq!(record.url, "http://127.0.0.1:1/page");
        assert!(record.title.is_none());
        assert!(record.links.is_empty());
    }

    // ── Fixture-based tests ─────────────────────────────────────────────

    const FIXTURE_ARTICLE: &str = include_str!("../../test-data/article.html");

    #[test]
    fn fixture_article_title_and_matches() {
        let (title, links) = extract_record("https://blog.example.org/rust-async", "rust", FIXTURE_ARTICLE);
        assert_eq!(title.as_deref(), Some("Async Rust in Practice"));
        assert!(!links.is_empty());
        // Every recorded match carries a normalised absolute URL.
        for link in &links {
            assert!(link.url.starts_with("http"), "not absolute: {}", link.url);
        }
    }

    #[test]
    fn fixture_article_unique_urls() {
        let (_, links) = extract_record("https://blog.example.org/rust-async", "rust", FIXTURE_ARTICLE);
        let mut seen = std::collections::HashSet::new();
        for link in &links {
            assert!(seen.insert(&link.url), "duplicate: {}", link.url);
        }
    }
}
