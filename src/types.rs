//! Core types for the reconnaissance pipeline: backends, match records,
//! and analysed-page records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Search backends that linkhound can harvest candidate URLs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchBackend {
    /// DuckDuckGo — most scraper-friendly, queried first.
    DuckDuckGo,
    /// Bing — different index, decent second source.
    Bing,
}

impl SearchBackend {
    /// Returns the human-readable name of this backend.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DuckDuckGo => "DuckDuckGo",
            Self::Bing => "Bing",
        }
    }

    /// Returns all available backend variants, in default query order.
    pub fn all() -> &'static [SearchBackend] {
        &[Self::DuckDuckGo, Self::Bing]
    }
}

impl fmt::Display for SearchBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why an anchor was judged relevant to the query.
///
/// Tiers are evaluated in declaration order; only the first satisfied
/// tier is ever recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchReason {
    /// The case-folded query is a substring of the anchor URL.
    UrlContainsQuery,
    /// The case-folded query is a substring of the anchor text.
    TextContainsQuery,
    /// The anchor text scored at or above the fuzzy similarity threshold.
    FuzzyTextMatch,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::UrlContainsQuery => "url-contains-query",
            Self::TextContainsQuery => "text-contains-query",
            Self::FuzzyTextMatch => "fuzzy-text-match",
        };
        f.write_str(tag)
    }
}

/// One anchor on an analysed page judged relevant to the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkMatch {
    /// Normalised absolute target URL of the anchor.
    pub url: String,
    /// Visible anchor text, whitespace-trimmed. Empty if the anchor has none.
    pub text: String,
    /// Which match tier classified this anchor as relevant.
    pub reason: MatchReason,
}

/// The analysed outcome for one candidate URL, success or failure.
///
/// A missing `title` together with an empty `links` list signals that the
/// page could not be fetched or parsed; the record is still produced so
/// that every candidate URL accounts for exactly one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// The candidate URL this record was produced from.
    pub url: String,
    /// Document title. `None` when the fetch failed or the page has no title.
    pub title: Option<String>,
    /// Relevant links in discovery order, deduplicated by URL within the page.
    pub links: Vec<LinkMatch>,
}

impl PageRecord {
    /// Build the degraded record for a URL whose fetch or parse failed.
    pub fn failed(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            title: None,
            links: Vec::new(),
        }
    }
}
