//! Relevance classification of page anchors against the query.
//!
//! Applies a tiered match policy: exact substring checks first (cheap and
//! unambiguous), then a fuzzy partial-ratio comparison of the anchor text.
//! Only the first satisfied tier is recorded.

use crate::types::MatchReason;
use similar::{DiffOp, TextDiff};

/// Minimum partial-ratio score (0–100) for a fuzzy text match.
pub const FUZZY_THRESHOLD: u32 = 60;

/// Classify an anchor as relevant to `query`, or `None` when it is not.
///
/// Tiers, evaluated in order with first match winning:
///
/// 1. case-folded `query` is a substring of the anchor URL
/// 2. case-folded `query` is a substring of the anchor text
/// 3. [`partial_ratio`] of query and anchor text is at least
///    [`FUZZY_THRESHOLD`]
pub fn classify(query: &str, anchor_text: &str, anchor_url: &str) -> Option<MatchReason> {
    let query = query.to_lowercase();
    if anchor_url.to_lowercase().contains(&query) {
        return Some(MatchReason::UrlContainsQuery);
    }
    let text = anchor_text.to_lowercase();
    if text.contains(&query) {
        return Some(MatchReason::TextContainsQuery);
    }
    if partial_ratio(&query, &text) >= FUZZY_THRESHOLD {
        return Some(MatchReason::FuzzyTextMatch);
    }
    None
}

/// Substring-aware similarity score between two strings, 0–100.
///
/// The shorter string is compared against windows of the longer one, so a
/// string contained in a larger body of text still scores 100. Candidate
/// window alignments come from the equal runs of a char-level diff of the
/// full strings, the classic partial-ratio construction.
pub fn partial_ratio(a: &str, b: &str) -> u32 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let longer_chars: Vec<char> = longer.chars().collect();
    let window = shorter.chars().count();
    if window == longer_chars.len() {
        return to_percent(TextDiff::from_chars(shorter, longer).ratio());
    }

    let max_start = longer_chars.len() - window;
    let diff = TextDiff::from_chars(shorter, longer);
    let mut starts = vec![0usize];
    for op in diff.ops() {
        if let DiffOp::Equal {
            old_index,
            new_index,
            ..
        } = op
        {
            starts.push(new_index.saturating_sub(*old_index).min(max_start));
        }
    }
    starts.sort_unstable();
    starts.dedup();

    let mut best = 0.0f32;
    for &start in &starts {
        let slice: String = longer_chars[start..start + window].iter().collect();
        let ratio = TextDiff::from_chars(shorter, slice.as_str()).ratio();
        if ratio > best {
            best = ratio;
        }
    }
    to_percent(best)
}

fn to_percent(ratio: f32) -> u32 {
    (ratio * 100.0).round() as u32
}
