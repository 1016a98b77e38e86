//! Hyperlink normalisation for candidate URLs and page anchors.
//!
//! Canonicalises raw `href` attribute values into absolute http(s) URLs,
//! rejecting non-navigable schemes and resolving relative references
//! against a base.

use url::Url;

/// Schemes (and the bare-fragment prefix) that can never become a
/// navigable candidate URL.
const REJECTED_PREFIXES: &[&str] = &["javascript:", "mailto:", "tel:", "#", "data:"];

/// Normalise an `href` value into an absolute http(s) URL.
///
/// Pure function. Returns `None` for values that cannot become a
/// candidate URL:
///
/// - empty or whitespace-only input
/// - `javascript:`, `mailto:`, `tel:`, `data:` schemes and bare fragments
/// - relative references when no `base` is supplied
/// - references that fail standard URL resolution against `base`, or
///   resolve to a non-http(s) scheme
///
/// Protocol-relative values (`//host/…`) are rewritten to `https://`.
/// Already-absolute http(s) values are returned unchanged.
pub fn normalize_href(href: &str, base: Option<&str>) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    if REJECTED_PREFIXES.iter().any(|p| href.starts_with(p)) {
        return None;
    }
    if let Some(rest) = href.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_owned());
    }

    let base = Url::parse(base?).ok()?;
    let resolved = base.join(href).ok()?;
    match resolved.scheme() {
        "http" | "https" => Some(resolved.to_string()),
        _ => None,
    }
}
