//! Shared HTTP client with User-Agent rotation and bounded GET retries.
//!
//! Provides a configured [`reqwest::Client`] with browser-like headers,
//! cookie support, optional proxying, and rotating User-Agent strings,
//! plus a retry helper for idempotent GET requests.

use crate::config::ReconConfig;
use crate::error::{ReconError, Result};
use rand::seq::SliceRandom;
use std::time::Duration;

/// Realistic browser User-Agent strings, one chosen at random per session.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Build a [`reqwest::Client`] shared by every request in a run.
///
/// The client has:
/// - Cookie store enabled (some engines set consent cookies)
/// - Timeout from config, applied per request
/// - Random User-Agent from the built-in pool (or custom if configured)
/// - Brotli and gzip decompression
/// - Optional HTTP/HTTPS/SOCKS proxy
///
/// The client is cheap to clone; clones share one connection pool and are
/// safe to use from concurrent workers.
///
/// # Errors
///
/// Returns [`ReconError::Http`] if the proxy URL is invalid or the client
/// cannot be constructed.
pub fn build_client(config: &ReconConfig) -> Result<reqwest::Client> {
    let ua = match config.user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    };

    let mut builder = reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10));

    if let Some(ref proxy_url) = config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| ReconError::Http(format!("invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    builder
        .build()
        .map_err(|e| ReconError::Http(format!("failed to build HTTP client: {e}")))
}

/// Select a random User-Agent string from the rotation pool.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // SAFETY: USER_AGENTS is a non-empty const array, choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}

/// Send a GET request and read the body, retrying transient failures.
///
/// Makes up to `attempts` tries (minimum 1). A failure is transient when
/// it is a timeout, a connect error, HTTP 429, or a 5xx status; other HTTP
/// errors (4xx) abort immediately. Retries back off linearly by 250 ms.
///
/// Only pass idempotent GET requests here — the builder is cloned for each
/// attempt.
///
/// # Errors
///
/// Returns [`ReconError::Http`] with the last failure once attempts are
/// exhausted, or immediately on a non-transient error.
pub async fn fetch_text(builder: reqwest::RequestBuilder, attempts: u32) -> Result<String> {
    let attempts = attempts.max(1);
    let mut last_err = String::new();

    for attempt in 1..=attempts {
        let request = match builder.try_clone() {
            Some(cloned) => cloned,
            None => return Err(ReconError::Http("request is not cloneable for retry".into())),
        };

        match request.send().await.and_then(|r| r.error_for_status()) {
            Ok(response) => match response.text().await {
                Ok(body) => return Ok(body),
                Err(err) => last_err = format!("response read failed: {err}"),
            },
            Err(err) => {
                if !is_transient(&err) {
                    return Err(ReconError::Http(format!("request failed: {err}")));
                }
                last_err = format!("request failed: {err}");
            }
        }

        if attempt < attempts {
            tracing::debug!(attempt, error = %last_err, "transient failure, retrying");
            tokio::time::sleep(Duration::from_millis(250 * u64::from(attempt))).await;
        }
    }

    Err(ReconError::Http(last_err))
}

/// Whether a request failure is worth retrying.
fn is_transient(err: &reqwest::Error) -> bool {
    if err.is_timeout() || err.is_connect() {
        return true;
    }
    err.status().is_some_and(|status| {
        status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS
    })
}
