//! Run configuration with sensible defaults.
//!
//! [`ReconConfig`] controls which backends are queried, the URL budget,
//! worker-pool size, timeouts, and request behaviour.

use crate::error::ReconError;
use crate::types::SearchBackend;

/// Default cap on total distinct candidate URLs collected per run.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Default number of concurrent page-analysis workers.
pub const DEFAULT_WORKERS: usize = 5;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Default number of attempts for idempotent GET requests.
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;

/// Configuration for a reconnaissance run.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct ReconConfig {
    /// Which backends to harvest URLs from, drained in order.
    pub backends: Vec<SearchBackend>,
    /// Cap on total distinct candidate URLs collected per run.
    pub max_results: usize,
    /// Size of the concurrent page-analysis worker pool.
    pub workers: usize,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Total attempts per GET request on transient transport failures.
    pub retry_attempts: u32,
    /// Optional proxy URL (`http://`, `https://`, or `socks5://`).
    pub proxy: Option<String>,
    /// Custom User-Agent string. If `None`, a random entry from the
    /// built-in browser User-Agent pool is chosen per session.
    pub user_agent: Option<String>,
}

impl Default for ReconConfig {
    fn default() -> Self {
        Self {
            backends: SearchBackend::all().to_vec(),
            max_results: DEFAULT_MAX_RESULTS,
            workers: DEFAULT_WORKERS,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            proxy: None,
            user_agent: None,
        }
    }
}

impl ReconConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_results` must be greater than 0
    /// - `workers` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - `backends` must not be empty
    pub fn validate(&self) -> Result<(), ReconError> {
        if self.max_results == 0 {
            return Err(ReconError::Config(
                "max_results must be greater than 0".into(),
            ));
        }
        if self.workers == 0 {
            return Err(ReconError::Config("workers must be greater than 0".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(ReconError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.backends.is_empty() {
            return Err(ReconError::Config(
                "at least one backend must be enabled".into(),
            ));
        }
        Ok(())
    }
}
