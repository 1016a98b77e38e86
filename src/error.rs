//! Error types for the linkhound crate.
//!
//! All errors carry stable string messages suitable for display to users.
//! Failures at or below the page-analysis level never surface here — they
//! degrade into failure records instead.

/// Errors that can occur during a reconnaissance run.
#[derive(Debug, thiserror::Error)]
pub enum ReconError {
    /// No backend produced a single candidate URL — nothing to analyse.
    #[error("no candidate URLs collected from any backend")]
    NoUrls,

    /// An HTTP request failed after exhausting transport-level retries.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse an HTML response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid run configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Failed to write the result collection to disk.
    #[error("export error: {0}")]
    Export(String),
}

/// Convenience type alias for linkhound results.
pub type Result<T> = std::result::Result<T, ReconError>;
