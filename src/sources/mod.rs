//! Search backend implementations.
//!
//! Each module provides a struct implementing [`crate::source::ResultSource`]
//! that harvests candidate URLs from a specific search engine.

pub mod bing;
pub mod duckduckgo;

pub use bing::BingSource;
pub use duckduckgo::DuckDuckGoSource;
