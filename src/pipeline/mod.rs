//! The reconnaissance pipeline: collect candidate URLs, then fetch and
//! analyse them concurrently.
//!
//! Stages, in data-flow order: backend harvesting into a deduplicated URL
//! set ([`collect`]), bounded-parallel dispatch ([`dispatch`]) of per-page
//! analysis ([`analyze`]), which leans on hyperlink normalisation
//! ([`normalize`]) and the tiered relevance scorer ([`relevance`]).

pub mod analyze;
pub mod collect;
pub mod dispatch;
pub mod normalize;
pub mod relevance;
