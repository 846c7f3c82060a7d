//! Repository-level components
//!
//! - `git`: external git process invocation (diff and show)
//! - `refresher`: debounced, recency-ordered refreshes of the change model
//! - `repository`: the tracked working copy and its settings
//! - `scratch`: scratch directory for comparison files

pub mod git;
pub mod refresher;
pub mod repository;
pub mod scratch;
