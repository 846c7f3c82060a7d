//! Data structures and algorithms of the change explorer
//!
//! - `changes`: change records, reconciliation and collection
//! - `core`: shared utilities (debounce, errors, pager, settings)
//! - `diff`: unified diff hunk parsing
//! - `model`: file → line range projection with change notification
//! - `navigation`: requests to the host editor
//! - `snapshot`: prior-content reconstruction for comparisons

pub mod changes;
pub mod core;
pub mod diff;
pub mod model;
pub mod navigation;
pub mod snapshot;
