//! Uncommitted-change explorer for git working copies
//!
//! Runs `git diff --unified=0` for staged and unstaged changes, turns the
//! hunks into per-file line ranges, and exposes them as a file → line range
//! hierarchy. Prior versions of a file can be materialized for side-by-side
//! comparison.

pub mod areas;
pub mod artifacts;
pub mod commands;
