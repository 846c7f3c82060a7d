//! Change records and their reconciliation
//!
//! - `file_info`: identity of a changed file on one side (staged/unstaged)
//! - `file_change`: a file's line ranges, and the ordered `ChangeSet`
//! - `reconcile`: merge of the staged and unstaged parse results
//! - `collector`: runs both diffs and produces a `RefreshReport`

pub mod collector;
pub mod file_change;
pub mod file_info;
pub mod reconcile;
