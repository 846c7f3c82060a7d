//! User-facing commands
//!
//! Each command is an `impl Repository` block writing to the repository's
//! writer; together they stand in for the host editor.
//!
//! ## Commands
//!
//! - `list`: Print changed files and their changed line ranges
//! - `show`: Print the version a changed file is compared against
//! - `compare`: Materialize a before/after comparison of a changed file
//! - `goto`: Print the location of a changed region
//! - `watch`: Reprint the hierarchy on every (debounced) refresh trigger

pub mod compare;
pub mod goto;
pub mod list;
pub mod show;
pub mod watch;
