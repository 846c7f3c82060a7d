//! Prior-content reconstruction for comparison views
//!
//! - `object_ref`: which historical copy (`<rev>:<path>` or `:<path>`) to read
//! - `reconstructor`: `git show` retrieval and scratch-file materialization
//! - `revision`: validated base revision for unstaged comparisons

pub mod object_ref;
pub mod reconstructor;
pub mod revision;

/// Characters that cannot appear in a revision joined into `<revision>:<path>`
pub const INVALID_REVISION_REGEX: &str = r"^-|[\x00-\x20:\x7f]";
pub const REF_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "@" => "HEAD",
};
