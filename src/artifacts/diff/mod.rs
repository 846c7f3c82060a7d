//! Zero-context unified diff parsing
//!
//! - `hunk_header`: grammar for `@@ -<n>[,<m>] +<n>[,<m>] @@` lines
//! - `line_range`: changed line block in the new version of a file
//! - `parser`: splits `git diff --unified=0` output into per-file records
//!
//! With zero context lines, the new-side count of every hunk header bounds
//! the changed region exactly, which is what the line ranges rely on.

pub mod hunk_header;
pub mod line_range;
pub mod parser;
