use crate::artifacts::changes::file_change::FileChange;
use crate::artifacts::changes::file_info::FileInfo;
use crate::artifacts::diff::hunk_header::HunkHeader;
use std::path::Path;

const FILE_BOUNDARY: &str = "diff --git ";
const OLD_PATH_MARKER: &str = "--- a/";
const HUNK_MARKER: &str = "@@ ";

/// Parse `git diff --unified=0` output into per-file change records
///
/// Blocks without an `--- a/` line (new files, pure renames, binary files)
/// are skipped, and so are hunk headers that do not follow the
/// `@@ -<n>[,<m>] +<n>[,<m>] @@` grammar; neither is an error.
pub fn parse(raw_diff: &str, root_path: &Path, is_staged: bool) -> Vec<FileChange> {
    split_file_blocks(raw_diff)
        .iter()
        .filter_map(|block| parse_file_block(block, root_path, is_staged))
        .collect()
}

/// Group lines into one block per file, dropping the boundary lines themselves
/// and anything before the first boundary (git warnings, for instance)
fn split_file_blocks(raw_diff: &str) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();

    for line in raw_diff.lines() {
        if line.starts_with(FILE_BOUNDARY) {
            blocks.push(Vec::new());
        } else if let Some(block) = blocks.last_mut() {
            block.push(line.strip_suffix('\r').unwrap_or(line));
        }
    }

    blocks
}

fn parse_file_block(block: &[&str], root_path: &Path, is_staged: bool) -> Option<FileChange> {
    // only the extended header may carry the old path; a removed content line
    // reading "-- a/..." would otherwise look like one
    let relative_path = block
        .iter()
        .take_while(|line| !line.starts_with(HUNK_MARKER))
        .find_map(|line| line.strip_prefix(OLD_PATH_MARKER))
        .map(|path| path.strip_suffix('\t').unwrap_or(path));

    let Some(relative_path) = relative_path else {
        tracing::debug!(
            header = block.first().copied().unwrap_or_default(),
            "skipping diff block without an old path"
        );
        return None;
    };

    let changes = block
        .iter()
        .filter(|line| line.starts_with(HUNK_MARKER))
        .filter_map(|line| match HunkHeader::parse(line) {
            Ok(header) => Some(header.new_range()),
            Err(error) => {
                tracing::debug!(%error, line, "skipping unparsable hunk header");
                None
            }
        })
        .collect();

    Some(FileChange::new(
        FileInfo::new(root_path, relative_path, is_staged),
        changes,
    ))
}
