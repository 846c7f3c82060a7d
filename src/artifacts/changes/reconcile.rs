use crate::artifacts::changes::file_change::{ChangeSet, FileChange};
use std::collections::HashSet;
use std::path::PathBuf;

/// Merge the staged and unstaged parse results into one ordered change set
///
/// Each side is sorted by file name, case-insensitively and stably. Staged
/// records come first. An unstaged record is marked as having a staged version
/// when a staged record exists for the same absolute path; nothing else is
/// merged, so a file may appear once on each side.
pub fn reconcile(mut staged: Vec<FileChange>, mut unstaged: Vec<FileChange>) -> ChangeSet {
    sort_by_file_name(&mut staged);
    sort_by_file_name(&mut unstaged);

    let staged_paths = staged
        .iter()
        .map(|change| change.file_info().absolute_path().to_path_buf())
        .collect::<HashSet<PathBuf>>();

    let unstaged = unstaged.into_iter().map(|change| {
        let has_staged_version = staged_paths.contains(change.file_info().absolute_path());
        change.with_staged_version(has_staged_version)
    });

    ChangeSet::from_records(staged.into_iter().chain(unstaged).collect())
}

fn sort_by_file_name(changes: &mut [FileChange]) {
    changes.sort_by_key(|change| change.file_info().file_name().to_lowercase());
}
