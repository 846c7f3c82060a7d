use crate::artifacts::changes::file_info::{FileInfo, FileKey};
use crate::artifacts::diff::line_range::LineRange;
use derive_new::new;
use std::path::Path;

/// All changed line ranges of one file on one side (staged or unstaged)
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileChange {
    file_info: FileInfo,
    changes: Vec<LineRange>,
}

impl FileChange {
    pub fn file_info(&self) -> &FileInfo {
        &self.file_info
    }

    pub fn changes(&self) -> &[LineRange] {
        &self.changes
    }

    /// First changed line, used as the default navigation target
    pub fn first_line(&self) -> u32 {
        self.changes
            .first()
            .map(LineRange::start_line)
            .unwrap_or(1)
    }

    pub(crate) fn with_staged_version(self, has_staged_version: bool) -> Self {
        FileChange {
            file_info: self.file_info.with_staged_version(has_staged_version),
            changes: self.changes,
        }
    }
}

/// Ordered result of one refresh: staged records first, then unstaged ones
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    records: Vec<FileChange>,
}

impl ChangeSet {
    pub(crate) fn from_records(records: Vec<FileChange>) -> Self {
        ChangeSet { records }
    }

    pub fn records(&self) -> &[FileChange] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileChange> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn staged(&self) -> impl Iterator<Item = &FileChange> {
        self.records.iter().filter(|record| record.file_info.is_staged())
    }

    pub fn unstaged(&self) -> impl Iterator<Item = &FileChange> {
        self.records
            .iter()
            .filter(|record| !record.file_info.is_staged())
    }

    pub fn get(&self, key: FileKey<'_>) -> Option<&FileChange> {
        self.records
            .iter()
            .find(|record| record.file_info.key() == key)
    }

    /// Lookup by repository-relative path, as typed by a user
    pub fn find(&self, relative_path: &Path, is_staged: bool) -> Option<&FileChange> {
        self.records.iter().find(|record| {
            record.file_info.is_staged() == is_staged
                && record.file_info.relative_path() == relative_path
        })
    }
}

impl<'c> IntoIterator for &'c ChangeSet {
    type Item = &'c FileChange;
    type IntoIter = std::slice::Iter<'c, FileChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
