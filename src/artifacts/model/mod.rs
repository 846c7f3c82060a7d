//! Two-level projection (file → line range) of the current change set
//!
//! The presentation layer reads the hierarchy through [`ChangeModel`] and
//! subscribes to [`ChangeModel::on_change`] to learn when it is stale.

pub mod signal;

use crate::artifacts::changes::file_change::ChangeSet;
use crate::artifacts::changes::file_info::FileInfo;
use crate::artifacts::diff::line_range::LineRange;
use signal::Signal;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
pub struct ChangeModel {
    current: RwLock<Arc<ChangeSet>>,
    changed: Signal<ChangeSet>,
}

impl ChangeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The change set as of the last `replace`, unaffected by later ones
    pub fn snapshot(&self) -> Arc<ChangeSet> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Top level: one entry per change record, staged records first
    pub fn list_files(&self) -> Vec<FileInfo> {
        self.snapshot()
            .iter()
            .map(|change| change.file_info().clone())
            .collect()
    }

    /// Second level, matched on `(absolute_path, is_staged)` rather than on
    /// the display name, which two files may share
    pub fn list_ranges(&self, file_info: &FileInfo) -> Vec<LineRange> {
        self.snapshot()
            .get(file_info.key())
            .map(|change| change.changes().to_vec())
            .unwrap_or_default()
    }

    /// Swap in a new change set wholesale and notify subscribers
    pub fn replace(&self, change_set: ChangeSet) {
        let change_set = Arc::new(change_set);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = change_set.clone();

        self.changed.fire(&change_set);
    }

    pub fn on_change(&self) -> &Signal<ChangeSet> {
        &self.changed
    }
}
