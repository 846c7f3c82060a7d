use crate::areas::git::DiffMode;
use crate::areas::repository::Repository;
use crate::artifacts::changes::file_change::{ChangeSet, FileChange};
use crate::artifacts::changes::reconcile::reconcile;
use crate::artifacts::core::error::ChangeError;
use crate::artifacts::diff::parser;
use derive_new::new;

/// One diff side that could not be computed
#[derive(Debug, new)]
pub struct RefreshFailure {
    mode: DiffMode,
    error: ChangeError,
}

impl RefreshFailure {
    pub fn mode(&self) -> DiffMode {
        self.mode
    }

    pub fn error(&self) -> &ChangeError {
        &self.error
    }
}

impl std::fmt::Display for RefreshFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to get {} changes: {}", self.mode, self.error)
    }
}

/// Result of one refresh: the (possibly partial) change set and the failed sides
#[derive(Debug, Default)]
pub struct RefreshReport {
    change_set: ChangeSet,
    failures: Vec<RefreshFailure>,
}

impl RefreshReport {
    pub fn change_set(&self) -> &ChangeSet {
        &self.change_set
    }

    pub fn failures(&self) -> &[RefreshFailure] {
        &self.failures
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_parts(self) -> (ChangeSet, Vec<RefreshFailure>) {
        (self.change_set, self.failures)
    }
}

#[derive(new)]
pub struct Collector<'r> {
    repository: &'r Repository,
}

impl<'r> Collector<'r> {
    /// Run both diffs concurrently, then parse and reconcile them
    ///
    /// A failed side contributes no records; the other side is still reported.
    pub async fn collect(&self) -> RefreshReport {
        let git = self.repository.git();
        let (staged, unstaged) = tokio::join!(
            git.diff(DiffMode::IndexVsHead),
            git.diff(DiffMode::WorkingVsIndex)
        );

        let mut failures = Vec::new();
        let staged = self.parse_side(DiffMode::IndexVsHead, staged, &mut failures);
        let unstaged = self.parse_side(DiffMode::WorkingVsIndex, unstaged, &mut failures);

        RefreshReport {
            change_set: reconcile(staged, unstaged),
            failures,
        }
    }

    fn parse_side(
        &self,
        mode: DiffMode,
        raw_diff: Result<String, ChangeError>,
        failures: &mut Vec<RefreshFailure>,
    ) -> Vec<FileChange> {
        match raw_diff {
            Ok(raw_diff) => parser::parse(&raw_diff, self.repository.path(), mode.is_staged()),
            Err(error) => {
                tracing::warn!(%mode, %error, "diff failed, continuing without it");
                failures.push(RefreshFailure::new(mode, error));
                Vec::new()
            }
        }
    }
}
