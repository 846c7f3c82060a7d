use crate::areas::git::Git;
use crate::areas::scratch::Scratch;
use crate::artifacts::changes::collector::Collector;
use crate::artifacts::changes::file_change::FileChange;
use crate::artifacts::core::settings::Settings;
use crate::artifacts::snapshot::reconstructor::Reconstructor;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A git working copy whose uncommitted changes are being tracked
///
/// Shared between the command layer and background refresh tasks, hence the
/// writer sits behind a mutex rather than a `RefCell`.
pub struct Repository {
    settings: Settings,
    git: Git,
    scratch: Scratch,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Repository {
    pub fn new(settings: Settings, writer: Box<dyn Write + Send>) -> Self {
        let git = Git::new(
            settings.git_program().to_string(),
            settings.root().to_path_buf().into_boxed_path(),
        );
        let scratch = Scratch::new(settings.scratch_dir().to_path_buf().into_boxed_path());

        Repository {
            settings,
            git,
            scratch,
            writer: Mutex::new(writer),
        }
    }

    pub fn path(&self) -> &Path {
        self.settings.root()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn git(&self) -> &Git {
        &self.git
    }

    pub fn scratch(&self) -> &Scratch {
        &self.scratch
    }

    pub fn writer(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn changes(&self) -> Collector<'_> {
        Collector::new(self)
    }

    pub fn snapshots(&self) -> Reconstructor<'_> {
        Reconstructor::new(self)
    }

    /// Fresh change record for a user-supplied path (absolute or root-relative)
    pub async fn lookup_change(&self, path: &Path, staged: bool) -> anyhow::Result<FileChange> {
        let relative_path = self.relative_path(path);
        let report = self.changes().collect().await;

        for failure in report.failures() {
            tracing::warn!(%failure, "diff failed during lookup");
        }

        report
            .change_set()
            .find(&relative_path, staged)
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "{} has no {} changes",
                    relative_path.display(),
                    if staged { "staged" } else { "unstaged" }
                )
            })
    }

    fn relative_path(&self, path: &Path) -> PathBuf {
        let path = path.strip_prefix("./").unwrap_or(path);
        if path.is_absolute() {
            let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
            if let Ok(relative) = canonical.strip_prefix(self.path()) {
                return relative.to_path_buf();
            }
        }

        path.to_path_buf()
    }
}
