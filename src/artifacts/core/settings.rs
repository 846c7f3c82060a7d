use crate::areas::git::Git;
use crate::artifacts::core::error::ChangeError;
use crate::artifacts::snapshot::revision::Revision;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_GIT_PROGRAM: &str = "git";
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Runtime configuration of a repository session
///
/// The binary fills it from command-line flags, which fall back to
/// `CHANGES_*` environment variables; library users start from
/// [`Settings::for_root`] and override what they need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    root: PathBuf,
    git_program: String,
    base_revision: Revision,
    scratch_dir: PathBuf,
    debounce: Duration,
}

impl Settings {
    /// Defaults for a workspace rooted at `root`, which must be an existing directory
    pub fn for_root(root: &Path) -> Result<Self, ChangeError> {
        Ok(Settings {
            root: resolve_root(root)?,
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            base_revision: Revision::default(),
            scratch_dir: std::env::temp_dir(),
            debounce: DEFAULT_DEBOUNCE,
        })
    }

    /// Defaults for the working copy that contains `dir`
    ///
    /// Git reports changed paths relative to the top-level directory, so that
    /// directory becomes the root even when `dir` is a subdirectory. Outside
    /// of a working copy `dir` stays the root and the diff failures surface
    /// on refresh.
    pub async fn discover(dir: &Path, git_program: &str) -> Result<Self, ChangeError> {
        let settings = Settings::for_root(dir)?.with_git_program(git_program);
        let git = Git::new(
            git_program.to_string(),
            settings.root().to_path_buf().into_boxed_path(),
        );

        match git.toplevel().await {
            Ok(toplevel) if !toplevel.as_os_str().is_empty() => Ok(Settings {
                root: resolve_root(&toplevel)?,
                ..settings
            }),
            Ok(_) => Ok(settings),
            Err(error) => {
                tracing::debug!(%error, root = %settings.root().display(), "no enclosing working copy");
                Ok(settings)
            }
        }
    }

    pub fn with_git_program(mut self, git_program: impl Into<String>) -> Self {
        self.git_program = git_program.into();
        self
    }

    pub fn with_base_revision(mut self, base_revision: Revision) -> Self {
        self.base_revision = base_revision;
        self
    }

    pub fn with_scratch_dir(mut self, scratch_dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = scratch_dir.into();
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn git_program(&self) -> &str {
        &self.git_program
    }

    pub fn base_revision(&self) -> &Revision {
        &self.base_revision
    }

    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }
}

fn resolve_root(root: &Path) -> Result<PathBuf, ChangeError> {
    match root.canonicalize() {
        Ok(path) if path.is_dir() => Ok(path),
        _ => Err(ChangeError::NoWorkspace {
            path: root.to_path_buf(),
        }),
    }
}
