use std::path::{Path, PathBuf};

/// Identity of one change record: the same file may own a staged record and
/// an unstaged record at the same time
pub type FileKey<'f> = (&'f Path, bool);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileInfo {
    root_path: PathBuf,
    relative_path: PathBuf,
    absolute_path: PathBuf,
    file_name: String,
    is_staged: bool,
    has_staged_version: bool,
}

impl FileInfo {
    pub fn new(root_path: &Path, relative_path: impl Into<PathBuf>, is_staged: bool) -> Self {
        let relative_path = relative_path.into();
        let absolute_path = root_path.join(&relative_path);
        let file_name = absolute_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        FileInfo {
            root_path: root_path.to_path_buf(),
            relative_path,
            absolute_path,
            file_name,
            is_staged,
            has_staged_version: false,
        }
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn is_staged(&self) -> bool {
        self.is_staged
    }

    pub fn has_staged_version(&self) -> bool {
        self.has_staged_version
    }

    pub fn key(&self) -> FileKey<'_> {
        (&self.absolute_path, self.is_staged)
    }

    /// Repository-relative path in git's notation (`./dir/file`, forward slashes)
    pub fn git_path(&self) -> String {
        format!(
            "./{}",
            self.relative_path.to_string_lossy().replace('\\', "/")
        )
    }

    pub(crate) fn with_staged_version(mut self, has_staged_version: bool) -> Self {
        self.has_staged_version = has_staged_version;
        self
    }
}
