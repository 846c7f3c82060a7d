use crate::artifacts::changes::file_info::FileInfo;
use crate::artifacts::snapshot::revision::Revision;

/// Git object name (`<revision>:<path>` or `:<path>`) of a historical file copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectRef {
    /// The copy currently recorded in the index
    Index { path: String },
    /// The copy at a given revision
    Revision { revision: Revision, path: String },
}

impl ObjectRef {
    pub fn index(file_info: &FileInfo) -> Self {
        ObjectRef::Index {
            path: file_info.git_path(),
        }
    }

    /// Base a file's current content should be compared against
    ///
    /// Files that also have staged changes, or callers explicitly asking for
    /// it, compare against the index; everything else against `base`.
    pub fn prior(file_info: &FileInfo, want_staged_base: bool, base: &Revision) -> Self {
        if file_info.has_staged_version() || want_staged_base {
            Self::index(file_info)
        } else {
            ObjectRef::Revision {
                revision: base.clone(),
                path: file_info.git_path(),
            }
        }
    }
}

impl std::fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectRef::Index { path } => write!(f, ":{path}"),
            ObjectRef::Revision { revision, path } => write!(f, "{revision}:{path}"),
        }
    }
}
