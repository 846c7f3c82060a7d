use crate::areas::repository::Repository;
use crate::areas::scratch::{PRIOR_PREFIX, STAGED_PREFIX};
use crate::artifacts::changes::file_info::FileInfo;
use crate::artifacts::core::error::ChangeError;
use crate::artifacts::snapshot::object_ref::ObjectRef;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Two files to show side by side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    left: PathBuf,
    right: PathBuf,
    title: String,
}

impl Comparison {
    pub fn left(&self) -> &Path {
        &self.left
    }

    pub fn right(&self) -> &Path {
        &self.right
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Retrieves historical file content through `git show`
///
/// Nothing is cached: content can change between refreshes and a comparison
/// must reflect what git holds right now.
#[derive(new)]
pub struct Reconstructor<'r> {
    repository: &'r Repository,
}

impl<'r> Reconstructor<'r> {
    pub async fn prior_content(
        &self,
        file_info: &FileInfo,
        want_staged_base: bool,
    ) -> Result<Vec<u8>, ChangeError> {
        let object = ObjectRef::prior(
            file_info,
            want_staged_base,
            self.repository.settings().base_revision(),
        );

        self.retrieve(&object).await
    }

    /// Index copy of a file, i.e. the right-hand side for staged records
    pub async fn staged_content(&self, file_info: &FileInfo) -> Result<Vec<u8>, ChangeError> {
        self.retrieve(&ObjectRef::index(file_info)).await
    }

    /// Materialize both sides of a comparison as files
    ///
    /// The left side is always a scratch copy of the prior content. For staged
    /// records the right side is a scratch copy of the index, since the working
    /// file may already differ from what was staged; otherwise it is the
    /// working file itself.
    pub async fn compare(&self, file_info: &FileInfo) -> Result<Comparison, ChangeError> {
        let scratch = self.repository.scratch();
        let file_name = file_info.file_name();

        let prior = self.prior_content(file_info, false).await?;
        let right = if file_info.is_staged() {
            let staged = self.staged_content(file_info).await?;
            scratch.write(STAGED_PREFIX, file_name, &staged).await?
        } else {
            file_info.absolute_path().to_path_buf()
        };
        let left = scratch.write(PRIOR_PREFIX, file_name, &prior).await?;

        Ok(Comparison {
            left,
            right,
            title: format!("Diff View: {file_name}"),
        })
    }

    async fn retrieve(&self, object: &ObjectRef) -> Result<Vec<u8>, ChangeError> {
        let object = object.to_string();

        self.repository
            .git()
            .show(&object)
            .await
            .map_err(|error| match error {
                ChangeError::ProcessExit { stderr, .. } => ChangeError::ContentRetrieval {
                    object,
                    reason: stderr,
                },
                other => other,
            })
    }
}
