use crate::artifacts::core::error::ChangeError;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Prefix of the scratch file holding the prior version of a file
pub const PRIOR_PREFIX: &str = "prev_";
/// Prefix of the scratch file holding the index copy of a staged file
pub const STAGED_PREFIX: &str = "staged_";

/// Directory where comparison sides are materialized
///
/// File names are deterministic (`<prefix><file name>`), so a new request for
/// the same file overwrites the previous scratch copy.
#[derive(Debug, new)]
pub struct Scratch {
    path: Box<Path>,
}

impl Scratch {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_path(&self, prefix: &str, file_name: &str) -> PathBuf {
        self.path.join(format!("{prefix}{file_name}"))
    }

    pub async fn write(
        &self,
        prefix: &str,
        file_name: &str,
        content: &[u8],
    ) -> Result<PathBuf, ChangeError> {
        let file_path = self.file_path(prefix, file_name);

        tokio::fs::create_dir_all(&self.path)
            .await
            .map_err(|source| ChangeError::Scratch {
                path: self.path.to_path_buf(),
                source,
            })?;
        tokio::fs::write(&file_path, content)
            .await
            .map_err(|source| ChangeError::Scratch {
                path: file_path.clone(),
                source,
            })?;

        Ok(file_path)
    }
}
