use crate::areas::repository::Repository;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Print the version a changed file is compared against
    ///
    /// `staged` picks the staged record of the file; `cached` asks for the
    /// index copy as base even when the file has no staged version.
    pub async fn show(&self, path: &Path, staged: bool, cached: bool) -> anyhow::Result<()> {
        let change = self.lookup_change(path, staged).await?;

        let content = self
            .snapshots()
            .prior_content(change.file_info(), cached)
            .await
            .with_context(|| {
                format!(
                    "cannot retrieve the previous version of {}",
                    change.file_info().file_name()
                )
            })?;

        let mut writer = self.writer();
        writer.write_all(&content)?;
        writer.flush()?;

        Ok(())
    }
}
