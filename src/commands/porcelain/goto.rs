use crate::areas::repository::Repository;
use crate::artifacts::navigation::{Location, Navigator, PrintNavigator};
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Navigate to a changed file, at its first changed line unless `line` is given
    pub async fn goto(&self, path: &Path, staged: bool, line: Option<u32>) -> anyhow::Result<()> {
        let change = self.lookup_change(path, staged).await?;
        let line = line.unwrap_or_else(|| change.first_line());
        let location = Location::line_start(change.file_info().absolute_path(), line);

        let mut writer = self.writer();
        PrintNavigator::new(&mut **writer).open_at(&location)?;
        writer.flush()?;

        Ok(())
    }
}
