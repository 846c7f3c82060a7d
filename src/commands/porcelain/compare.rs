use crate::areas::repository::Repository;
use crate::artifacts::changes::file_info::FileInfo;
use crate::artifacts::core::error::ChangeError;
use crate::artifacts::navigation::{Location, Navigator, PrintNavigator};
use crate::artifacts::snapshot::reconstructor::Comparison;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

impl Repository {
    pub async fn compare(&self, path: &Path, staged: bool, line: Option<u32>) -> anyhow::Result<()> {
        let change = self.lookup_change(path, staged).await?;
        let line = line.unwrap_or_else(|| change.first_line());
        let comparison = self.snapshots().compare(change.file_info()).await;

        let mut writer = self.writer();
        let mut navigator = PrintNavigator::new(&mut **writer);
        open_comparison(&mut navigator, change.file_info(), comparison, line)?;
        writer.flush()?;

        Ok(())
    }
}

/// Show a comparison, or just open the file at `line` when it could not be built
pub fn open_comparison(
    navigator: &mut dyn Navigator,
    file_info: &FileInfo,
    comparison: Result<Comparison, ChangeError>,
    line: u32,
) -> anyhow::Result<()> {
    let location = Location::line_start(file_info.absolute_path(), line);

    match comparison {
        Ok(comparison) => navigator.open_comparison(&comparison, &location),
        Err(error) => {
            tracing::warn!(%error, file = %file_info.absolute_path().display(), "comparison failed, opening file instead");
            eprintln!(
                "{} File {} cannot be compared due to an error: {}",
                "warning:".yellow().bold(),
                file_info.file_name(),
                error
            );
            navigator.open_at(&location)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct RecordingNavigator {
        opened: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn open_at(&mut self, location: &Location) -> anyhow::Result<()> {
            self.opened.push(format!("at {location}"));
            Ok(())
        }

        fn open_comparison(
            &mut self,
            comparison: &Comparison,
            location: &Location,
        ) -> anyhow::Result<()> {
            self.opened
                .push(format!("compare {} at {location}", comparison.title()));
            Ok(())
        }
    }

    #[test]
    fn failed_comparison_falls_back_to_navigation() {
        let info = FileInfo::new(Path::new("/repo"), "src/a.rs", false);
        let mut navigator = RecordingNavigator::default();

        open_comparison(
            &mut navigator,
            &info,
            Err(ChangeError::ContentRetrieval {
                object: "HEAD~1:./src/a.rs".to_string(),
                reason: "fatal: invalid object name 'HEAD~1'.".to_string(),
            }),
            7,
        )
        .unwrap();

        assert_eq!(navigator.opened, vec!["at /repo/src/a.rs:7:1".to_string()]);
    }
}
