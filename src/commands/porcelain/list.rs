use crate::areas::repository::Repository;
use crate::artifacts::changes::collector::RefreshFailure;
use crate::artifacts::changes::file_change::{ChangeSet, FileChange};
use colored::Colorize;
use std::io::Write;

const FILE_INDENT: usize = 8;
const RANGE_INDENT: usize = 16;

impl Repository {
    pub async fn list(&self) -> anyhow::Result<()> {
        let report = self.changes().collect().await;

        report_failures(report.failures());
        write_change_set(&mut **self.writer(), report.change_set())?;

        Ok(())
    }
}

/// Print diff failures as user-facing warnings on stderr
pub fn report_failures(failures: &[RefreshFailure]) {
    for failure in failures {
        eprintln!("{} {}", "warning:".yellow().bold(), failure);
    }
}

/// Render the file → line range hierarchy, staged section first
pub fn write_change_set(writer: &mut dyn Write, change_set: &ChangeSet) -> std::io::Result<()> {
    if change_set.is_empty() {
        writeln!(writer, "No uncommitted changes")?;
        return writer.flush();
    }

    let staged = change_set.staged().collect::<Vec<_>>();
    let unstaged = change_set.unstaged().collect::<Vec<_>>();

    if !staged.is_empty() {
        writeln!(writer, "Changes staged for commit:")?;
        for change in &staged {
            write_file_change(writer, change)?;
        }
    }

    if !unstaged.is_empty() {
        if !staged.is_empty() {
            writeln!(writer)?;
        }
        writeln!(writer, "Changes not staged for commit:")?;
        for change in &unstaged {
            write_file_change(writer, change)?;
        }
    }

    writer.flush()
}

fn write_file_change(writer: &mut dyn Write, change: &FileChange) -> std::io::Result<()> {
    let info = change.file_info();
    let path = info.relative_path().display().to_string();
    let path = if info.is_staged() {
        path.green()
    } else {
        path.red()
    };
    let note = if info.has_staged_version() {
        " (also staged)"
    } else {
        ""
    };

    writeln!(writer, "{:>width$}{}{}", "", path, note, width = FILE_INDENT)?;
    for range in change.changes() {
        writeln!(writer, "{:>width$}{}", "", range, width = RANGE_INDENT)?;
    }

    Ok(())
}
