//! Requests to the host editor surface
//!
//! The engine only computes where to go; opening files and comparison panes
//! is the host's job, expressed through the [`Navigator`] trait.

use crate::artifacts::snapshot::reconstructor::Comparison;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Caret target: a file and a zero-based `(row, column)` position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: PathBuf,
    row: u32,
    column: u32,
}

impl Location {
    /// Start of a 1-based line, i.e. caret at `(line - 1, 0)`
    pub fn line_start(path: &Path, line: u32) -> Self {
        Location {
            path: path.to_path_buf(),
            row: line.saturating_sub(1),
            column: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn row(&self) -> u32 {
        self.row
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

/// `path:line:column`, 1-based as editors and compilers print it
impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.path.display(),
            self.row + 1,
            self.column + 1
        )
    }
}

pub trait Navigator {
    fn open_at(&mut self, location: &Location) -> anyhow::Result<()>;

    fn open_comparison(&mut self, comparison: &Comparison, location: &Location)
    -> anyhow::Result<()>;
}

/// Navigator for terminals: prints each request as one line
pub struct PrintNavigator<'w> {
    writer: &'w mut dyn Write,
}

impl<'w> PrintNavigator<'w> {
    pub fn new(writer: &'w mut dyn Write) -> Self {
        PrintNavigator { writer }
    }
}

impl Navigator for PrintNavigator<'_> {
    fn open_at(&mut self, location: &Location) -> anyhow::Result<()> {
        writeln!(self.writer, "open {location}")?;
        Ok(())
    }

    fn open_comparison(
        &mut self,
        comparison: &Comparison,
        location: &Location,
    ) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", comparison.title())?;
        writeln!(self.writer, "--- {}", comparison.left().display())?;
        writeln!(self.writer, "+++ {}", comparison.right().display())?;
        writeln!(
            self.writer,
            "at {}:{}",
            location.row() + 1,
            location.column() + 1
        )?;
        Ok(())
    }
}
