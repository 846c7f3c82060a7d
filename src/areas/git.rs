//! External git process invocation
//!
//! Every call spawns one `git` process in the repository root and captures
//! its output: exit code 0 yields stdout, anything else yields stderr as the
//! diagnostic of a [`ChangeError::ProcessExit`]. Diff output is decoded as
//! text; file content from `git show` stays raw bytes.

use crate::artifacts::core::error::ChangeError;
use derive_new::new;
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// Which two trees a diff compares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffMode {
    /// Working tree against the index (unstaged changes)
    WorkingVsIndex,
    /// Index against the last commit (staged changes)
    IndexVsHead,
}

impl DiffMode {
    pub fn args(&self) -> &'static [&'static str] {
        // zero context lines: hunk counts must bound the changed region exactly;
        // fixed prefixes override diff.mnemonicPrefix and diff.noprefix
        match self {
            DiffMode::WorkingVsIndex => &[
                "diff",
                "--no-color",
                "--no-ext-diff",
                "--src-prefix=a/",
                "--dst-prefix=b/",
                "--unified=0",
            ],
            DiffMode::IndexVsHead => &[
                "diff",
                "--no-color",
                "--no-ext-diff",
                "--src-prefix=a/",
                "--dst-prefix=b/",
                "--unified=0",
                "--staged",
            ],
        }
    }

    pub fn is_staged(&self) -> bool {
        matches!(self, DiffMode::IndexVsHead)
    }
}

impl std::fmt::Display for DiffMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffMode::WorkingVsIndex => write!(f, "unstaged"),
            DiffMode::IndexVsHead => write!(f, "staged"),
        }
    }
}

#[derive(Debug, Clone, new)]
pub struct Git {
    program: String,
    root: Box<Path>,
}

impl Git {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn diff(&self, mode: DiffMode) -> Result<String, ChangeError> {
        self.run(mode.args()).await
    }

    /// Raw content of `object`; files need not be valid UTF-8
    pub async fn show(&self, object: &str) -> Result<Vec<u8>, ChangeError> {
        self.run_bytes(&["show", object]).await
    }

    /// Top-level directory of the working copy that contains `root`
    pub async fn toplevel(&self) -> Result<PathBuf, ChangeError> {
        let stdout = self.run(&["rev-parse", "--show-toplevel"]).await?;

        Ok(PathBuf::from(stdout.trim_end_matches(['\n', '\r'])))
    }

    pub async fn run(&self, args: &[&str]) -> Result<String, ChangeError> {
        let stdout = self.run_bytes(args).await?;

        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }

    pub async fn run_bytes(&self, args: &[&str]) -> Result<Vec<u8>, ChangeError> {
        tracing::debug!(program = %self.program, ?args, root = %self.root.display(), "running git");

        // kill_on_drop: an aborted refresh must not leave git running
        let output = tokio::process::Command::new(&self.program)
            .args(args)
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ChangeError::ProcessSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ChangeError::ProcessExit {
                program: self.program.clone(),
                args: args.join(" "),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}
