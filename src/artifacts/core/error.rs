//! Failure taxonomy shared by the diff invoker and the snapshot reconstructor

use std::path::PathBuf;

/// Errors surfaced by the change-extraction engine
///
/// The library never panics on a failed git invocation; every failure is
/// returned to the caller, which decides whether to degrade (refresh keeps the
/// side that succeeded) or fall back (comparison falls back to navigation).
#[derive(Debug, thiserror::Error)]
pub enum ChangeError {
    #[error("failed to run {program}: {source}")]
    ProcessSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} {args} exited with {}: {stderr}", exit_code_label(*code))]
    ProcessExit {
        program: String,
        args: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("no workspace available at {}", path.display())]
    NoWorkspace { path: PathBuf },

    #[error("could not retrieve {object}: {reason}")]
    ContentRetrieval { object: String, reason: String },

    #[error("failed to write scratch file {}: {source}", path.display())]
    Scratch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid revision '{revision}'")]
    InvalidRevision { revision: String },
}

impl ChangeError {
    /// Diagnostic text reported by the external process, if any
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            ChangeError::ProcessExit { stderr, .. } => Some(stderr),
            ChangeError::ContentRetrieval { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

fn exit_code_label(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "signal".to_string(),
    }
}
