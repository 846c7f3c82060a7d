use crate::artifacts::core::error::ChangeError;
use crate::artifacts::snapshot::{INVALID_REVISION_REGEX, REF_ALIASES};
use anyhow::Context;

/// Default base for prior content: one commit before HEAD
pub const DEFAULT_BASE_REVISION: &str = "HEAD~1";

/// Revision used as the left side of a comparison for unstaged files
///
/// Accepts anything git understands as a revision (`HEAD~1`, `main^`, an
/// abbreviated object id) as long as it can be joined with a path into a
/// `<revision>:<path>` object name. The alias `@` expands to `HEAD`, also in
/// front of a `~`/`^` suffix (`@~2` becomes `HEAD~2`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Revision(String);

impl Revision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Self> {
        if revision.is_empty() {
            anyhow::bail!("revision cannot be empty");
        }

        let re = regex::Regex::new(INVALID_REVISION_REGEX)
            .with_context(|| format!("invalid revision regex: {INVALID_REVISION_REGEX}"))?;

        if re.is_match(revision) {
            return Err(ChangeError::InvalidRevision {
                revision: revision.to_string(),
            }
            .into());
        }

        let split_at = revision.find(['~', '^']).unwrap_or(revision.len());
        let (base, suffix) = revision.split_at(split_at);
        let base = *REF_ALIASES.get(base).unwrap_or(&base);

        Ok(Self(format!("{base}{suffix}")))
    }
}

impl Default for Revision {
    fn default() -> Self {
        Self(DEFAULT_BASE_REVISION.to_string())
    }
}

impl AsRef<str> for Revision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
