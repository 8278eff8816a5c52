//! Git port for version-control ignore queries.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Outcome of asking whether a path is excluded from version control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreStatus {
    /// The path matches an ignore rule.
    Ignored,
    /// The path would be tracked.
    NotIgnored,
    /// The answer is unknown (not a repository, no ignore file, ...).
    Indeterminate,
}

/// Answers ignore-rule questions about a workspace.
///
/// Abstracting git access allows deterministic replay and testing
/// without requiring a real repository or a `git` executable.
pub trait GitRepo: Send + Sync {
    /// Checks whether `relative_path` (relative to `root`) is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the check could not be performed at all, e.g. the
    /// `git` executable is not installed.
    fn check_ignore(
        &self,
        root: &Path,
        relative_path: &str,
    ) -> Result<IgnoreStatus, Box<dyn std::error::Error + Send + Sync>>;
}
