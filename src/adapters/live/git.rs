//! Live git adapter using the `git check-ignore` CLI command.

use std::path::Path;
use std::process::Command;

use crate::ports::git::{GitRepo, IgnoreStatus};

/// Live git adapter that shells out to the `git` CLI.
pub struct LiveGitRepo;

impl GitRepo for LiveGitRepo {
    fn check_ignore(
        &self,
        root: &Path,
        relative_path: &str,
    ) -> Result<IgnoreStatus, Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new("git")
            .arg("-C")
            .arg(root)
            .args(["check-ignore", "-q", relative_path])
            .output()
            .map_err(|e| format!("failed to run git check-ignore: {e}"))?;

        // 0 = ignored, 1 = not ignored, 128 = fatal (e.g. not a repository).
        let status = match output.status.code() {
            Some(0) => IgnoreStatus::Ignored,
            Some(1) => IgnoreStatus::NotIgnored,
            _ => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                tracing::debug!(stderr = %stderr.trim(), "git check-ignore was inconclusive");
                IgnoreStatus::Indeterminate
            }
        };
        Ok(status)
    }
}
