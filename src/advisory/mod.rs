//! Advisory check that the generated document is kept out of version control.
//!
//! The check asks the `GitRepo` port first and only falls back to scanning
//! `.gitignore` when git cannot be run at all.

use std::path::Path;

use crate::context::ServiceContext;
use crate::document::OUTPUT_PATH;
use crate::ports::{FileSystem, IgnoreStatus};

/// Warnings about the output path for `workspace`: empty, or a single
/// message when the output would be tracked.
///
/// An indeterminate answer (not a repository, no ignore file) never warns.
#[must_use]
pub fn check_ignored(ctx: &ServiceContext, workspace: &Path) -> Vec<String> {
    let status = match ctx.git.check_ignore(workspace, OUTPUT_PATH) {
        Ok(status) => status,
        Err(e) => {
            tracing::debug!(error = %e, "git unavailable, scanning .gitignore instead");
            scan_ignore_file(&*ctx.fs, workspace)
        }
    };

    match status {
        IgnoreStatus::NotIgnored => vec![format!(
            "{OUTPUT_PATH} is not ignored by git. It is regenerated locally; \
             consider adding it to .gitignore."
        )],
        IgnoreStatus::Ignored | IgnoreStatus::Indeterminate => Vec::new(),
    }
}

/// Best-effort literal scan of `<workspace>/.gitignore`.
///
/// A line counts as covering the output when, trimmed, it names the
/// `.github` directory, the full relative output path, or the bare file
/// name (each optionally anchored with a leading `/`). Globs and negations
/// are not interpreted.
#[must_use]
pub fn scan_ignore_file(fs: &dyn FileSystem, workspace: &Path) -> IgnoreStatus {
    let path = workspace.join(".gitignore");
    if !fs.is_file(&path) {
        return IgnoreStatus::Indeterminate;
    }
    let Ok(text) = fs.read_to_string(&path) else {
        tracing::warn!(path = %path.display(), "could not read .gitignore");
        return IgnoreStatus::Indeterminate;
    };

    let file_name = OUTPUT_PATH.rsplit('/').next().unwrap_or(OUTPUT_PATH);
    let covers = |line: &str| {
        let entry = line.trim();
        let entry = entry.strip_prefix('/').unwrap_or(entry);
        matches!(entry, ".github" | ".github/") || entry == OUTPUT_PATH || entry == file_name
    };

    if text.lines().any(covers) {
        IgnoreStatus::Ignored
    } else {
        IgnoreStatus::NotIgnored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{context, FakeGit, MemFs};

    const WS: &str = "/ws";

    fn warnings(fs: MemFs, git: FakeGit) -> Vec<String> {
        check_ignored(&context(fs, git), Path::new(WS))
    }

    #[test]
    fn tracked_output_yields_one_warning_naming_the_path() {
        let found = warnings(MemFs::new(), FakeGit(Some(IgnoreStatus::NotIgnored)));
        assert_eq!(found.len(), 1);
        assert!(found[0].contains(".github/copilot-instructions.md"));
    }

    #[test]
    fn ignored_or_indeterminate_yields_nothing() {
        let quiet = |status| warnings(MemFs::new(), FakeGit(Some(status))).is_empty();
        assert!(quiet(IgnoreStatus::Ignored));
        assert!(quiet(IgnoreStatus::Indeterminate));
    }

    #[test]
    fn git_answer_wins_over_ignore_file() {
        let fs = MemFs::new();
        fs.insert("/ws/.gitignore", ".github/\n");
        let found = warnings(fs, FakeGit(Some(IgnoreStatus::NotIgnored)));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn falls_back_to_ignore_file_without_git() {
        let fs = MemFs::new();
        fs.insert("/ws/.gitignore", "node_modules/\n*.log\n");
        assert_eq!(warnings(fs, FakeGit(None)).len(), 1);

        let fs = MemFs::new();
        fs.insert("/ws/.gitignore", "target\n/.github/\n");
        assert!(warnings(fs, FakeGit(None)).is_empty());

        assert!(warnings(MemFs::new(), FakeGit(None)).is_empty());
    }

    #[test]
    fn scan_accepts_literal_entries_only() {
        let status = |contents: &str| {
            let fs = MemFs::new();
            fs.insert("/ws/.gitignore", contents);
            scan_ignore_file(&fs, Path::new(WS))
        };

        assert_eq!(status(".github\n"), IgnoreStatus::Ignored);
        assert_eq!(
            status("  .github/copilot-instructions.md  \n"),
            IgnoreStatus::Ignored
        );
        assert_eq!(
            status("/.github/copilot-instructions.md\n"),
            IgnoreStatus::Ignored
        );
        assert_eq!(status("copilot-instructions.md\n"), IgnoreStatus::Ignored);
        assert_eq!(status("*.md\n"), IgnoreStatus::NotIgnored);
        assert_eq!(status(".github/workflows/\n"), IgnoreStatus::NotIgnored);
        assert_eq!(status(""), IgnoreStatus::NotIgnored);
    }
}
