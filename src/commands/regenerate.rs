//! Regenerate command handler.

use std::path::Path;

use crate::advisory::check_ignored;
use crate::context::ServiceContext;
use crate::document::Assembler;

/// Result of a successful regeneration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Included snippet names, in request order.
    pub included: Vec<String>,
    /// Advisory warnings about the output file.
    pub warnings: Vec<String>,
}

impl Outcome {
    /// The summary line printed on success, if anything was included.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        if self.included.is_empty() {
            return None;
        }
        Some(format!(
            "Regenerated with {} snippet(s): {}",
            self.included.len(),
            self.included.join(", ")
        ))
    }
}

/// Regenerates the document and prints the summary and any warnings.
///
/// # Errors
///
/// Returns an `Error: ...` message if assembly fails or a snippet is missing.
pub fn run(
    ctx: &ServiceContext,
    user_snippets_dir: Option<&Path>,
    workspace: &Path,
    builtin_snippets: &Path,
    include: &[String],
) -> Result<(), String> {
    let outcome = run_with_context(
        ctx,
        user_snippets_dir,
        workspace,
        builtin_snippets,
        include,
    )?;
    if let Some(summary) = outcome.summary() {
        println!("{summary}");
    }
    for warning in &outcome.warnings {
        eprintln!("Warning: {warning}");
    }
    Ok(())
}

/// Regenerates the document without printing.
///
/// The ignore-rule advisory only runs when at least one snippet was included.
///
/// # Errors
///
/// Returns an `Error: ...` message if assembly fails or a snippet is missing.
pub fn run_with_context(
    ctx: &ServiceContext,
    user_snippets_dir: Option<&Path>,
    workspace: &Path,
    builtin_snippets: &Path,
    include: &[String],
) -> Result<Outcome, String> {
    let included = Assembler::new(ctx, user_snippets_dir)
        .assemble(workspace, builtin_snippets, include)
        .map_err(|e| format!("Error: {e}"))?;

    let warnings = if included.is_empty() {
        Vec::new()
    } else {
        check_ignored(ctx, workspace)
    };
    Ok(Outcome { included, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::IgnoreStatus;
    use crate::testing::{context, FakeGit, MemFs};

    fn include(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn regenerate(ctx: &ServiceContext, list: &[&str]) -> Result<Outcome, String> {
        let workspace = Path::new("/ws");
        let builtin = Path::new("/ext");
        run_with_context(ctx, None, workspace, builtin, &include(list))
    }

    #[test]
    fn summary_lists_included_names() {
        let fs = MemFs::new();
        fs.insert("/ext/base.md", "Base");
        fs.insert("/ext/docker.md", "Docker");
        let ctx = context(fs, FakeGit(Some(IgnoreStatus::Ignored)));

        let outcome = regenerate(&ctx, &["base", "docker"]).unwrap();

        assert_eq!(
            outcome.summary().as_deref(),
            Some("Regenerated with 2 snippet(s): base, docker")
        );
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn tracked_output_is_reported() {
        let fs = MemFs::new();
        fs.insert("/ext/base.md", "Base");
        let ctx = context(fs, FakeGit(Some(IgnoreStatus::NotIgnored)));

        let outcome = regenerate(&ctx, &["base"]).unwrap();
        assert_eq!(outcome.warnings.len(), 1);
    }

    #[test]
    fn empty_include_is_silent() {
        let ctx = context(MemFs::new(), FakeGit(Some(IgnoreStatus::NotIgnored)));

        let outcome = regenerate(&ctx, &[]).unwrap();
        assert_eq!(outcome, Outcome::default());
        assert_eq!(outcome.summary(), None);
    }

    #[test]
    fn missing_snippet_is_an_error_after_writing() {
        let fs = MemFs::new();
        fs.insert("/ext/base.md", "Base");
        let ctx = context(fs.clone(), FakeGit(Some(IgnoreStatus::Ignored)));

        let err = regenerate(&ctx, &["base", "ghost"]).unwrap_err();

        assert_eq!(
            err,
            "Error: Regenerated, but the following snippets were not found: ghost"
        );
        let written = fs.get("/ws/.github/copilot-instructions.md").unwrap();
        assert!(written.contains("Base"));
    }
}
