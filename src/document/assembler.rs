//! Regeneration of the output document from an ordered snippet list.

use std::path::{Path, PathBuf};

use super::layout::{render, ExistingDocument};
use super::provenance::{extract_digests, Directive};
use super::{OUTPUT_PATH, WORKSPACE_SNIPPETS_DIR};
use crate::context::ServiceContext;
use crate::error::{Result, WeaveError};
use crate::snippet::{resolve, ResolvedSnippet, SearchPath};

/// Writes `.github/copilot-instructions.md` for a workspace.
///
/// All I/O goes through `ctx.fs`. The user snippets directory is passed in
/// explicitly; `None` disables the user tier.
pub struct Assembler<'a> {
    ctx: &'a ServiceContext,
    user_snippets_dir: Option<PathBuf>,
}

impl<'a> Assembler<'a> {
    /// Creates an assembler using the given user snippets directory.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, user_snippets_dir: Option<&Path>) -> Self {
        Self {
            ctx,
            user_snippets_dir: user_snippets_dir.map(Path::to_path_buf),
        }
    }

    /// Location of the output document for `workspace`.
    #[must_use]
    pub fn output_path(workspace: &Path) -> PathBuf {
        workspace.join(OUTPUT_PATH)
    }

    /// The workspace → user → built-in search path for `workspace`.
    #[must_use]
    pub fn search_path(&self, workspace: &Path, builtin_dir: &Path) -> SearchPath {
        SearchPath::standard(
            &workspace.join(WORKSPACE_SNIPPETS_DIR),
            self.user_snippets_dir.as_deref(),
            builtin_dir,
        )
    }

    /// Regenerates the output document from `include`, in order.
    ///
    /// Content below the separator in an existing document is preserved.
    /// When every snippet resolves and the digests stamped in the existing
    /// document match the fresh ones, nothing is written. An empty `include`
    /// strips the generated region instead (deleting the file if nothing
    /// else is left).
    ///
    /// Returns the names that were included, duplicates and order kept.
    ///
    /// # Errors
    ///
    /// Returns [`WeaveError::Incomplete`] if any name could not be resolved;
    /// the document has already been written with the snippets that were
    /// found. Returns an I/O error if a file cannot be read, written or
    /// removed.
    pub fn assemble(
        &self,
        workspace: &Path,
        builtin_dir: &Path,
        include: &[String],
    ) -> Result<Vec<String>> {
        let output_path = Self::output_path(workspace);
        let existing = self.read_existing(&output_path)?;

        if include.is_empty() {
            self.revert(&output_path, existing.as_ref())?;
            return Ok(Vec::new());
        }

        let search_path = self.search_path(workspace, builtin_dir);
        let mut resolved: Vec<ResolvedSnippet> = Vec::new();
        let mut included = Vec::new();
        let mut missing = Vec::new();
        for name in include {
            match resolve(&*self.ctx.fs, name, &search_path)? {
                Some(snippet) => {
                    resolved.push(snippet);
                    included.push(name.clone());
                }
                None => missing.push(name.clone()),
            }
        }

        let existing = existing.unwrap_or_default();
        if missing.is_empty() && is_current(&existing, &resolved) {
            tracing::debug!(
                path = %output_path.display(),
                "snippet digests unchanged, skipping write"
            );
            return Ok(included);
        }

        let text = render(&generated_region(&resolved), &existing.user);
        self.ctx
            .fs
            .write(&output_path, &text)
            .map_err(|e| WeaveError::write(&output_path, e))?;
        tracing::debug!(
            path = %output_path.display(),
            snippets = resolved.len(),
            "wrote instructions"
        );

        if !missing.is_empty() {
            tracing::debug!(?missing, "snippets not found in any tier");
            return Err(WeaveError::Incomplete { missing });
        }
        Ok(included)
    }

    fn read_existing(&self, output_path: &Path) -> Result<Option<ExistingDocument>> {
        if !self.ctx.fs.is_file(output_path) {
            return Ok(None);
        }
        let text = self
            .ctx
            .fs
            .read_to_string(output_path)
            .map_err(|e| WeaveError::read(output_path, e))?;
        Ok(Some(ExistingDocument::parse(&text)))
    }

    /// Drops the generated region from a previously generated document.
    fn revert(&self, output_path: &Path, existing: Option<&ExistingDocument>) -> Result<()> {
        let Some(existing) = existing.filter(|doc| doc.has_separator()) else {
            tracing::debug!("nothing generated to revert");
            return Ok(());
        };

        if existing.user.is_empty() {
            self.ctx
                .fs
                .remove_file(output_path)
                .map_err(|e| WeaveError::remove(output_path, e))?;
            tracing::debug!(path = %output_path.display(), "removed generated instructions");
        } else {
            let text = format!("{}\n", existing.user);
            self.ctx
                .fs
                .write(output_path, &text)
                .map_err(|e| WeaveError::write(output_path, e))?;
            tracing::debug!(path = %output_path.display(), "reverted to user content");
        }
        Ok(())
    }
}

/// Whether the stamps in `existing` already describe exactly `resolved`.
fn is_current(existing: &ExistingDocument, resolved: &[ResolvedSnippet]) -> bool {
    let Some(generated) = existing.generated.as_deref() else {
        return false;
    };
    let stamped = extract_digests(generated);
    let fresh = resolved.iter().map(|s| &s.digest);
    stamped.iter().eq(fresh)
}

/// Stamped blocks for every resolved snippet, separated by blank lines.
fn generated_region(resolved: &[ResolvedSnippet]) -> String {
    resolved
        .iter()
        .map(|snippet| {
            let directive = Directive::for_snippet(snippet);
            let body = snippet.content.trim();
            if body.is_empty() {
                directive.to_string()
            } else {
                format!("{directive}\n{body}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
