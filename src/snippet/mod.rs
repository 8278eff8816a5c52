//! Snippet lookup across the workspace, user and built-in tiers.
//!
//! A snippet is a Markdown file named `<name>.md`, optionally starting with
//! a `---` delimited metadata block that is dropped from the body.

mod front_matter;
mod resolver;

use std::fmt;
use std::path::{Path, PathBuf};

pub use front_matter::split_front_matter;
pub use resolver::{content_digest, resolve};

/// Priority level a snippet directory belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// `<workspace>/.prompt-weave/snippets`
    Workspace,
    /// The per-user snippets directory.
    User,
    /// Snippets shipped with the editor extension.
    Builtin,
}

impl Tier {
    /// Prefix used in source labels.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Workspace => "workspace",
            Self::User => "user",
            Self::Builtin => "builtin",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered list of directories to search; earlier entries win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<(Tier, PathBuf)>,
}

impl SearchPath {
    /// Creates an empty search path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the canonical workspace → user → built-in search path.
    ///
    /// The user tier is left out when `user_dir` is `None`.
    #[must_use]
    pub fn standard(workspace_dir: &Path, user_dir: Option<&Path>, builtin_dir: &Path) -> Self {
        let mut path = Self::new().with(Tier::Workspace, workspace_dir);
        if let Some(user_dir) = user_dir {
            path = path.with(Tier::User, user_dir);
        }
        path.with(Tier::Builtin, builtin_dir)
    }

    /// Appends a directory with the lowest priority so far.
    #[must_use]
    pub fn with(mut self, tier: Tier, dir: impl Into<PathBuf>) -> Self {
        self.entries.push((tier, dir.into()));
        self
    }

    /// Iterates over `(tier, directory)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &Path)> {
        self.entries.iter().map(|(tier, dir)| (*tier, dir.as_path()))
    }

    /// Returns `true` if no directories are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A snippet found on the search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSnippet {
    /// Body with the metadata block removed.
    pub content: String,
    /// `<tier>:<file name>`, e.g. `builtin:base.md`.
    pub source_label: String,
    /// 1-based line in the source file where the body starts.
    pub source_line: usize,
    /// Location of the file that supplied the snippet.
    pub source_path: PathBuf,
    /// Lowercase hex SHA-256 of the file's raw bytes.
    pub digest: String,
}
