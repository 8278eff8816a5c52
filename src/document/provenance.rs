//! Provenance directives stamped above each snippet block.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::snippet::ResolvedSnippet;

/// Matches a complete directive line and captures its fields. Lines in any
/// other shape (older stamps without a digest, hand edits) do not match.
static DIRECTIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^<!-- prompt-weave:line (\d+) "([^"]*)" sha256 ([0-9a-f]{64}) -->$"#)
        .expect("directive pattern is valid")
});

/// One stamp: where a snippet body came from and what its source hashed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// 1-based line in the source where the body starts.
    pub line: usize,
    /// Source label such as `builtin:base.md`.
    pub label: String,
    /// Hex SHA-256 of the source file.
    pub digest: String,
}

impl Directive {
    /// Stamp for a resolved snippet.
    #[must_use]
    pub fn for_snippet(snippet: &ResolvedSnippet) -> Self {
        Self {
            line: snippet.source_line,
            label: snippet.source_label.clone(),
            digest: snippet.digest.clone(),
        }
    }

    /// Parses a single directive line, returning `None` if it is malformed.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let caps = DIRECTIVE_RE.captures(line)?;
        Some(Self {
            line: caps[1].parse().ok()?,
            label: caps[2].to_string(),
            digest: caps[3].to_string(),
        })
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<!-- prompt-weave:line {} \"{}\" sha256 {} -->",
            self.line, self.label, self.digest
        )
    }
}

/// Digests of every well-formed directive in `text`, in order.
#[must_use]
pub fn extract_digests(text: &str) -> Vec<String> {
    text.lines().filter_map(Directive::parse).map(|d| d.digest).collect()
}
