//! First-match snippet resolution.

use sha2::{Digest, Sha256};

use super::{split_front_matter, ResolvedSnippet, SearchPath};
use crate::error::{Result, WeaveError};
use crate::ports::FileSystem;

/// Lowercase hex SHA-256 of `bytes`.
#[must_use]
pub fn content_digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Looks up `<name>.md` in each directory of `search_path` in order.
///
/// The first existing file wins and later tiers are never consulted.
/// Directories that do not exist are skipped. A name found nowhere yields
/// `Ok(None)`.
///
/// # Errors
///
/// Returns an error if a matching file exists but cannot be read or is not
/// valid UTF-8.
pub fn resolve(
    fs: &dyn FileSystem,
    name: &str,
    search_path: &SearchPath,
) -> Result<Option<ResolvedSnippet>> {
    let file_name = format!("{name}.md");

    for (tier, dir) in search_path.iter() {
        let candidate = dir.join(&file_name);
        if !fs.is_file(&candidate) {
            continue;
        }

        let bytes = fs
            .read(&candidate)
            .map_err(|e| WeaveError::read(&candidate, e))?;
        let digest = content_digest(&bytes);
        let text = String::from_utf8(bytes).map_err(|_| WeaveError::Encoding {
            path: candidate.clone(),
        })?;
        let (body, source_line) = split_front_matter(&text);
        let source_label = format!("{tier}:{file_name}");

        tracing::debug!(
            snippet = name,
            source = %source_label,
            line = source_line,
            "resolved snippet"
        );
        return Ok(Some(ResolvedSnippet {
            content: body.to_string(),
            source_label,
            source_line,
            source_path: candidate,
            digest,
        }));
    }

    tracing::debug!(snippet = name, "snippet not found in any tier");
    Ok(None)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::snippet::Tier;
    use crate::testing::MemFs;

    fn three_tiers() -> SearchPath {
        SearchPath::new()
            .with(Tier::Workspace, "/ws/.prompt-weave/snippets")
            .with(Tier::User, "/home/me/.prompt-weave/snippets")
            .with(Tier::Builtin, "/ext/snippets")
    }

    #[test]
    fn finds_builtin_snippet_and_strips_metadata() {
        let fs = MemFs::new();
        fs.insert("/ext/snippets/base.md", "---\nname: base\n---\n## Base\n");

        let resolved = resolve(&fs, "base", &three_tiers()).unwrap().unwrap();

        assert_eq!(resolved.content, "## Base\n");
        assert_eq!(resolved.source_label, "builtin:base.md");
        assert_eq!(resolved.source_line, 4);
        assert_eq!(resolved.source_path, Path::new("/ext/snippets/base.md"));
    }

    #[test]
    fn highest_priority_tier_wins() {
        let fs = MemFs::new();
        fs.insert("/ws/.prompt-weave/snippets/base.md", "workspace rules");
        fs.insert("/home/me/.prompt-weave/snippets/base.md", "user rules");
        fs.insert("/ext/snippets/base.md", "builtin rules");

        let resolved = resolve(&fs, "base", &three_tiers()).unwrap().unwrap();
        assert_eq!(resolved.content, "workspace rules");
        assert_eq!(resolved.source_label, "workspace:base.md");

        fs.remove("/ws/.prompt-weave/snippets/base.md");
        let resolved = resolve(&fs, "base", &three_tiers()).unwrap().unwrap();
        assert_eq!(resolved.content, "user rules");
        assert_eq!(resolved.source_label, "user:base.md");

        fs.remove("/home/me/.prompt-weave/snippets/base.md");
        let resolved = resolve(&fs, "base", &three_tiers()).unwrap().unwrap();
        assert_eq!(resolved.source_label, "builtin:base.md");
    }

    #[test]
    fn label_follows_tier_not_directory_name() {
        let fs = MemFs::new();
        fs.insert("/shared/base.md", "shared");
        let path = SearchPath::new()
            .with(Tier::User, "/shared")
            .with(Tier::Builtin, "/shared");

        let resolved = resolve(&fs, "base", &path).unwrap().unwrap();
        assert_eq!(resolved.source_label, "user:base.md");
    }

    #[test]
    fn missing_snippet_is_not_an_error() {
        let fs = MemFs::new();
        assert!(resolve(&fs, "ghost", &three_tiers()).unwrap().is_none());
        assert!(resolve(&fs, "ghost", &SearchPath::new()).unwrap().is_none());
    }

    #[test]
    fn file_without_metadata_starts_at_line_one() {
        let fs = MemFs::new();
        fs.insert("/ext/snippets/plain.md", "Just text\n");

        let resolved = resolve(&fs, "plain", &three_tiers()).unwrap().unwrap();
        assert_eq!(resolved.content, "Just text\n");
        assert_eq!(resolved.source_line, 1);
    }

    #[test]
    fn digest_covers_raw_bytes_including_metadata() {
        let fs = MemFs::new();
        fs.insert("/ext/snippets/a.md", "---\nname: a\n---\nBody");
        let first = resolve(&fs, "a", &three_tiers()).unwrap().unwrap();
        assert_eq!(first.digest, content_digest(b"---\nname: a\n---\nBody"));
        assert_eq!(first.digest.len(), 64);

        fs.insert("/ext/snippets/a.md", "---\nname: b\n---\nBody");
        let second = resolve(&fs, "a", &three_tiers()).unwrap().unwrap();
        assert_eq!(first.content, second.content);
        assert_ne!(first.digest, second.digest);
    }

    #[test]
    fn invalid_utf8_is_an_encoding_error() {
        let fs = MemFs::new();
        fs.insert_bytes("/ext/snippets/bin.md", vec![0xff, 0xfe, 0x00]);

        let err = resolve(&fs, "bin", &three_tiers()).unwrap_err();
        assert!(matches!(err, WeaveError::Encoding { .. }));
    }

    #[test]
    fn known_digest_value() {
        assert_eq!(
            content_digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
