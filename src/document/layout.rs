//! Splitting an existing document and rendering a new one.

use super::SEPARATOR;

/// The regions of a previously written output document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExistingDocument {
    /// Text before the first separator, or `None` when the document has
    /// no separator (it was never generated).
    pub generated: Option<String>,
    /// Trimmed text after the first separator, or the whole trimmed
    /// document when there is no separator.
    pub user: String,
}

impl ExistingDocument {
    /// Splits `text` on the first occurrence of the separator.
    ///
    /// `\r\n` and lone `\r` line endings are read as `\n`, so a rewritten
    /// document always uses `\n`.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        match text.split_once(SEPARATOR) {
            Some((generated, user)) => Self {
                generated: Some(generated.to_string()),
                user: user.trim().to_string(),
            },
            None => Self {
                generated: None,
                user: text.trim().to_string(),
            },
        }
    }

    /// Returns `true` if the document contained the separator.
    #[must_use]
    pub fn has_separator(&self) -> bool {
        self.generated.is_some()
    }
}

/// Renders the final document text.
///
/// `generated` is placed above the separator when non-empty and `user`
/// below it when non-empty, each set off by a blank line. The result ends
/// with exactly one newline.
#[must_use]
pub fn render(generated: &str, user: &str) -> String {
    let mut out = String::new();
    if !generated.is_empty() {
        out.push_str(generated);
        out.push_str("\n\n");
    }
    out.push_str(SEPARATOR);
    if !user.is_empty() {
        out.push_str("\n\n");
        out.push_str(user);
    }
    out.push('\n');
    out
}
