//! Metadata block stripping.

/// Returns `true` if `line` is a `---` delimiter, ignoring a leading byte
/// order mark and surrounding whitespace.
fn is_delimiter(line: &str) -> bool {
    line.trim_start_matches('\u{feff}').trim() == "---"
}

/// Splits a leading `---` metadata block off `text`.
///
/// Returns the body and the 1-based line number it starts on. Text without a
/// complete block (opening `---` on the first line and a closing `---` line)
/// is returned whole, starting at line 1.
#[must_use]
pub fn split_front_matter(text: &str) -> (&str, usize) {
    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next().filter(|line| is_delimiter(line)) else {
        return (text, 1);
    };

    let mut offset = first.len();
    for (index, line) in lines.enumerate() {
        offset += line.len();
        if is_delimiter(line) {
            // `index` counts from the second line, so the closing delimiter
            // sits on line `index + 2` and the body starts one line later.
            return (&text[offset..], index + 3);
        }
    }
    (text, 1)
}
