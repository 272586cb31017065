//! Document rewriter - applies classification and stripping line by line
//!
//! The document is split on `\n` and rejoined with `\n`, so line count and
//! order are preserved and a trailing newline survives as a trailing empty line.

use std::borrow::Cow;

use super::{classify_line, strip_identifier_suffixes};

/// Result of rewriting a whole document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The rewritten text
    pub text: String,
    /// Number of lines in the input (and output)
    pub lines: usize,
    /// Lines classified as index-related
    pub index_lines: usize,
    /// Index-related lines whose text actually changed
    pub rewritten_lines: usize,
}

/// Rewrite a single line
///
/// Pass-through lines are returned borrowed and byte-for-byte identical.
#[must_use]
pub fn rewrite_line(line: &str) -> Cow<'_, str> {
    if classify_line(line).is_index() {
        strip_identifier_suffixes(line)
    } else {
        Cow::Borrowed(line)
    }
}

/// Rewrite a full document, collecting line statistics
#[must_use]
pub fn rewrite_document(text: &str) -> Rewrite {
    let mut lines = Vec::new();
    let mut index_lines = 0;
    let mut rewritten_lines = 0;

    for line in text.split('\n') {
        let rewritten = if classify_line(line).is_index() {
            index_lines += 1;
            let stripped = strip_identifier_suffixes(line);
            if stripped != line {
                rewritten_lines += 1;
            }
            stripped
        } else {
            Cow::Borrowed(line)
        };
        lines.push(rewritten);
    }

    Rewrite {
        lines: lines.len(),
        text: lines.join("\n"),
        index_lines,
        rewritten_lines,
    }
}

/// Rewrite a full document, returning only the text
#[must_use]
pub fn rewrite(text: &str) -> String {
    rewrite_document(text).text
}
