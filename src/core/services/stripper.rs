//! Identifier suffix stripper
//!
//! Operates on one line at a time. Each backtick-quoted identifier whose
//! contents end in a run of digits loses that run, provided the remaining base
//! is non-empty, contains no digits and does not end in an underscore:
//!
//! ```text
//! `idx_name1`  -> `idx_name`
//! `idx_1`      -> `idx_1`     (base ends in '_')
//! `123`        -> `123`       (empty base)
//! `idx2col3`   -> `idx2col3`  (digit inside base)
//! ```

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A backtick-quoted identifier; pairs are consumed left to right without overlap.
static QUOTED_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]*)`").expect("quoted identifier pattern is valid"));

/// Return the identifier base if its trailing digit run should be stripped
///
/// `identifier` is the text between the backticks.
#[must_use]
pub fn strip_identifier_suffix(identifier: &str) -> Option<&str> {
    let base = identifier.trim_end_matches(|c: char| c.is_ascii_digit());
    if base.len() == identifier.len() || base.contains(|c: char| c.is_ascii_digit()) {
        return None;
    }

    match base.chars().next_back() {
        Some(last) if last != '_' => Some(base),
        _ => None,
    }
}

/// Strip numeric suffixes from every qualifying quoted identifier on `line`
///
/// Text outside backticks is never touched. Borrows when nothing matched.
#[must_use]
pub fn strip_identifier_suffixes(line: &str) -> Cow<'_, str> {
    QUOTED_IDENTIFIER.replace_all(line, |caps: &Captures<'_>| {
        strip_identifier_suffix(&caps[1])
            .map_or_else(|| caps[0].to_string(), |base| format!("`{base}`"))
    })
}
