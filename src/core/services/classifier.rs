//! Line classifier - decides which lines are index-related
//!
//! The rule is deliberately asymmetric: `CREATE INDEX` only counts when it opens
//! the trimmed line, while `RENAME INDEX` and `DROP INDEX` count anywhere.

use crate::core::models::{LineKind, TriggerPhrase};

/// Classify a single line
///
/// When several phrases apply, the first one in [`TriggerPhrase::ALL`] is reported.
#[must_use]
pub fn classify_line(line: &str) -> LineKind {
    TriggerPhrase::ALL
        .into_iter()
        .find(|trigger| trigger.matches(line))
        .map_or(LineKind::PassThrough, LineKind::Index)
}
