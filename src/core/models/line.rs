//! Per-line classification result

use super::TriggerPhrase;

/// How a single line is treated by the rewriter
///
/// Recomputed for every line; nothing carries over to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The line pertains to index creation, renaming or deletion
    Index(TriggerPhrase),
    /// Any other line, emitted byte-for-byte
    PassThrough,
}

impl LineKind {
    /// Whether identifiers on this line are candidates for stripping
    #[must_use]
    pub const fn is_index(self) -> bool {
        matches!(self, Self::Index(_))
    }

    /// The phrase that classified the line, if any
    #[must_use]
    pub const fn trigger(self) -> Option<TriggerPhrase> {
        match self {
            Self::Index(trigger) => Some(trigger),
            Self::PassThrough => None,
        }
    }
}
