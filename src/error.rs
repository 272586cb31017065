//! Error types for idxstrip

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the rewriter
///
/// The transformation itself cannot fail; only argument handling and the
/// input read can.
#[derive(Debug, Error)]
pub enum StripError {
    /// No input path was given on the command line
    #[error("Usage: {program} <sql-file>")]
    Usage {
        /// Program name shown in the usage line
        program: String,
    },

    /// The input file is missing or unreadable
    #[error("failed to read {}", .path.display())]
    Read {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl StripError {
    /// Create a usage error for `program`
    #[must_use]
    pub fn usage(program: impl Into<String>) -> Self {
        Self::Usage {
            program: program.into(),
        }
    }
}
