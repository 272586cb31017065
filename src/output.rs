//! Output formatting for human and JSON modes
//!
//! Human mode prints the rewritten SQL exactly; JSON mode wraps it with the
//! line statistics for tooling.

use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::core::services::Rewrite;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Rewritten SQL only (default)
    #[default]
    Human,
    /// JSON object with statistics (machine-readable)
    Json,
}

/// Result of rewriting one input file
#[derive(Debug, Serialize)]
pub struct RewriteReport {
    /// Input path as given on the command line
    pub path: String,
    /// Number of lines in the document
    pub lines: usize,
    /// Lines classified as index-related
    pub index_lines: usize,
    /// Lines whose identifiers were actually stripped
    pub rewritten_lines: usize,
    /// The rewritten SQL text
    pub sql: String,
}

impl RewriteReport {
    /// Build a report from a finished rewrite
    #[must_use]
    pub fn new(path: &Path, rewrite: Rewrite) -> Self {
        Self {
            path: path.display().to_string(),
            lines: rewrite.lines,
            index_lines: rewrite.index_lines,
            rewritten_lines: rewrite.rewritten_lines,
            sql: rewrite.text,
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode, out: &mut impl Write) -> io::Result<()> {
        match mode {
            OutputMode::Human => writeln!(out, "{}", self.sql),
            OutputMode::Json => {
                serde_json::to_writer(&mut *out, self)?;
                writeln!(out)
            },
        }
    }
}
