//! Rewrite one SQL file to stdout
//!
//! The file is read completely before anything is written, so a failed read
//! produces no partial output.

use std::io::{self, Write};
use std::path::Path;

use log::{Level, debug, info, log_enabled};

use idxstrip::adapters::read_document;
use idxstrip::core::services::{classify_line, rewrite_document};
use idxstrip::output::{OutputMode, RewriteReport};

/// Rewrite the SQL file at `path` and print the result to stdout
pub fn strip(path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let stdout = io::stdout();
    strip_to(path, mode, &mut stdout.lock())
}

/// Rewrite into an arbitrary writer (for testing)
fn strip_to(path: &Path, mode: OutputMode, out: &mut impl Write) -> anyhow::Result<()> {
    let sql = read_document(path)?;
    debug!("Read {} bytes from {}", sql.len(), path.display());

    if log_enabled!(Level::Debug) {
        for (number, line) in sql.split('\n').enumerate() {
            if let Some(trigger) = classify_line(line).trigger() {
                debug!("Line {}: {trigger}", number + 1);
            }
        }
    }

    let rewrite = rewrite_document(&sql);
    info!(
        "{} line(s), {} index-related, {} rewritten",
        rewrite.lines, rewrite.index_lines, rewrite.rewritten_lines
    );

    RewriteReport::new(path, rewrite).render(mode, out)?;
    out.flush()?;
    Ok(())
}
