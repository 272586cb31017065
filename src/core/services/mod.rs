//! Rewriting services
//!
//! Pure text transformation. These services have no I/O dependencies - they
//! operate on strings passed in and return results.
//!
//! - [`classifier`] - Decide whether a line is index-related
//! - [`stripper`] - Strip numeric suffixes from quoted identifiers
//! - [`rewriter`] - Apply both across a document

pub mod classifier;
pub mod rewriter;
pub mod stripper;

pub use classifier::classify_line;
pub use rewriter::{Rewrite, rewrite, rewrite_document, rewrite_line};
pub use stripper::{strip_identifier_suffix, strip_identifier_suffixes};
