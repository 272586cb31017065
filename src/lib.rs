//! idxstrip - Strip numeric suffixes from index names in SQL dumps
//!
//! Schema dumps often carry index names such as `` `idx_user_email2` `` whose
//! trailing digits differ between environments. This library rewrites
//! `CREATE INDEX`, `RENAME INDEX` and `DROP INDEX` lines so that
//! backtick-quoted identifiers lose those digits, leaving every other line intact.
//!
//! ```
//! use idxstrip::core::services::rewrite;
//!
//! let sql = "CREATE INDEX `idx_name1` ON table1 (col1);\nSELECT * FROM `table123`;";
//! assert_eq!(
//!     rewrite(sql),
//!     "CREATE INDEX `idx_name` ON table1 (col1);\nSELECT * FROM `table123`;"
//! );
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;

pub use error::StripError;
