//! idxstrip - Strip numeric suffixes from index names in SQL dumps
//!
//! Reads one SQL file and prints it with index identifiers normalised.

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

mod cli;
mod commands;

use idxstrip::StripError;

/// Main entry point for the idxstrip CLI
fn main() {
    if let Err(err) = cli::run() {
        match err.downcast_ref::<StripError>() {
            Some(usage @ StripError::Usage { .. }) => eprintln!("{usage}"),
            _ => eprintln!("Error: {err:#}"),
        }
        std::process::exit(1);
    }
}
