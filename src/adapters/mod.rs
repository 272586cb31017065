//! Adapter implementations that handle I/O
//!
//! - `file/` - Reading the input SQL document

pub mod file;

pub use file::read_document;
