//! Domain types for the index-suffix rewriter
//!
//! - [`TriggerPhrase`]: `CREATE INDEX`, `RENAME INDEX`, `DROP INDEX`
//! - [`LineKind`]: index-related or pass-through

mod line;
mod trigger;

pub use line::LineKind;
pub use trigger::TriggerPhrase;
