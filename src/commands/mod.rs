//! Command implementations

mod strip;

pub use strip::strip;
