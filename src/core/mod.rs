//! Core domain logic for idxstrip
//!
//! This module contains pure text transformation with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`TriggerPhrase`, `LineKind`)
//! - `services/` - Line classification and identifier rewriting

pub mod models;
pub mod services;
