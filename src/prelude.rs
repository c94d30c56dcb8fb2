//! Prelude module for the luach crate.
//!
//! Re-exports the derive macros from derive_more used across the calendar types.

pub use derive_more::{Display, From, Into};
