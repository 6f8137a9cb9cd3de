//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Intent`] values. The
//! engine never sees key codes.

pub mod map;

pub use blockfall_types as types;

pub use map::{intent_for_key, should_quit};
