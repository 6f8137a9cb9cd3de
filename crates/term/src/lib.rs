//! Terminal presentation for blockfall.
//!
//! Snapshots are laid out into a [`FrameBuffer`] by [`GameView`], and the
//! [`TerminalRenderer`] flushes only the rows that changed.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{changed_rows, encode_rows_into, TerminalRenderer};
