//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game and nothing else:
//! no terminal, no clock, no global randomness. The driver passes in the
//! time and the decoded intents, and reads back a snapshot to draw.
//!
//! # Module Structure
//!
//! - [`board`]: occupancy grid, row queries, line clearing entry point
//! - [`clear`]: the two interchangeable row-compaction policies
//! - [`shape`]: shape masks and the clockwise rotation transform
//! - [`pieces`]: tetromino spawn masks and the piece value
//! - [`collision`]: the `fits` predicate every placement goes through
//! - [`factory`] / [`rng`]: random piece production over an injectable source
//! - [`fall_timer`]: gate for the automatic descent
//! - [`game_state`]: the state machine (Running / Paused / GameOver)
//! - [`config`]: board size, timing and policy knobs
//! - [`snapshot`]: per-frame read model for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{Intent, Phase};
//!
//! let mut game = GameState::new(12345);
//!
//! // One frame at t=16ms with two intents.
//! game.tick(16, &[Intent::MoveRight, Intent::RotateCw]);
//!
//! // Hard drop locks immediately.
//! game.tick(32, &[Intent::HardDrop]);
//! assert_eq!(game.pieces_locked(), 1);
//! assert_eq!(game.phase(), Phase::Running);
//! ```

pub mod board;
pub mod clear;
pub mod collision;
pub mod config;
pub mod factory;
pub mod fall_timer;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::Board;
pub use clear::{compact, scan_shift, ClearPolicy};
pub use collision::{drop_row, fits, piece_fits};
pub use config::{ConfigError, GameConfig, PauseTimerPolicy};
pub use factory::PieceFactory;
pub use fall_timer::FallTimer;
pub use game_state::GameState;
pub use pieces::{spawn_mask, Piece};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use shape::ShapeMask;
pub use snapshot::{GameSnapshot, PieceSnapshot};
