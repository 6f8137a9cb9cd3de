//! Shared types and constants for the blockfall engine.
//!
//! Everything in here is plain data with no dependencies, so the same
//! vocabulary can be used by the core engine, the terminal view and the
//! key mapper.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 10 | Columns |
//! | `BOARD_HEIGHT` | 20 | Rows, row 0 is the top |
//! | `FALL_INTERVAL_MS` | 500 | Automatic descent interval |
//! | `POINTS_PER_LINE` | 100 | Score per cleared row |
//! | `FRAME_MS` | 16 | Driver frame pacing (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Intent, PieceKind, Rotation};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Intent::from_str("hardDrop"), Some(Intent::HardDrop));
//! ```

/// Default board width in cells
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells
pub const BOARD_HEIGHT: u8 = 20;

/// Default automatic fall interval in milliseconds
pub const FALL_INTERVAL_MS: u32 = 500;

/// Default points awarded per cleared row
pub const POINTS_PER_LINE: u32 = 100;

/// Frame pacing used by the terminal driver (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in the order used for random selection.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("I"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Non-zero cell code used in snapshots (0 is reserved for empty).
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }

    /// Display color as `(r, g, b)`.
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0, 255, 255),
            PieceKind::L => (255, 165, 0),
            PieceKind::J => (0, 0, 255),
            PieceKind::O => (255, 255, 0),
            PieceKind::S => (0, 255, 0),
            PieceKind::Z => (255, 0, 0),
            PieceKind::T => (128, 0, 128),
        }
    }
}

/// Rotation counter of a piece.
///
/// This is observational only: the shape mask of a piece is the source of
/// truth, and the counter is advanced in the same step that replaces it.
/// The cycle goes North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Number of clockwise quarter turns from North.
    pub fn turns(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Decoded player intents consumed by the engine.
///
/// Quitting is not an intent: the driver owns the loop and simply stops
/// ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Drop piece to the lowest fitting row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Toggle between running and paused
    TogglePause,
    /// Start a new game from scratch
    Restart,
}

impl Intent {
    /// Parse intent from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("togglepause"), Some(Intent::TogglePause));
    /// assert_eq!(Intent::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "harddrop" => Some(Intent::HardDrop),
            "rotatecw" => Some(Intent::RotateCw),
            "togglepause" | "pause" => Some(Intent::TogglePause),
            "restart" => Some(Intent::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::HardDrop => "hardDrop",
            Intent::RotateCw => "rotateCw",
            Intent::TogglePause => "togglePause",
            Intent::Restart => "restart",
        }
    }

    /// Whether the intent moves or drops the active piece.
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            Intent::MoveLeft
                | Intent::MoveRight
                | Intent::SoftDrop
                | Intent::HardDrop
                | Intent::RotateCw
        )
    }
}

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Running,
    Paused,
    /// Terminal until restart.
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "game_over",
        }
    }
}

/// A cell on the board: `None` is empty, `Some(kind)` is a locked cell.
pub type Cell = Option<PieceKind>;

/// Outcome of a single lock attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Anchor the piece locked at.
    pub x: i8,
    pub y: i8,
    pub lines_cleared: u32,
    pub points: u32,
    /// The piece had a cell above row 0; nothing was written.
    pub topped_out: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dimensions_and_timing() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 20);
        assert_eq!(FALL_INTERVAL_MS, 500);
        assert_eq!(POINTS_PER_LINE, 100);
    }

    #[test]
    fn piece_codes_roundtrip_through_all() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(PieceKind::from_code(0), None);
        assert_eq!(PieceKind::from_code(8), None);
    }

    #[test]
    fn rotation_turns_follow_cycle() {
        let mut r = Rotation::North;
        for expected in [1, 2, 3, 0] {
            r = r.rotate_cw();
            assert_eq!(r.turns(), expected);
        }
    }

    #[test]
    fn only_piece_intents_are_movement() {
        assert!(Intent::HardDrop.is_movement());
        assert!(Intent::RotateCw.is_movement());
        assert!(!Intent::TogglePause.is_movement());
        assert!(!Intent::Restart.is_movement());
    }
}
