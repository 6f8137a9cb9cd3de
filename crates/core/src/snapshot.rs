use crate::pieces::Piece;
use crate::shape::ShapeMask;
use crate::types::{PieceKind, Phase, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub shape: ShapeMask,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation(),
            shape: value.shape(),
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a renderer needs for one frame.
///
/// `board` holds one code per cell, row-major: 0 is empty, otherwise
/// [`PieceKind::code`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    pub board: Vec<u8>,
    pub current: PieceSnapshot,
    pub ghost_y: Option<i8>,
    pub next: PieceSnapshot,
    pub phase: Phase,
    pub episode_id: u32,
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
}

impl GameSnapshot {
    /// Cell code at `(x, y)`, 0 when out of range.
    pub fn cell(&self, x: u8, y: u8) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.board[y as usize * self.width as usize + x as usize]
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let placeholder = PieceSnapshot::from(Piece::spawn(PieceKind::I, BOARD_WIDTH));
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: vec![0; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
            current: placeholder,
            ghost_y: None,
            next: placeholder,
            phase: Phase::Running,
            episode_id: 0,
            score: 0,
            lines: 0,
            pieces_locked: 0,
        }
    }
}
