//! Pieces module - tetromino masks and the active piece value

use crate::shape::{Minos, ShapeMask};
use crate::types::{PieceKind, Rotation};

const I_MASK: ShapeMask = ShapeMask::from_rows(&[&[1, 1, 1, 1]]);
const T_MASK: ShapeMask = ShapeMask::from_rows(&[&[1, 1, 1], &[0, 1, 0]]);
const J_MASK: ShapeMask = ShapeMask::from_rows(&[&[1, 1, 1], &[1, 0, 0]]);
const L_MASK: ShapeMask = ShapeMask::from_rows(&[&[1, 1, 1], &[0, 0, 1]]);
const O_MASK: ShapeMask = ShapeMask::from_rows(&[&[1, 1], &[1, 1]]);
const S_MASK: ShapeMask = ShapeMask::from_rows(&[&[1, 1, 0], &[0, 1, 1]]);
const Z_MASK: ShapeMask = ShapeMask::from_rows(&[&[0, 1, 1], &[1, 1, 0]]);

/// Spawn-orientation mask for a kind.
pub fn spawn_mask(kind: PieceKind) -> ShapeMask {
    match kind {
        PieceKind::I => I_MASK,
        PieceKind::O => O_MASK,
        PieceKind::T => T_MASK,
        PieceKind::S => S_MASK,
        PieceKind::Z => Z_MASK,
        PieceKind::J => J_MASK,
        PieceKind::L => L_MASK,
    }
}

/// Spawn anchor x for a mask: centered, rounding toward the left.
pub fn spawn_x(board_width: u8, shape: ShapeMask) -> i8 {
    (board_width / 2) as i8 - (shape.width() / 2) as i8
}

/// A piece: shape, kind and the anchor of its bounding box's top-left cell.
///
/// Pieces are values. Moving or rotating produces a candidate that the game
/// validates before replacing the current piece with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    shape: ShapeMask,
    rotation: Rotation,
}

impl Piece {
    /// A piece in spawn orientation at the given anchor.
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            x,
            y,
            shape: spawn_mask(kind),
            rotation: Rotation::North,
        }
    }

    /// A piece at the spawn anchor of a board `board_width` wide, row 0.
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let x = spawn_x(board_width, spawn_mask(kind));
        Self::new(kind, x, 0)
    }

    pub fn shape(&self) -> ShapeMask {
        self.shape
    }

    /// Number of committed clockwise rotations, mod 4.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Candidate moved by `(dx, dy)`.
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Candidate rotated clockwise in place (same anchor, no kicks).
    pub fn rotated_cw(&self) -> Self {
        Self {
            shape: self.shape.rotate_clockwise(),
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }

    /// Absolute board coordinates of the occupied cells.
    pub fn cells(&self) -> Minos {
        self.shape
            .minos()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Whether any occupied cell is above row 0.
    pub fn is_above_top(&self) -> bool {
        self.cells().iter().any(|&(_, y)| y < 0)
    }
}
