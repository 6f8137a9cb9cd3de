//! Collision checks.
//!
//! [`fits`] is the only placement predicate in the engine. Movement,
//! rotation, spawn placement, hard drop and the ghost query all go through it.

use crate::board::Board;
use crate::pieces::Piece;
use crate::shape::ShapeMask;

/// Whether `shape` anchored at `(x, y)` fits on `board`.
///
/// Each occupied cell must be inside the side walls and above the floor, and
/// must not overlap a locked cell. Cells above row 0 always fit.
pub fn fits(board: &Board, shape: ShapeMask, x: i8, y: i8) -> bool {
    shape.minos().iter().all(|&(dx, dy)| {
        let (cx, cy) = (x + dx, y + dy);
        if cx < 0 || cx >= board.width() as i8 || cy >= board.height() as i8 {
            return false;
        }
        cy < 0 || !board.is_occupied(cx, cy)
    })
}

/// [`fits`] for a piece value.
pub fn piece_fits(board: &Board, piece: &Piece) -> bool {
    fits(board, piece.shape(), piece.x, piece.y)
}

/// Lowest anchor row reachable by moving `piece` straight down.
///
/// Starts from the piece's own row, which is assumed to fit.
pub fn drop_row(board: &Board, piece: &Piece) -> i8 {
    let mut y = piece.y;
    while fits(board, piece.shape(), piece.x, y + 1) {
        y += 1;
    }
    y
}
