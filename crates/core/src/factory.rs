//! Piece factory - uniform random kinds at the spawn anchor.
//!
//! No bag: every draw is independent, so repeats and droughts are possible.

use crate::pieces::Piece;
use crate::rng::RandomSource;
use crate::types::PieceKind;

#[derive(Debug, Clone)]
pub struct PieceFactory<R> {
    rng: R,
    board_width: u8,
}

impl<R: RandomSource> PieceFactory<R> {
    pub fn new(rng: R, board_width: u8) -> Self {
        Self { rng, board_width }
    }

    /// Draw a new piece at `(floor(W/2) - floor(shape_width/2), 0)`.
    pub fn next(&mut self) -> Piece {
        let idx = self.rng.next_below(PieceKind::ALL.len() as u32) as usize;
        Piece::spawn(PieceKind::ALL[idx], self.board_width)
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}
