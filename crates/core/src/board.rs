//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! kind of the piece that locked there. Cells are stored in one flat
//! row-major vector that is sized once; play never changes the dimensions.
//! Coordinates: (x, y) with x growing to the right and y growing downwards,
//! row 0 is the top.

use crate::clear::ClearPolicy;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Panics on a zero dimension.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        assert!(width <= i8::MAX as u8 && height <= i8::MAX as u8, "board too large");
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Build a board from text rows, top row first.
    ///
    /// `.` is empty, a piece letter (`i`, `O`, ...) locks that kind and `#`
    /// locks an anonymous I cell.
    ///
    /// ```
    /// use blockfall_core::Board;
    ///
    /// let board = Board::from_rows(&["..", "#T"]);
    /// assert!(board.is_occupied(0, 1));
    /// assert!(!board.is_occupied(0, 0));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut board = Self::new(width as u8, height as u8);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), width, "ragged board row {y}");
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    '#' => Some(PieceKind::I),
                    other => Some(
                        PieceKind::from_str(&other.to_string())
                            .unwrap_or_else(|| panic!("unknown board cell {other:?}")),
                    ),
                };
                board.set(x as i8, y as i8, cell);
            }
        }
        board
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Occupancy as seen by collision checks.
    ///
    /// Walls and everything below the floor are occupied. Rows above the top
    /// are open so pieces can spawn partly outside the visible grid.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let w = self.width as usize;
        Some(&self.cells[y * w..(y + 1) * w])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Clear all full rows with the given policy; returns the number cleared.
    pub fn clear_full_rows(&mut self, policy: ClearPolicy) -> usize {
        let width = self.width as usize;
        let cleared = (policy.compactor())(&mut self.cells, width);
        debug_assert_eq!(self.cells.len(), width * self.height as usize);
        cleared
    }

    /// Write `kind` at each absolute coordinate. Out-of-range cells are skipped.
    pub fn write_cells(&mut self, cells: impl IntoIterator<Item = (i8, i8)>, kind: PieceKind) {
        for (x, y) in cells {
            self.set(x, y, Some(kind));
        }
    }

    /// Number of locked cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Write the board as u8 codes (0 = empty, 1..=7 = kind) into `out`.
    pub fn write_codes(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|c| c.map(|k| k.code()).unwrap_or(0)));
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
