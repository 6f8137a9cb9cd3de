//! Shape masks and the clockwise rotation transform.
//!
//! A mask is a rectangular grid of at most 4x4 boolean cells packed into a
//! `u16` (row-major, bit `row * 4 + col`). Masks are `Copy`, so rotating or
//! translating a candidate piece never allocates.

use arrayvec::ArrayVec;

/// Largest supported mask side.
pub const MAX_SHAPE_DIM: u8 = 4;

/// Occupied cell offsets `(dx, dy)` of a mask, relative to its top-left corner.
pub type Minos = ArrayVec<(i8, i8), 16>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMask {
    width: u8,
    height: u8,
    bits: u16,
}

impl ShapeMask {
    /// Build a mask from rows of `0`/`1` values.
    ///
    /// Panics if the rows are ragged, empty or larger than 4x4.
    pub const fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        assert!(height > 0 && height <= MAX_SHAPE_DIM as usize, "mask height out of range");
        let width = rows[0].len();
        assert!(width > 0 && width <= MAX_SHAPE_DIM as usize, "mask width out of range");

        let mut bits = 0u16;
        let mut r = 0;
        while r < height {
            assert!(rows[r].len() == width, "ragged mask rows");
            let mut c = 0;
            while c < width {
                if rows[r][c] != 0 {
                    bits |= 1 << (r * MAX_SHAPE_DIM as usize + c);
                }
                c += 1;
            }
            r += 1;
        }

        Self {
            width: width as u8,
            height: height as u8,
            bits,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at `(col, row)` is occupied; out of range is empty.
    #[inline(always)]
    pub fn get(&self, col: u8, row: u8) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        self.bits & (1 << (row * MAX_SHAPE_DIM + col)) != 0
    }

    /// Occupied offsets in row-major order.
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.get(col, row) {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    pub fn cell_count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Rotate 90° clockwise: reverse the row order, then transpose.
    ///
    /// The result is `height` wide and `width` tall, and
    /// `rotated[r][c] == self[height - 1 - c][r]`.
    pub fn rotate_clockwise(self) -> Self {
        let mut bits = 0u16;
        for r in 0..self.width {
            for c in 0..self.height {
                if self.get(r, self.height - 1 - c) {
                    bits |= 1 << (r * MAX_SHAPE_DIM + c);
                }
            }
        }
        Self {
            width: self.height,
            height: self.width,
            bits,
        }
    }

    /// Apply `rotate_clockwise` `turns` times.
    pub fn rotated(self, turns: u8) -> Self {
        (0..turns % 4).fold(self, |mask, _| mask.rotate_clockwise())
    }
}
