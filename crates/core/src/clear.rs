//! Line clearing - full-row removal and compaction
//!
//! Both policies operate in place on a row-major cell slice and share one
//! signature, so the board can swap them without caring which one runs:
//!
//! - [`compact`]: conventional two-pointer compaction. Non-full rows keep
//!   their relative order and slide down over the cleared rows; the freed
//!   rows at the top are emptied.
//! - [`scan_shift`]: top-to-bottom scan that, for each full row, removes it
//!   from the sequence and reinserts an empty row at index 0 before moving on.
//!
//! The scan never revisits a row it already passed (the row that lands on the
//! current index after a shift came from above), so the two policies agree on
//! every board.

use serde::{Deserialize, Serialize};

use crate::types::Cell;

/// Row compaction function: `(cells, width) -> rows_cleared`.
pub type Compactor = fn(&mut [Cell], usize) -> usize;

/// Which compaction algorithm a board uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearPolicy {
    #[default]
    Compact,
    ScanShift,
}

impl ClearPolicy {
    pub fn compactor(self) -> Compactor {
        match self {
            ClearPolicy::Compact => compact,
            ClearPolicy::ScanShift => scan_shift,
        }
    }
}

fn row_full(row: &[Cell]) -> bool {
    row.iter().all(|c| c.is_some())
}

/// Remove full rows, slide the rest down, empty the top. Returns rows cleared.
pub fn compact(cells: &mut [Cell], width: usize) -> usize {
    assert!(width > 0 && cells.len() % width == 0, "cell slice is not a whole number of rows");
    let height = cells.len() / width;
    let mut write_y = height;

    // Scan from bottom to top, moving kept rows to the write position.
    for read_y in (0..height).rev() {
        let start = read_y * width;
        if row_full(&cells[start..start + width]) {
            continue;
        }
        write_y -= 1;
        if write_y != read_y {
            cells.copy_within(start..start + width, write_y * width);
        }
    }

    cells[..write_y * width].fill(None);
    write_y
}

/// Remove-and-reinsert scan from the top. Returns rows cleared.
pub fn scan_shift(cells: &mut [Cell], width: usize) -> usize {
    assert!(width > 0 && cells.len() % width == 0, "cell slice is not a whole number of rows");
    let height = cells.len() / width;
    let mut cleared = 0;

    for y in 0..height {
        let start = y * width;
        if !row_full(&cells[start..start + width]) {
            continue;
        }
        // Rows 0..y move down one, row y lands at the top and is emptied.
        cells[..start + width].rotate_right(width);
        cells[..width].fill(None);
        cleared += 1;
    }

    cleared
}
