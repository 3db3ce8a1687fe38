//! Cell coordinates on a 9x9 grid.

use std::fmt;

/// A cell position on the 9x9 grid, addressed by row and column.
///
/// Rows and columns are both in `0..9`, with row 0 at the top and column 0
/// on the left. Construction is checked, so a `Cell` value is always a
/// valid board position.
///
/// # Examples
///
/// ```
/// use doku_core::Cell;
///
/// let cell = Cell::new(4, 7).unwrap();
/// assert_eq!(cell.row(), 4);
/// assert_eq!(cell.col(), 7);
/// assert_eq!(cell.block(), 3 + 2);
///
/// assert!(Cell::new(9, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// All 81 cells in row-major order.
    ///
    /// Row-major order is what fixes the solver's deterministic search
    /// order, so the ordering here is part of the contract.
    #[expect(clippy::cast_possible_truncation)]
    pub const ALL: [Self; 81] = {
        let mut cells = [Self { row: 0, col: 0 }; 81];
        let mut index = 0;
        while index < 81 {
            cells[index] = Self {
                row: (index / 9) as u8,
                col: (index % 9) as u8,
            };
            index += 1;
        }
        cells
    };

    /// Creates a cell position, or `None` if either coordinate is out of
    /// range.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 9 && col < 9 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the row index, in `0..9`.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index, in `0..9`.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index of the 3x3 block containing this cell, in `0..9`.
    ///
    /// Blocks are numbered row-major, so block 0 is the top-left 3x3
    /// region and block 8 the bottom-right.
    #[must_use]
    pub const fn block(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the row-major flat index of this cell, in `0..81`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
