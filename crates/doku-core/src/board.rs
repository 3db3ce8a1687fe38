//! A grid paired with incremental legality tracking.

use derive_more::{Display, Error, IsVariant};

use crate::{cell::Cell, digit::Digit, digit_set::DigitSet, grid::Grid};

/// A 9x9 board that tracks which digits are used in every row, column, and
/// 3x3 block.
///
/// The board keeps a [`DigitSet`] per row, column, and block alongside the
/// grid itself; the sets are updated incrementally on every placement and
/// removal, so legality queries never scan the grid. The invariant is that
/// each set contains exactly the digits present in the corresponding house
/// of the grid.
///
/// Placement is fail-fast: [`place`](Self::place) refuses occupied cells and
/// conflicting digits, leaving the board untouched on error.
///
/// # Examples
///
/// ```
/// use doku_core::{Board, Cell, Digit};
///
/// let mut board = Board::new();
/// let cell = Cell::new(0, 0).unwrap();
/// let five = Digit::new(5).unwrap();
///
/// board.place(cell, five).unwrap();
///
/// // 5 now conflicts along row 0, column 0, and the top-left block.
/// assert!(!board.is_legal(Cell::new(0, 8).unwrap(), five));
/// assert!(!board.is_legal(Cell::new(8, 0).unwrap(), five));
/// assert!(!board.is_legal(Cell::new(2, 2).unwrap(), five));
/// assert!(board.is_legal(Cell::new(4, 4).unwrap(), five));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    rows: [DigitSet; 9],
    cols: [DigitSet; 9],
    blocks: [DigitSet; 9],
}

/// Errors returned by [`Board::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum BoardError {
    /// The target cell already holds a digit.
    #[display("cell {cell} is already occupied")]
    CellOccupied {
        /// The occupied cell.
        cell: Cell,
    },
    /// The digit already appears in the cell's row, column, or block.
    #[display("digit {digit} conflicts with an existing digit seen from {cell}")]
    DigitConflict {
        /// The target cell.
        cell: Cell,
        /// The conflicting digit.
        digit: Digit,
    },
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid: Grid::new(),
            rows: [DigitSet::EMPTY; 9],
            cols: [DigitSet::EMPTY; 9],
            blocks: [DigitSet::EMPTY; 9],
        }
    }

    /// Clears every cell and all usage sets.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Replaces the board contents with the given grid.
    ///
    /// All previous state is discarded and the usage sets are rebuilt from
    /// the grid's filled cells. The grid is taken as-is: duplicate digits in
    /// a house are recorded without complaint, and a board loaded from such
    /// a grid simply has no solution.
    pub fn load(&mut self, grid: &Grid) {
        self.reset();
        for (cell, digit) in grid.filled_cells() {
            self.grid.set(cell, Some(digit));
            self.rows[cell.row() as usize].insert(digit);
            self.cols[cell.col() as usize].insert(digit);
            self.blocks[cell.block() as usize].insert(digit);
        }
    }

    /// Returns `true` if placing `digit` at `cell` would not repeat a digit
    /// in the cell's row, column, or block.
    ///
    /// This only consults the three usage sets; it does not check whether
    /// the cell itself is occupied.
    #[must_use]
    pub const fn is_legal(&self, cell: Cell, digit: Digit) -> bool {
        !self.rows[cell.row() as usize].contains(digit)
            && !self.cols[cell.col() as usize].contains(digit)
            && !self.blocks[cell.block() as usize].contains(digit)
    }

    /// Places `digit` at `cell`, updating all three usage sets.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CellOccupied`] if the cell already holds a
    /// digit, or [`BoardError::DigitConflict`] if the digit is already used
    /// in the cell's row, column, or block. The board is unchanged on error.
    pub fn place(&mut self, cell: Cell, digit: Digit) -> Result<(), BoardError> {
        if self.grid.get(cell).is_some() {
            return Err(BoardError::CellOccupied { cell });
        }
        if !self.is_legal(cell, digit) {
            return Err(BoardError::DigitConflict { cell, digit });
        }
        self.grid.set(cell, Some(digit));
        self.rows[cell.row() as usize].insert(digit);
        self.cols[cell.col() as usize].insert(digit);
        self.blocks[cell.block() as usize].insert(digit);
        Ok(())
    }

    /// Removes the digit at `cell`, updating all three usage sets.
    ///
    /// Returns the removed digit, or `None` if the cell was already empty.
    pub fn remove(&mut self, cell: Cell) -> Option<Digit> {
        let digit = self.grid.get(cell)?;
        self.grid.set(cell, None);
        self.rows[cell.row() as usize].remove(digit);
        self.cols[cell.col() as usize].remove(digit);
        self.blocks[cell.block() as usize].remove(digit);
        Some(digit)
    }

    /// Returns the digit at `cell`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, cell: Cell) -> Option<Digit> {
        self.grid.get(cell)
    }

    /// Returns the first empty cell in row-major order, or `None` if the
    /// board is full.
    #[must_use]
    pub fn first_empty_cell(&self) -> Option<Cell> {
        Cell::ALL
            .into_iter()
            .find(|&cell| self.grid.get(cell).is_none())
    }

    /// Returns the set of digits that could legally be placed at `cell`.
    ///
    /// The result reflects the usage sets as they stand, so for an occupied
    /// cell its own digit is never among the candidates.
    #[must_use]
    pub fn candidates_at(&self, cell: Cell) -> DigitSet {
        let used = self.rows[cell.row() as usize]
            | self.cols[cell.col() as usize]
            | self.blocks[cell.block() as usize];
        DigitSet::FULL.difference(used)
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.grid.is_full()
    }

    /// Returns `true` if the board is a complete, valid solution.
    ///
    /// Checks that all 27 usage sets are full, which holds exactly when
    /// every row, column, and block contains each digit once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.rows
            .iter()
            .chain(&self.cols)
            .chain(&self.blocks)
            .all(|&set| set == DigitSet::FULL)
    }

    /// Returns a copy of the current grid contents.
    #[must_use]
    pub const fn snapshot(&self) -> Grid {
        self.grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Grid> for Board {
    fn from(grid: Grid) -> Self {
        let mut board = Self::new();
        board.load(&grid);
        board
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn cell(row: u8, col: u8) -> Cell {
        Cell::new(row, col).unwrap()
    }

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    const CLASSIC: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    fn classic_board() -> Board {
        Board::from(CLASSIC.parse::<Grid>().unwrap())
    }

    /// Recomputes the usage sets from the grid alone and checks they match
    /// the incrementally maintained ones.
    fn assert_sets_consistent(board: &Board) {
        let mut rows = [DigitSet::EMPTY; 9];
        let mut cols = [DigitSet::EMPTY; 9];
        let mut blocks = [DigitSet::EMPTY; 9];
        for (c, d) in board.snapshot().filled_cells() {
            rows[c.row() as usize].insert(d);
            cols[c.col() as usize].insert(d);
            blocks[c.block() as usize].insert(d);
        }
        assert_eq!(board.rows, rows);
        assert_eq!(board.cols, cols);
        assert_eq!(board.blocks, blocks);
    }

    #[test]
    fn test_place_then_remove_restores_state() {
        let mut board = classic_board();
        let before = board.clone();

        let target = cell(0, 2);
        board.place(target, digit(1)).unwrap();
        assert_eq!(board.get(target), Some(digit(1)));
        assert_sets_consistent(&board);

        assert_eq!(board.remove(target), Some(digit(1)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_rejects_occupied_cell() {
        let mut board = classic_board();
        let before = board.clone();

        let err = board.place(cell(0, 0), digit(1)).unwrap_err();
        assert!(err.is_cell_occupied());
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_rejects_conflicting_digit() {
        let mut board = classic_board();
        let before = board.clone();

        // Row 0 already contains a 5 at (0, 0)
        let err = board.place(cell(0, 2), digit(5)).unwrap_err();
        assert!(err.is_digit_conflict());
        assert_eq!(board, before);
    }

    #[test]
    fn test_is_legal_consults_all_three_houses() {
        let board = classic_board();

        // 5 appears in row 0 at (0, 0)
        assert!(!board.is_legal(cell(0, 2), digit(5)));
        // 9 appears in the top-left block at (2, 1)
        assert!(!board.is_legal(cell(0, 2), digit(9)));
        // 8 appears in column 2 at (2, 2)
        assert!(!board.is_legal(cell(0, 2), digit(8)));
        // 2 is absent from row 0, column 2, and block 0
        assert!(board.is_legal(cell(0, 2), digit(2)));
    }

    #[test]
    fn test_is_legal_ignores_occupancy() {
        let board = classic_board();
        // (0, 0) holds a 5, but legality only consults the usage sets and
        // 2 is unused in row 0, column 0, and block 0.
        assert!(board.is_legal(cell(0, 0), digit(2)));
    }

    #[test]
    fn test_remove_empty_cell_is_noop() {
        let mut board = classic_board();
        let before = board.clone();
        assert_eq!(board.remove(cell(0, 2)), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_first_empty_cell_row_major() {
        let board = classic_board();
        assert_eq!(board.first_empty_cell(), Some(cell(0, 2)));

        let mut board = board;
        board.place(cell(0, 2), digit(4)).unwrap();
        assert_eq!(board.first_empty_cell(), Some(cell(0, 3)));
    }

    #[test]
    fn test_first_empty_cell_none_when_full() {
        let solved: Grid = "
            534 678 912
            672 195 348
            198 342 567
            859 761 423
            426 853 791
            713 924 856
            961 537 284
            287 419 635
            345 286 179
        "
        .parse()
        .unwrap();
        let board = Board::from(solved);
        assert_eq!(board.first_empty_cell(), None);
        assert!(board.is_full());
        assert!(board.is_solved());
    }

    #[test]
    fn test_full_but_invalid_grid_is_not_solved() {
        // All ones: full, but every house repeats
        let grid: Grid = "1".repeat(81).parse().unwrap();
        let board = Board::from(grid);
        assert!(board.is_full());
        assert!(!board.is_solved());
    }

    #[test]
    fn test_load_accepts_duplicate_givens() {
        // Two fives in row 0; load records both without complaint
        let mut text = ".".repeat(81);
        text.replace_range(0..1, "5");
        text.replace_range(4..5, "5");
        let grid: Grid = text.parse().unwrap();

        let board = Board::from(grid);
        assert_eq!(board.get(cell(0, 0)), Some(digit(5)));
        assert_eq!(board.get(cell(0, 4)), Some(digit(5)));
        assert_sets_consistent(&board);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = classic_board();
        board.reset();
        assert_eq!(board, Board::new());
        assert!(board.is_legal(cell(0, 0), digit(5)));
    }

    #[test]
    fn test_candidates_at() {
        let board = classic_board();
        let candidates = board.candidates_at(cell(0, 2));
        // Row 0: {5, 3, 7}; column 2: {8}; block 0: {5, 3, 6, 9, 8}
        let expected: DigitSet = [digit(1), digit(2), digit(4)].into_iter().collect();
        assert_eq!(candidates, expected);
    }

    proptest! {
        /// Any interleaving of placements and removals leaves the usage
        /// sets exactly matching a from-scratch recomputation.
        #[test]
        fn test_usage_sets_match_grid_after_any_op_sequence(
            ops in proptest::collection::vec((0u8..9, 0u8..9, 1u8..=9, proptest::bool::ANY), 0..200),
        ) {
            let mut board = Board::new();
            for (row, col, value, is_place) in ops {
                let cell = Cell::new(row, col).unwrap();
                let digit = Digit::new(value).unwrap();
                if is_place {
                    let before = board.clone();
                    if board.place(cell, digit).is_err() {
                        prop_assert_eq!(&board, &before);
                    }
                } else {
                    board.remove(cell);
                }
            }
            let rebuilt = Board::from(board.snapshot());
            prop_assert_eq!(board, rebuilt);
        }
    }
}
