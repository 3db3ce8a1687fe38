//! Manual-play game session.

use doku_core::{Board, BoardError, Cell, Digit, DigitSet, Grid};

use crate::{CellState, GameError};

/// A manual-play session over a puzzle.
///
/// The session tracks which digits came from the puzzle (givens) and which
/// were entered by the player. Givens can never be modified, player input
/// must obey the row/column/block constraints, and a filled cell must be
/// cleared before a different digit can go in.
///
/// # Example
///
/// ```
/// use doku_core::{Cell, Digit, Grid};
/// use doku_game::{CellState, Game};
///
/// let puzzle: Grid = format!("5{}", ".".repeat(80)).parse().unwrap();
/// let mut game = Game::new(puzzle);
///
/// let cell = Cell::new(0, 1).unwrap();
/// game.set_digit(cell, Digit::new(3).unwrap()).unwrap();
/// assert_eq!(game.cell(cell), CellState::Filled(Digit::new(3).unwrap()));
///
/// // 5 is a given in the same row
/// assert!(game.set_digit(Cell::new(0, 2).unwrap(), Digit::new(5).unwrap()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    givens: Grid,
}

impl Game {
    /// Creates a game session from a puzzle grid.
    ///
    /// Every filled cell of the grid becomes a given. The grid is accepted
    /// as-is, even if its givens conflict; such a game simply cannot be won.
    #[must_use]
    pub fn new(puzzle: Grid) -> Self {
        Self {
            board: Board::from(puzzle),
            givens: puzzle,
        }
    }

    /// Returns the state of a cell.
    #[must_use]
    pub fn cell(&self, cell: Cell) -> CellState {
        if let Some(digit) = self.givens.get(cell) {
            return CellState::Given(digit);
        }
        match self.board.get(cell) {
            Some(digit) => CellState::Filled(digit),
            None => CellState::Empty,
        }
    }

    /// Enters a digit into an empty, non-given cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given,
    /// [`GameError::CellOccupied`] if the cell already holds player input,
    /// or [`GameError::ConflictingDigit`] if the digit repeats a digit in
    /// the cell's row, column, or block. The game is unchanged on error.
    pub fn set_digit(&mut self, cell: Cell, digit: Digit) -> Result<(), GameError> {
        if self.givens.get(cell).is_some() {
            return Err(GameError::CannotModifyGivenCell { cell });
        }
        self.board.place(cell, digit).map_err(|err| match err {
            BoardError::CellOccupied { cell } => GameError::CellOccupied { cell },
            BoardError::DigitConflict { cell, digit } => {
                GameError::ConflictingDigit { cell, digit }
            }
        })
    }

    /// Clears player input from a cell.
    ///
    /// Returns the removed digit, or `None` if the cell was already empty.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given.
    pub fn clear_cell(&mut self, cell: Cell) -> Result<Option<Digit>, GameError> {
        if self.givens.get(cell).is_some() {
            return Err(GameError::CannotModifyGivenCell { cell });
        }
        Ok(self.board.remove(cell))
    }

    /// Removes all player input, restoring the puzzle to its givens.
    pub fn reset(&mut self) {
        self.board.load(&self.givens);
    }

    /// Returns the digits that could legally be entered at a cell.
    #[must_use]
    pub fn candidates_at(&self, cell: Cell) -> DigitSet {
        self.board.candidates_at(cell)
    }

    /// Returns `true` if every cell is filled and every row, column, and
    /// block contains each digit exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Returns the current board contents, givens and player input alike.
    #[must_use]
    pub const fn snapshot(&self) -> Grid {
        self.board.snapshot()
    }

    /// Returns the puzzle's given cells.
    #[must_use]
    pub const fn givens(&self) -> Grid {
        self.givens
    }
}
