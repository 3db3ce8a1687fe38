//! Errors reported by game operations.

use derive_more::{Display, Error, IsVariant};
use doku_core::{Cell, Digit};

/// Errors returned by [`Game`](crate::Game) input operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, IsVariant)]
pub enum GameError {
    /// The target cell is a given and cannot be modified.
    #[display("cell {cell} is a given and cannot be modified")]
    CannotModifyGivenCell {
        /// The given cell.
        cell: Cell,
    },
    /// The target cell already holds player input; clear it first.
    #[display("cell {cell} already holds a digit")]
    CellOccupied {
        /// The occupied cell.
        cell: Cell,
    },
    /// The digit repeats a digit in the cell's row, column, or block.
    #[display("digit {digit} conflicts with an existing digit seen from {cell}")]
    ConflictingDigit {
        /// The target cell.
        cell: Cell,
        /// The rejected digit.
        digit: Digit,
    },
}
