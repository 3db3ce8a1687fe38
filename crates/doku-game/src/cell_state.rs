//! Per-cell state as seen by a player.

use derive_more::IsVariant;
use doku_core::Digit;

/// The state of a single cell in a game session.
///
/// Given cells come from the puzzle and can never be modified; filled cells
/// hold player input and can be cleared or left in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// The cell holds a digit from the puzzle.
    Given(Digit),
    /// The cell holds a digit entered by the player.
    Filled(Digit),
    /// The cell is empty.
    Empty,
}

impl CellState {
    /// Returns the digit in the cell, whether given or player-entered.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_digit() {
        let five = Digit::new(5).unwrap();
        assert_eq!(CellState::Given(five).as_digit(), Some(five));
        assert_eq!(CellState::Filled(five).as_digit(), Some(five));
        assert_eq!(CellState::Empty.as_digit(), None);
    }

    #[test]
    fn test_variant_predicates() {
        let five = Digit::new(5).unwrap();
        assert!(CellState::Given(five).is_given());
        assert!(CellState::Filled(five).is_filled());
        assert!(CellState::Empty.is_empty());
    }
}
