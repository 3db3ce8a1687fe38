//! The 9x9 grid of optional digits.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

use crate::{cell::Cell, digit::Digit};

/// A 9x9 grid of optional digits, stored in row-major order.
///
/// `Grid` is pure data with no legality bookkeeping. It is the type puzzles
/// are parsed into and solutions are rendered from; wrap it in a
/// [`Board`](crate::Board) to track constraints.
///
/// # Text format
///
/// [`FromStr`] accepts exactly 81 significant characters:
///
/// - Digits `1`-`9` represent filled cells
/// - `.`, `_`, or `0` represent empty cells
/// - Whitespace is ignored
///
/// # Examples
///
/// ```
/// use doku_core::{Cell, Digit, Grid};
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid.get(Cell::new(0, 0).unwrap()), Digit::new(5));
/// assert_eq!(grid.get(Cell::new(0, 2).unwrap()), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at the given cell, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, cell: Cell) -> Option<Digit> {
        self.cells[cell.index()]
    }

    /// Sets or clears the digit at the given cell.
    pub const fn set(&mut self, cell: Cell, digit: Option<Digit>) {
        self.cells[cell.index()] = digit;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over `(cell, digit)` pairs for all filled cells,
    /// in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (Cell, Digit)> {
        Cell::ALL
            .into_iter()
            .filter_map(|cell| self.get(cell).map(|digit| (cell, digit)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when parsing a [`Grid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// A character was neither a digit, an empty-cell marker, nor whitespace.
    #[display("invalid character {ch:?} in grid text")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
    /// The text contained a number of significant characters other than 81.
    #[display("expected 81 cells, found {found}")]
    WrongCellCount {
        /// How many significant characters were found.
        found: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut digits = Vec::with_capacity(81);
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let digit = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch.to_digit(10).unwrap_or(0) as u8;
                    Digit::new(value)
                }
                _ => return Err(ParseGridError::InvalidCharacter { ch }),
            };
            digits.push(digit);
        }
        if digits.len() != 81 {
            return Err(ParseGridError::WrongCellCount {
                found: digits.len(),
            });
        }
        let mut grid = Self::new();
        for (cell, digit) in Cell::ALL.into_iter().zip(digits) {
            grid.set(cell, digit);
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                let cell = Cell::new(row, col).ok_or(fmt::Error)?;
                match self.get(cell) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
