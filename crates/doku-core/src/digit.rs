//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A Sudoku digit in the range 1-9.
///
/// The range invariant is established at construction time: [`Digit::new`]
/// returns `None` for any value outside 1-9, so a `Digit` in hand is always
/// valid and never needs re-checking.
///
/// # Examples
///
/// ```
/// use doku_core::Digit;
///
/// let five = Digit::new(5).unwrap();
/// assert_eq!(five.value(), 5);
///
/// assert_eq!(Digit::new(0), None);
/// assert_eq!(Digit::new(10), None);
///
/// // All nine digits in ascending order
/// assert_eq!(Digit::ALL.len(), 9);
/// assert_eq!(Digit::ALL[0].value(), 1);
/// assert_eq!(Digit::ALL[8].value(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// All nine digits in ascending order.
    ///
    /// The order is load-bearing: the backtracking search tries candidate
    /// digits in exactly this order, which makes solving deterministic.
    pub const ALL: [Self; 9] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Creates a digit from a value in the range 1-9.
    ///
    /// Returns `None` for any other value, including 0 (the conventional
    /// "empty cell" marker in puzzle inputs).
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if matches!(value, 1..=9) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    pub(crate) const fn bit(self) -> u16 {
        1 << (self.0 - 1)
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
