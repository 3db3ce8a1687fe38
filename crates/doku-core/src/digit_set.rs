//! A set of digits 1-9, backed by a 9-bit mask.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitOr},
};

use crate::digit::Digit;

/// A set of digits 1-9, represented as a bitset.
///
/// Bits 0-8 of the backing `u16` represent digits 1-9 respectively, so
/// membership tests, insertions, and removals are single bit operations.
/// This is what makes the board's "seen digit" bookkeeping O(1) per query.
///
/// # Examples
///
/// ```
/// use doku_core::{Digit, DigitSet};
///
/// let mut seen = DigitSet::EMPTY;
/// seen.insert(Digit::new(3).unwrap());
/// seen.insert(Digit::new(7).unwrap());
///
/// assert_eq!(seen.len(), 2);
/// assert!(seen.contains(Digit::new(3).unwrap()));
/// assert!(!seen.contains(Digit::new(5).unwrap()));
///
/// // Iteration is always ascending
/// let digits: Vec<u8> = seen.iter().map(Digit::value).collect();
/// assert_eq!(digits, vec![3, 7]);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self(0);

    /// The set containing all nine digits.
    pub const FULL: Self = Self(0x1ff);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Adds a digit to the set. Inserting a present digit is a no-op.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= digit.bit();
    }

    /// Removes a digit from the set. Removing an absent digit is a no-op.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !digit.bit();
    }

    /// Returns `true` if the digit is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & digit.bit() != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns an iterator over the digits in the set, in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::value)).finish()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let lowest = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Digit::new(lowest + 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.0.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}
