//! Core data structures for the doku sudoku solver.
//!
//! This crate provides the board model shared by the solving and game
//! components. The central type is [`Board`], which pairs a 9x9 [`Grid`]
//! with per-row, per-column, and per-block [`DigitSet`] bookkeeping so that
//! every legality query is a few bit operations instead of a grid scan.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: A set of digits backed by a 9-bit mask
//! - [`cell`]: Row/column positions on the 9x9 grid
//! - [`grid`]: The raw 9x9 grid of optional digits, with text parsing
//! - [`board`]: The grid plus incremental legality tracking
//!
//! # Examples
//!
//! ```
//! use doku_core::{Board, Cell, Digit};
//!
//! let mut board = Board::new();
//! board.place(Cell::new(4, 4).unwrap(), Digit::new(5).unwrap()).unwrap();
//!
//! // 5 is no longer legal anywhere in row 4, column 4, or the center block
//! assert!(!board.is_legal(Cell::new(4, 0).unwrap(), Digit::new(5).unwrap()));
//! ```

pub mod board;
pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod grid;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardError},
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
};
