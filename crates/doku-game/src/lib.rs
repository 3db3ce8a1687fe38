//! Manual-play layer over a doku board.
//!
//! A [`Game`] wraps a [`Board`](doku_core::Board) and distinguishes puzzle
//! givens from player input. Givens are immutable for the lifetime of the
//! session; player digits must obey the sudoku constraints and can be
//! cleared at any time.

pub mod cell_state;
pub mod error;
pub mod game;

pub use self::{cell_state::CellState, error::GameError, game::Game};
