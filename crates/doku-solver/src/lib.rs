//! Backtracking solver for doku boards.
//!
//! The solver performs a depth-first search over the empty cells of a
//! [`Board`](doku_core::Board), relying on the board's incremental usage
//! sets for constant-time legality checks. See [`BacktrackSolver`] for the
//! search order guarantees.
//!
//! Callers that want to watch the search unfold can pass a
//! [`SolveObserver`] to [`BacktrackSolver::solve_with_observer`]; every
//! placement and retraction is reported as a [`SolveEvent`].

pub mod backtrack;

pub use self::backtrack::{BacktrackSolver, BacktrackStats, SolveEvent, SolveObserver};
