//! Depth-first backtracking search over a [`Board`].

use derive_more::{Display, IsVariant};
use doku_core::{Board, Cell, Digit};

/// A depth-first backtracking solver.
///
/// The search always targets the first empty cell in row-major order and
/// tries digits in ascending order, so for a given input the solver visits
/// the same states in the same order every run and, when multiple solutions
/// exist, always produces the same one.
///
/// Legality pruning comes entirely from the board: a candidate digit is
/// tried with [`Board::place`], which rejects conflicts in O(1) via the
/// board's usage sets. Every rejected or retracted placement leaves the
/// board exactly as it was, so a failed search returns the board unchanged.
///
/// # Examples
///
/// ```
/// use doku_core::{Board, Grid};
/// use doku_solver::BacktrackSolver;
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
/// let mut board = Board::from(grid);
/// assert!(BacktrackSolver::new().solve(&mut board));
/// assert!(board.is_solved());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BacktrackSolver {
    _private: (),
}

/// Counters describing the work a solve performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktrackStats {
    /// Number of digits placed during the search, including ones later
    /// retracted.
    pub placements: u64,
    /// Number of placements retracted after a dead end.
    pub backtracks: u64,
}

/// A single step of the search, reported to observers as it happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum SolveEvent {
    /// A digit was placed at a cell.
    #[display("place {digit} at {cell}")]
    Placed {
        /// The cell that received the digit.
        cell: Cell,
        /// The placed digit.
        digit: Digit,
    },
    /// A placement was retracted because the branch under it failed.
    #[display("retract {digit} from {cell}")]
    Retracted {
        /// The cell the digit was removed from.
        cell: Cell,
        /// The retracted digit.
        digit: Digit,
    },
}

/// Receives [`SolveEvent`]s from a running search.
///
/// Implemented for all `FnMut(SolveEvent)` closures, so callers can pass a
/// closure directly to [`BacktrackSolver::solve_with_observer`].
pub trait SolveObserver {
    /// Called once per search step.
    fn on_event(&mut self, event: SolveEvent);
}

impl<F> SolveObserver for F
where
    F: FnMut(SolveEvent),
{
    fn on_event(&mut self, event: SolveEvent) {
        self(event);
    }
}

impl BacktrackSolver {
    /// Creates a solver.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Solves the board in place.
    ///
    /// Returns `true` and leaves the board fully solved if a solution
    /// exists; otherwise returns `false` and leaves the board unchanged.
    pub fn solve(&self, board: &mut Board) -> bool {
        self.solve_with_observer(board, &mut |_event: SolveEvent| {})
    }

    /// Solves the board in place, returning search counters alongside the
    /// outcome.
    pub fn solve_with_stats(&self, board: &mut Board) -> (bool, BacktrackStats) {
        let mut stats = BacktrackStats::default();
        let solved = self.search(board, &mut stats, &mut |_event: SolveEvent| {});
        (solved, stats)
    }

    /// Solves the board in place, reporting every placement and retraction
    /// to `observer` as the search runs.
    pub fn solve_with_observer<O>(&self, board: &mut Board, observer: &mut O) -> bool
    where
        O: SolveObserver,
    {
        let mut stats = BacktrackStats::default();
        self.search(board, &mut stats, observer)
    }

    fn search<O>(&self, board: &mut Board, stats: &mut BacktrackStats, observer: &mut O) -> bool
    where
        O: SolveObserver,
    {
        let Some(cell) = board.first_empty_cell() else {
            // A full board loaded from conflicting givens is not a solution,
            // so fullness alone is not enough here.
            return board.is_solved();
        };
        for digit in Digit::ALL {
            if board.place(cell, digit).is_err() {
                continue;
            }
            stats.placements += 1;
            observer.on_event(SolveEvent::Placed { cell, digit });
            if self.search(board, stats, observer) {
                return true;
            }
            board.remove(cell);
            stats.backtracks += 1;
            observer.on_event(SolveEvent::Retracted { cell, digit });
        }
        false
    }
}
