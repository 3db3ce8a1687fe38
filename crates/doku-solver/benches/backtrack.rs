//! Benchmarks for the backtracking solver.
//!
//! Measures full solves on representative boards, from an already-complete
//! grid (no search) to an empty grid (maximal search space with heavy
//! pruning).
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench backtrack
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use doku_core::{Board, Grid};
use doku_solver::BacktrackSolver;

const CLASSIC: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

const SPARSE: &str = "
    ___ ___ _1_
    4__ ___ ___
    _2_ ___ ___
    ___ _5_ 4_7
    __8 ___ 3__
    __1 _9_ ___
    3__ 4__ 2__
    _5_ 1__ ___
    ___ 8_6 ___
";

const SOLVED: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

fn bench_solve(c: &mut Criterion) {
    let boards = [
        ("solved", SOLVED),
        ("classic", CLASSIC),
        ("sparse", SPARSE),
        ("empty", &".".repeat(81)),
    ];

    let solver = BacktrackSolver::new();

    for (param, text) in boards {
        let board = Board::from(text.parse::<Grid>().unwrap());
        c.bench_with_input(BenchmarkId::new("solve", param), &board, |b, board| {
            b.iter_batched_ref(
                || hint::black_box(board.clone()),
                |board| {
                    let solved = solver.solve(board);
                    hint::black_box(solved)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
