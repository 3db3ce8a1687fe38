//! Command-line sudoku solver.
//!
//! Reads a puzzle from an argument, a file, or standard input, solves it
//! with the backtracking solver, and prints the solution grid.
//!
//! # Usage
//!
//! Solve a puzzle given as 81 characters (digits 1-9, with `.`, `_`, or `0`
//! for empty cells; whitespace is ignored):
//!
//! ```sh
//! doku "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! ```
//!
//! Read the puzzle from a file, print search counters, and show every
//! placement and retraction as the search runs:
//!
//! ```sh
//! doku --file puzzle.txt --stats --trace
//! ```
//!
//! Play the puzzle interactively instead of solving it:
//!
//! ```sh
//! doku --play "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! ```

use std::{
    fs,
    io::{self, BufRead as _, Write as _},
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use derive_more::{Display, Error, From};
use doku_core::{Board, Cell, Digit, Grid, ParseGridError};
use doku_game::{Game, GameError};
use doku_solver::{BacktrackSolver, BacktrackStats, SolveEvent};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle as 81 characters; digits 1-9 fill cells, `.`/`_`/`0` leave
    /// them empty, whitespace is ignored.
    #[arg(value_name = "PUZZLE", conflicts_with = "file")]
    puzzle: Option<String>,

    /// Read the puzzle from a file instead of the command line.
    #[arg(short, long, value_name = "FILE")]
    file: Option<String>,

    /// Print search counters and elapsed time after solving.
    #[arg(long)]
    stats: bool,

    /// Print every placement and retraction as the search runs.
    #[arg(long)]
    trace: bool,

    /// Play the puzzle interactively instead of solving it.
    #[arg(long, conflicts_with_all = ["stats", "trace"])]
    play: bool,
}

#[derive(Debug, Display, Error, From)]
enum CliError {
    #[display("failed to read puzzle: {_0}")]
    Io(io::Error),
    #[display("invalid puzzle: {_0}")]
    Parse(ParseGridError),
}

fn main() -> ExitCode {
    let args = Args::parse();

    better_panic::install();
    let mut logger = env_logger::Builder::from_default_env();
    if args.trace {
        // Solver events are logged at debug level
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("doku: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, CliError> {
    let grid = read_puzzle(args)?;
    log::debug!("loaded puzzle with {} givens", grid.filled_count());

    if args.play {
        return play(grid);
    }
    Ok(solve(args, grid))
}

fn read_puzzle(args: &Args) -> Result<Grid, CliError> {
    let text = if let Some(puzzle) = &args.puzzle {
        puzzle.clone()
    } else if let Some(path) = &args.file {
        fs::read_to_string(path)?
    } else {
        io::read_to_string(io::stdin())?
    };
    Ok(text.parse()?)
}

fn solve(args: &Args, grid: Grid) -> ExitCode {
    let mut board = Board::from(grid);
    let solver = BacktrackSolver::new();

    let start = Instant::now();
    let (solved, stats) = if args.trace {
        let mut stats = BacktrackStats::default();
        let solved = solver.solve_with_observer(&mut board, &mut |event: SolveEvent| {
            log::debug!("{event}");
            match event {
                SolveEvent::Placed { .. } => stats.placements += 1,
                SolveEvent::Retracted { .. } => stats.backtracks += 1,
            }
        });
        (solved, stats)
    } else {
        solver.solve_with_stats(&mut board)
    };
    let elapsed = start.elapsed();

    if args.stats {
        eprintln!(
            "placements: {}, backtracks: {}, elapsed: {elapsed:?}",
            stats.placements, stats.backtracks
        );
    }

    if solved {
        print_grid(&board.snapshot());
        ExitCode::SUCCESS
    } else {
        eprintln!("doku: puzzle has no solution");
        ExitCode::FAILURE
    }
}

fn play(grid: Grid) -> Result<ExitCode, CliError> {
    let mut game = Game::new(grid);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_grid(&game.snapshot());
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(ExitCode::SUCCESS);
        }
        match run_command(&mut game, line.trim()) {
            Ok(Command::Continue) => {}
            Ok(Command::Quit) => return Ok(ExitCode::SUCCESS),
            Err(err) => {
                eprintln!("doku: {err}");
                continue;
            }
        }

        print_grid(&game.snapshot());
        if game.is_solved() {
            println!("solved!");
            return Ok(ExitCode::SUCCESS);
        }
    }
}

enum Command {
    Continue,
    Quit,
}

#[derive(Debug, Display, Error)]
enum CommandError {
    #[display("{_0}")]
    Game(GameError),
    #[display(
        "commands: set ROW COL DIGIT | clear ROW COL | hint ROW COL | solve | reset | quit"
    )]
    Usage,
}

impl From<GameError> for CommandError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

fn run_command(game: &mut Game, line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    match words.next() {
        Some("set") => {
            let (cell, digit) = parse_cell_digit(&mut words)?;
            game.set_digit(cell, digit)?;
        }
        Some("clear") => {
            let cell = parse_cell(&mut words)?;
            game.clear_cell(cell)?;
        }
        Some("hint") => {
            let cell = parse_cell(&mut words)?;
            let candidates: Vec<_> = game
                .candidates_at(cell)
                .iter()
                .map(|digit| digit.to_string())
                .collect();
            println!("candidates at {cell}: {}", candidates.join(", "));
        }
        Some("solve") => {
            let mut board = Board::from(game.snapshot());
            if BacktrackSolver::new().solve(&mut board) {
                *game = Game::new(board.snapshot());
            } else {
                println!("no solution from the current position");
            }
        }
        Some("reset") => game.reset(),
        Some("quit") => return Ok(Command::Quit),
        Some(_) | None => return Err(CommandError::Usage),
    }
    Ok(Command::Continue)
}

fn parse_cell<'a, I>(words: &mut I) -> Result<Cell, CommandError>
where
    I: Iterator<Item = &'a str>,
{
    let row = parse_index(words.next())?;
    let col = parse_index(words.next())?;
    Cell::new(row, col).ok_or(CommandError::Usage)
}

fn parse_cell_digit<'a, I>(words: &mut I) -> Result<(Cell, Digit), CommandError>
where
    I: Iterator<Item = &'a str>,
{
    let cell = parse_cell(words)?;
    let digit =
        parse_index(words.next()).and_then(|value| Digit::new(value).ok_or(CommandError::Usage))?;
    Ok((cell, digit))
}

fn parse_index(word: Option<&str>) -> Result<u8, CommandError> {
    word.and_then(|word| word.parse().ok())
        .ok_or(CommandError::Usage)
}

fn print_grid(grid: &Grid) {
    for row in 0..9 {
        if row > 0 && row % 3 == 0 {
            println!("---+---+---");
        }
        let mut line = String::new();
        for col in 0..9 {
            if col > 0 && col % 3 == 0 {
                line.push('|');
            }
            let Some(cell) = Cell::new(row, col) else {
                continue;
            };
            match grid.get(cell) {
                Some(digit) => line.push_str(&digit.to_string()),
                None => line.push('.'),
            }
        }
        println!("{line}");
    }
}
