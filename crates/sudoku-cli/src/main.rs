//! Command line Sudoku solver.
//!
//! Reads a puzzle from a file argument or standard input, prints it, runs
//! the backtracking search, and prints the solved grid along with the
//! wall-clock time the solve took.

mod render;

use clap::Parser;
use log::{debug, info};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use sudoku_engine::{load_grid, parse_grid, Grid, ParseError, Solver};

/// Solve a Sudoku puzzle read from a file or standard input.
#[derive(Parser, Debug)]
#[command(name = "sudoku-solve", version, about)]
struct Cli {
    /// Path to a puzzle file; standard input is read when omitted.
    puzzle: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ParseError> {
    let mut grid = read_puzzle(cli)?;
    debug!("parsed puzzle with {} open cells", grid.empty_count());

    println!("{}", render::render_grid(&grid));

    let solver = Solver::new();
    let started = Instant::now();
    let solved = solver.solve(&mut grid);
    let elapsed = started.elapsed();

    if solved {
        println!("{}", render::render_grid(&grid));
    } else {
        info!("search space exhausted without a solution");
        println!("NO SOLUTION FOUND.");
    }

    println!("Processed in: {} ms", elapsed.as_millis());

    Ok(())
}

fn read_puzzle(cli: &Cli) -> Result<Grid, ParseError> {
    match &cli.puzzle {
        Some(path) => {
            info!("reading puzzle from {}", path.display());
            load_grid(path)
        }
        None => {
            info!("reading puzzle from standard input");
            parse_grid(io::stdin().lock())
        }
    }
}
