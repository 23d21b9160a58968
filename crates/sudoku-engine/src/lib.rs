//! Backtracking Sudoku engine.
//!
//! The grid is a plain 9x9 value store; [`Grid::candidates`] computes the
//! legal digits for a cell from its row, column, and box, and [`Solver`]
//! runs an exhaustive column-major depth-first search over the open cells,
//! mutating the grid in place. [`parse_grid`] and [`load_grid`] read the
//! puzzle text format; [`transform`] carries general matrix transforms
//! that sit next to the grid but are not used by the search.

mod bitset;
mod grid;
mod parse;
mod solver;
pub mod transform;

pub use bitset::BitSet;
pub use grid::{Grid, Position, BOX_SIZE, GRID_SIZE};
pub use parse::{load_grid, parse_grid, ParseError};
pub use solver::Solver;
