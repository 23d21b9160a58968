//! Recursive backtracking traversal.

use crate::{Grid, GRID_SIZE};

/// Exhaustive depth-first solver. Stateless; all search state lives on the
/// call stack and in the grid being solved.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Run the search, filling the grid in place.
    ///
    /// Returns `true` once every cell is filled consistently; the solution
    /// is then in the grid. Returns `false` when the search space is
    /// exhausted, in which case every trial value has been retracted and
    /// the grid is back in its pre-call state. An unsolvable grid is a
    /// normal `false` outcome, not an error.
    pub fn solve(&self, grid: &mut Grid) -> bool {
        solve_cell(grid, 0, 0)
    }
}

/// One step of the column-major sweep: rows advance within the current
/// column, row 9 wraps to the top of the next column, and wrapping past
/// column 8 means every cell has been placed.
///
/// The column-major order is deliberate. It decides which of several valid
/// solutions an under-constrained puzzle resolves to, so it is part of the
/// observable contract.
fn solve_cell(grid: &mut Grid, mut row: usize, mut col: usize) -> bool {
    if row == GRID_SIZE {
        row = 0;
        col += 1;
        if col == GRID_SIZE {
            return true;
        }
    }

    if grid.get(row, col) != 0 {
        return solve_cell(grid, row + 1, col);
    }

    for value in grid.candidates(row, col).iter() {
        grid.set(row, col, value);
        if solve_cell(grid, row + 1, col) {
            // The committed trial stays; a full solution exists downstream.
            return true;
        }
    }

    // No candidate worked out: the cell must not retain a failed trial.
    grid.set(row, col, 0);
    false
}
