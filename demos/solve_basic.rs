//! Basic example of driving the solver engine directly.

use sudoku_engine::{parse_grid, Solver};

const PUZZLE: &str = "\
# classic starter puzzle
53__7____
6__195___
_98____6_
8___6___3
4__8_3__1
7___2___6
_6____28_
___419__5
____8__79
";

fn main() {
    let mut grid = parse_grid(PUZZLE.as_bytes()).expect("demo puzzle is well formed");

    println!("Puzzle:\n{grid}");

    let solver = Solver::new();
    if solver.solve(&mut grid) {
        println!("Solved:\n{grid}");
    } else {
        println!("No solution found.");
    }
}
