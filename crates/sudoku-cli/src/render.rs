//! Fixed-width text rendering of a grid.

use sudoku_engine::{Grid, BOX_SIZE, GRID_SIZE};

/// Render a labeled, box-drawn grid.
///
/// Cells are clustered in threes with `+-------+` rules between bands, the
/// header carries column indexes, each data row carries its row index, and
/// empty cells are drawn as a blank rather than `0`:
///
/// ```text
///      0 1 2   3 4 5   6 7 8
///    +-------+-------+-------+
///  0 | 3 4 7 | 1 8 2 | 5 6 9 |
///    ...
/// ```
pub fn render_grid(grid: &Grid) -> String {
    // Widths scale with the widest index label and the widest cell value;
    // both come to one column for the 9x9 domain.
    let label_w = decimal_width(GRID_SIZE - 1);
    let cell_w = value_width(grid);

    let pad = " ".repeat(label_w + 2);
    let band_rule = "-".repeat(BOX_SIZE * (cell_w + 1) + 1);
    let mut separator = pad.clone();
    for _ in 0..BOX_SIZE {
        separator.push('+');
        separator.push_str(&band_rule);
    }
    separator.push('+');

    let mut out = String::new();

    out.push_str(&pad);
    for col in 0..GRID_SIZE {
        if col == 0 {
            out.push_str("  ");
        } else if col % BOX_SIZE == 0 {
            out.push_str("   ");
        } else {
            out.push(' ');
        }
        out.push_str(&format!("{col:>cell_w$}"));
    }
    out.push('\n');

    for row in 0..GRID_SIZE {
        if row % BOX_SIZE == 0 {
            out.push_str(&separator);
            out.push('\n');
        }
        out.push_str(&format!(" {row:>label_w$} "));
        for col in 0..GRID_SIZE {
            if col == 0 {
                out.push_str("| ");
            } else if col % BOX_SIZE == 0 {
                out.push_str(" | ");
            } else {
                out.push(' ');
            }
            let value = grid.get(row, col);
            if value == 0 {
                out.push_str(&" ".repeat(cell_w));
            } else {
                out.push_str(&format!("{value:>cell_w$}"));
            }
        }
        out.push_str(" |\n");
    }
    out.push_str(&separator);
    out.push('\n');

    out
}

fn decimal_width(n: usize) -> usize {
    n.to_string().len()
}

fn value_width(grid: &Grid) -> usize {
    (0..GRID_SIZE)
        .flat_map(|r| (0..GRID_SIZE).map(move |c| decimal_width(grid.get(r, c) as usize)))
        .max()
        .unwrap_or(1)
}
