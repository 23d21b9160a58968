//! Puzzle text parsing.
//!
//! A puzzle is nine data lines of exactly nine characters from `[1-9_]`,
//! with no digit repeated within a line. Empty lines and lines starting
//! with `#` are comments; all whitespace inside a data line is stripped
//! before validation. Reading stops once nine rows are collected.

use crate::{Grid, GRID_SIZE};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal outcomes of reading a puzzle. None of these are recoverable for
/// the current run; the solver is never reached.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("the file ({path}) does not exist")]
    MissingInput { path: PathBuf },

    #[error("puzzle row {row} (line {line_no} in input) is invalid: {line}")]
    MalformedLine {
        /// Index of the grid row the line would have filled.
        row: usize,
        /// 1-based line number in the raw input, comments included.
        line_no: usize,
        line: String,
    },

    #[error("insufficient number of valid input lines: {rows}")]
    InsufficientInput { rows: usize },

    #[error("I/O failure while reading puzzle input")]
    Io(#[from] io::Error),
}

/// Read a grid from a puzzle file. A nonexistent path is reported as its
/// own error kind; any other open or read failure surfaces as `Io`.
pub fn load_grid(path: impl AsRef<Path>) -> Result<Grid, ParseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ParseError::MissingInput {
                path: path.to_path_buf(),
            }
        } else {
            ParseError::Io(e)
        }
    })?;
    parse_grid(BufReader::new(file))
}

/// Read a grid from any line source, e.g. a locked stdin handle.
pub fn parse_grid(reader: impl BufRead) -> Result<Grid, ParseError> {
    let mut grid = Grid::new();
    let mut rows = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        if rows == GRID_SIZE {
            break;
        }
        let raw = line?;
        if raw.is_empty() || raw.starts_with('#') {
            continue;
        }

        let stripped: String = raw.chars().filter(|ch| !ch.is_whitespace()).collect();
        let values = parse_row(&stripped).ok_or_else(|| ParseError::MalformedLine {
            row: rows,
            line_no: idx + 1,
            line: raw.clone(),
        })?;

        for (col, value) in values.into_iter().enumerate() {
            grid.set(rows, col, value);
        }
        rows += 1;
    }

    if rows < GRID_SIZE {
        return Err(ParseError::InsufficientInput { rows });
    }

    Ok(grid)
}

/// Validate one stripped data line: nine characters from `[1-9_]`, digits
/// unique within the line. `_` maps to the empty-cell value 0.
fn parse_row(line: &str) -> Option<[u8; GRID_SIZE]> {
    let mut values = [0u8; GRID_SIZE];
    let mut seen = 0u16;
    let mut len = 0usize;

    for ch in line.chars() {
        if len == GRID_SIZE {
            return None;
        }
        match ch {
            '_' => {}
            '1'..='9' => {
                let digit = ch as u8 - b'0';
                let bit = 1u16 << digit;
                if seen & bit != 0 {
                    return None;
                }
                seen |= bit;
                values[len] = digit;
            }
            _ => return None,
        }
        len += 1;
    }

    (len == GRID_SIZE).then_some(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "# reference puzzle
___1_2__9
5____4_3_

2__3___47
___7_5_9_
4_3_2___1
_9___1__4
7____8_15
__1__3_7_
9_4___6__
# trailing comment
";

    #[test]
    fn parses_well_formed_input() {
        let grid = parse_grid(WELL_FORMED.as_bytes()).unwrap();
        assert_eq!(grid.get(0, 3), 1);
        assert_eq!(grid.get(0, 8), 9);
        assert_eq!(grid.get(0, 0), 0);
        assert_eq!(grid.get(1, 0), 5);
        assert_eq!(grid.get(8, 0), 9);
        assert_eq!(grid.get(8, 6), 6);
    }

    #[test]
    fn strips_whitespace_inside_data_lines() {
        let input = "\
_ _ _ 1 _ 2 _ _ 9
5____4_3_
2__3___47
___7_5_9_
4_3_2___1
_9___1__4
7____8_15
__1__3_7_
\t9_4___6__
";
        let grid = parse_grid(input.as_bytes()).unwrap();
        assert_eq!(grid.get(0, 3), 1);
        assert_eq!(grid.get(8, 0), 9);
    }

    #[test]
    fn rejects_overlong_line() {
        let input = WELL_FORMED.replace("2__3___47", "2__3___475");
        match parse_grid(input.as_bytes()) {
            Err(ParseError::MalformedLine { row, line_no, line }) => {
                assert_eq!(row, 2);
                assert_eq!(line_no, 5);
                assert_eq!(line, "2__3___475");
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn rejects_short_line() {
        let input = WELL_FORMED.replace("2__3___47", "2__3___4");
        assert!(matches!(
            parse_grid(input.as_bytes()),
            Err(ParseError::MalformedLine { row: 2, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_digit_within_line() {
        let input = WELL_FORMED.replace("___7_5_9_", "__57_5_9_");
        assert!(matches!(
            parse_grid(input.as_bytes()),
            Err(ParseError::MalformedLine { row: 3, .. })
        ));
    }

    #[test]
    fn rejects_foreign_character() {
        let input = WELL_FORMED.replace("4_3_2___1", "4_3_x___1");
        assert!(matches!(
            parse_grid(input.as_bytes()),
            Err(ParseError::MalformedLine { .. })
        ));
    }

    #[test]
    fn whitespace_only_line_is_not_a_comment() {
        // Only raw-empty lines are skipped; a line of blanks strips to
        // nothing and fails the length check.
        let input = "   \n";
        assert!(matches!(
            parse_grid(input.as_bytes()),
            Err(ParseError::MalformedLine { row: 0, line_no: 1, .. })
        ));
    }

    #[test]
    fn too_few_rows_is_insufficient_input() {
        let mut input = String::from("# short puzzle\n");
        for _ in 0..8 {
            input.push_str("_________\n");
        }
        assert!(matches!(
            parse_grid(input.as_bytes()),
            Err(ParseError::InsufficientInput { rows: 8 })
        ));
    }

    #[test]
    fn stops_reading_after_nine_rows() {
        let mut input = String::new();
        for _ in 0..9 {
            input.push_str("_________\n");
        }
        input.push_str("this line is never validated\n");
        assert!(parse_grid(input.as_bytes()).is_ok());
    }

    #[test]
    fn missing_file_is_its_own_error_kind() {
        match load_grid("no/such/puzzle.dat") {
            Err(ParseError::MissingInput { path }) => {
                assert_eq!(path, PathBuf::from("no/such/puzzle.dat"));
            }
            other => panic!("expected MissingInput, got {other:?}"),
        }
    }

    #[test]
    fn cross_line_duplicates_parse_cleanly() {
        // Two 5s in column 0: per-line validation cannot see it, so the
        // grid parses and is simply unsolvable later.
        let input = "\
5________
5________
_________
_________
_________
_________
_________
_________
_________
";
        let grid = parse_grid(input.as_bytes()).unwrap();
        assert!(!grid.is_consistent());
    }
}
