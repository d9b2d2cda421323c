//! Input text → [`Grid`]
//!
//! The input format is lines separated by `\n`, each line holding integers
//! that are each immediately followed by a single space or comma. Anything
//! on a line that does not match that shape is ignored, so malformed input
//! degrades to fewer cells instead of an error.

use lazy_static::lazy_static;
use regex::Regex;

use super::grid::{Cell, Delimiter, Grid};

lazy_static! {
    // One signed integer immediately followed by its delimiter
    static ref TOKEN_PATTERN: Regex = Regex::new(r"(-?\d+)([ ,])").unwrap();
}

/// Parse input text into a [`Grid`].
///
/// Lines are split on the literal `\n` only; a `\r` before the split point
/// is not stripped, it simply never matches the token pattern. Lines that
/// are empty after the split are skipped, so a trailing newline does not
/// produce a phantom row. Every other line contributes one row containing
/// its matches in left-to-right order. A non-blank line with no match at
/// all still contributes a row, an empty one.
pub fn parse(text: &str) -> Grid {
    let mut grid = Grid::new();

    for line in text.split('\n') {
        if line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for caps in TOKEN_PATTERN.captures_iter(line) {
            let value = caps[1].parse::<i64>();
            let delimiter = caps[2].chars().next().and_then(Delimiter::from_char);
            if let (Ok(value), Some(delimiter)) = (value, delimiter) {
                row.push(Cell::new(value, delimiter));
            }
        }
        grid.push_row(row);
    }

    grid
}
