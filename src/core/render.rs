//! [`Grid`] → output text

use std::fmt::Write;

use super::grid::Grid;

/// Render the grid back to its textual form: each value in decimal,
/// immediately followed by its stored delimiter, one `\n` after every row
/// and nothing else. An empty grid renders as the empty string.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        for cell in row {
            let _ = write!(out, "{}{}", cell.value, cell.delimiter.as_char());
        }
        out.push('\n');
    }
    out
}
