//! Grid data model: delimiters, cells, and the row container

use std::fmt;

/// Delimiter characters recognized after a numeric token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Space,
    Comma,
}

impl Delimiter {
    /// The character this delimiter renders as
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Space => ' ',
            Delimiter::Comma => ',',
        }
    }

    /// Returns `None` for anything other than the two recognized characters
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Delimiter::Space),
            ',' => Some(Delimiter::Comma),
            _ => None,
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One parsed numeric value plus its original trailing delimiter.
///
/// The delimiter carries no numeric meaning; it is kept so the output can
/// echo the input format byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub value: i64,
    pub delimiter: Delimiter,
}

impl Cell {
    pub fn new(value: i64, delimiter: Delimiter) -> Self {
        Cell { value, delimiter }
    }

    /// A missing sample, encoded as `0` in the source format
    pub fn is_missing(&self) -> bool {
        self.value == 0
    }
}

/// Ordered rows of cells. Rows may have unequal lengths, so every neighbor
/// lookup is bounds-checked against the row's own length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Grid { rows: Vec::new() }
    }

    /// Append a row. Empty rows are kept; they stand in for input lines
    /// that contained no delimiter-terminated token.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `row`, or 0 when the row does not exist
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Cell lookup; `None` when either index is out of range
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Value lookup; `None` when the cell is absent
    pub fn value_at(&self, row: usize, col: usize) -> Option<i64> {
        self.get(row, col).map(|c| c.value)
    }

    /// Overwrite a cell's value, leaving its delimiter untouched.
    /// Out-of-range coordinates are ignored.
    pub fn set_value(&mut self, row: usize, col: usize, value: i64) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            cell.value = value;
        }
    }

    /// Total number of cells across all rows
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Number of missing (`0`) cells
    pub fn missing_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|c| c.is_missing())
            .count()
    }

    /// Coordinates of missing cells, row-major
    pub fn missing_cells(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if cell.is_missing() {
                    out.push((i, j));
                }
            }
        }
        out
    }

    /// Shortest and longest row lengths; `None` for an empty grid
    pub fn width_range(&self) -> Option<(usize, usize)> {
        let mut lens = self.rows.iter().map(Vec::len);
        let first = lens.next()?;
        let (mut min, mut max) = (first, first);
        for len in lens {
            min = min.min(len);
            max = max.max(len);
        }
        Some((min, max))
    }

    /// True when rows have differing lengths
    pub fn is_ragged(&self) -> bool {
        self.width_range().map_or(false, |(min, max)| min != max)
    }
}
