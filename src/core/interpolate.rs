//! In-place interpolation of missing grid samples

use super::grid::Grid;
use crate::utils::error::{FillError, FillResult, FillWarning};

/// What to do with a missing cell whose neighborhood holds no valid sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnfillablePolicy {
    /// Leave the original `0` in place and record a warning
    Keep,
    /// Write the given sentinel value and record a warning
    Sentinel(i64),
    /// Abort the sweep with [`FillError::Unfillable`]
    Fail,
}

/// Interpolation options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillOptions {
    pub on_unfillable: UnfillablePolicy,
}

impl Default for FillOptions {
    fn default() -> Self {
        FillOptions {
            on_unfillable: UnfillablePolicy::Keep,
        }
    }
}

impl FillOptions {
    /// Preset that fails the whole pipeline on the first unfillable cell
    pub fn strict() -> Self {
        FillOptions {
            on_unfillable: UnfillablePolicy::Fail,
        }
    }

    /// Preset that marks unfillable cells with a sentinel value
    pub fn sentinel(value: i64) -> Self {
        FillOptions {
            on_unfillable: UnfillablePolicy::Sentinel(value),
        }
    }
}

/// Average of the valid neighbors of `(row, col)`, rounded half away from
/// zero. `None` when no neighbor qualifies.
///
/// A neighbor is absent when its row does not exist or the column falls
/// outside that row's own length; it is invalid when its stored value is
/// `0` at read time. Values are read from the grid as it is now, so during
/// a sweep an already-filled neighbor counts at its new value.
pub fn neighbor_average(grid: &Grid, row: usize, col: usize) -> Option<i64> {
    let left = col.checked_sub(1).and_then(|c| grid.value_at(row, c));
    let right = grid.value_at(row, col + 1);
    let up = row.checked_sub(1).and_then(|r| grid.value_at(r, col));
    let down = grid.value_at(row + 1, col);

    let mut sum = 0i64;
    let mut count = 0i64;
    for value in [left, right, up, down].into_iter().flatten() {
        if value != 0 {
            sum += value;
            count += 1;
        }
    }

    if count == 0 {
        None
    } else {
        Some((sum as f64 / count as f64).round() as i64)
    }
}

/// Fill every missing cell in a single forward sweep: rows top to bottom,
/// cells left to right, mutating the grid as it goes. Delimiters are never
/// touched.
///
/// The sweep is deliberately order-dependent: a cell filled earlier in the
/// pass is read at its new value by any later cell it neighbors. Callers
/// that need the original values must clone the grid first. Under
/// [`UnfillablePolicy::Sentinel`] a non-zero sentinel likewise participates
/// in later averages like any other value.
pub fn fill_missing(grid: &mut Grid, options: &FillOptions) -> FillResult<Vec<FillWarning>> {
    let mut warnings = Vec::new();

    for i in 0..grid.row_count() {
        for j in 0..grid.row_len(i) {
            if grid.value_at(i, j) != Some(0) {
                continue;
            }

            match neighbor_average(grid, i, j) {
                Some(value) => grid.set_value(i, j, value),
                None => match options.on_unfillable {
                    UnfillablePolicy::Keep => {
                        warnings.push(FillWarning::unfillable(i, j));
                    }
                    UnfillablePolicy::Sentinel(sentinel) => {
                        grid.set_value(i, j, sentinel);
                        warnings.push(FillWarning::unfillable(i, j));
                    }
                    UnfillablePolicy::Fail => {
                        return Err(FillError::Unfillable { row: i, col: j });
                    }
                },
            }
        }
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse::parse;
    use crate::core::render::render_grid;
    use pretty_assertions::assert_eq;

    fn fill(text: &str) -> String {
        let mut grid = parse(text);
        let _ = fill_missing(&mut grid, &FillOptions::default());
        render_grid(&grid)
    }

    #[test]
    fn test_interior_cell_averages_all_four() {
        // (1,1) has neighbors 2, 4, 1, 5 -> 12 / 4 = 3
        assert_eq!(fill("9 1 9 \n2 0 4 \n9 5 9 \n"), "9 1 9 \n2 3 4 \n9 5 9 \n");
    }

    #[test]
    fn test_corner_cell_uses_available_neighbors() {
        // (0,0): right = 5, down = 5, left/top absent -> 5
        assert_eq!(fill("0 5 \n5 9 \n"), "5 5 \n5 9 \n");
    }

    #[test]
    fn test_zero_neighbors_are_excluded() {
        // (0,1): left = 1, right = 0 invalid -> average of {1} = 1;
        // (0,2) then averages the fresh 1 with 8 -> 4.5 -> 5
        assert_eq!(fill("1 0 0 8 \n"), "1 1 5 8 \n");
    }

    #[test]
    fn test_sweep_reads_already_filled_values() {
        // (0,1) fills to 2 from its left neighbor; (0,2) then reads that
        // freshly written 2. A snapshot sweep would find no valid neighbor.
        assert_eq!(fill("2 0 0 \n"), "2 2 2 \n");
    }

    #[test]
    fn test_ragged_neighbor_lookup() {
        // (1,0) is missing; row 0 has no column past 0, row 2 is absent
        assert_eq!(fill("7 \n0 3 \n"), "7 \n5 3 \n");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        let mut grid = parse("0 1,\n2 3,\n");
        let _ = fill_missing(&mut grid, &FillOptions::default());
        // (1 + 2) / 2 = 1.5 -> 2
        assert_eq!(grid.value_at(0, 0), Some(2));

        let mut grid = parse("0 -1,\n-2 -3,\n");
        let _ = fill_missing(&mut grid, &FillOptions::default());
        // (-1 + -2) / 2 = -1.5 -> -2
        assert_eq!(grid.value_at(0, 0), Some(-2));
    }

    #[test]
    fn test_keep_policy_leaves_zero_and_warns() {
        let mut grid = parse("0,\n");
        let warnings = fill_missing(&mut grid, &FillOptions::default()).unwrap();
        assert_eq!(grid.value_at(0, 0), Some(0));
        assert_eq!(warnings.len(), 1);
        assert_eq!((warnings[0].row, warnings[0].col), (0, 0));
    }

    #[test]
    fn test_sentinel_policy_writes_sentinel() {
        let mut grid = parse("0,\n");
        let warnings = fill_missing(&mut grid, &FillOptions::sentinel(-999)).unwrap();
        assert_eq!(grid.value_at(0, 0), Some(-999));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_fail_policy_reports_coordinates() {
        // The garbage line parses to an empty row, so nothing above the
        // zeros is reachable and the first of them aborts the sweep.
        let mut grid = parse("5 5 \nxx\n0 0 \n");
        let err = fill_missing(&mut grid, &FillOptions::strict()).unwrap_err();
        match err {
            FillError::Unfillable { row, col } => assert_eq!((row, col), (2, 0)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_no_missing_cells_is_a_no_op() {
        let mut grid = parse("1 2 \n3 4 \n");
        let snapshot = grid.clone();
        let warnings = fill_missing(&mut grid, &FillOptions::default()).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(grid, snapshot);
    }
}
