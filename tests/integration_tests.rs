//! Integration tests for gridfill end-to-end filling

use gridfill::{
    check_grid, fill_text, fill_text_with_diagnostics, fill_text_with_options, parse, render_grid,
    Delimiter, FillError, FillOptions,
};

// ============================================================================
// Pipeline Tests - parse, fill, render as one pass
// ============================================================================

mod pipeline {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_edge_cell_averages_available_neighbors() {
        // (0,1): left = 1, right = 3, top absent, bottom = 5 -> 9 / 3 = 3
        assert_eq!(fill_text("1 0 3 \n4 5 6 \n"), "1 3 3 \n4 5 6 \n");
    }

    #[test]
    fn test_mixed_delimiters_both_corners_fill() {
        // (0,0) averages right and bottom; (1,1) averages left and top
        assert_eq!(fill_text("0 5,\n5 0,\n"), "5 5,\n5 5,\n");
    }

    #[test]
    fn test_forward_sweep_propagates_fills() {
        // (0,1) fills from its left neighbor; (0,2) then reads the fresh
        // value. A snapshot-based fill would leave (0,2) untouched.
        assert_eq!(fill_text("2 0 0 \n"), "2 2 2 \n");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(fill_text(""), "");
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        assert_eq!(fill_text("\n\n1 2 \n\n"), "1 2 \n");
    }

    #[test]
    fn test_interior_cell_full_neighborhood() {
        assert_eq!(
            fill_text("9 1 9 \n2 0 4 \n9 5 9 \n"),
            "9 1 9 \n2 3 4 \n9 5 9 \n"
        );
    }

    #[test]
    fn test_negative_values_participate() {
        // (0,1): left = -6, right = -2 -> -8 / 2 = -4
        assert_eq!(fill_text("-6 0 -2 \n"), "-6 -4 -2 \n");
    }

    #[test]
    fn test_determinism() {
        let input = "0 7,\n-3 0 \n9 \n0 0 1 \n";
        let first = fill_text(input);
        for _ in 0..10 {
            assert_eq!(fill_text(input), first);
        }
    }
}

// ============================================================================
// Parsing Behavior - leniency and format edge cases
// ============================================================================

mod parsing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ragged_rows_survive_the_pipeline() {
        // Row 1 is shorter; (1,0) averages up = 1 and right = 3 -> 2
        assert_eq!(fill_text("1 2 3 \n0 3 \n"), "1 2 3 \n2 3 \n");
    }

    #[test]
    fn test_unterminated_trailing_value_is_dropped() {
        // "3" has no trailing delimiter, so the row holds two cells
        assert_eq!(fill_text("1 2 3\n"), "1 2 \n");
    }

    #[test]
    fn test_malformed_line_becomes_empty_row() {
        assert_eq!(fill_text("1 2 \ngarbage\n3 4 \n"), "1 2 \n\n3 4 \n");
    }

    #[test]
    fn test_crlf_line_endings() {
        // The \r never matches the token pattern and is simply dropped
        assert_eq!(fill_text("1 0 \r\n3 4 \r\n"), "1 3 \n3 4 \n");
    }

    #[test]
    fn test_empty_row_blocks_vertical_neighbors() {
        // The dash line parses to an empty row between the values and the
        // zero, so the zero has no valid neighbor and keeps its 0
        assert_eq!(fill_text("5 \n-\n0 \n"), "5 \n\n0 \n");
    }
}

// ============================================================================
// Rounding - half away from zero on both signs
// ============================================================================

mod rounding {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_positive_half_rounds_up() {
        // (1 + 2) / 2 = 1.5 -> 2
        assert_eq!(fill_text("0 1,\n2 3,\n"), "2 1,\n2 3,\n");
    }

    #[test]
    fn test_negative_half_rounds_down() {
        // (-1 + -2) / 2 = -1.5 -> -2
        assert_eq!(fill_text("0 -1,\n-2 -3,\n"), "-2 -1,\n-2 -3,\n");
    }

    #[test]
    fn test_exact_quotient_is_untouched() {
        // (2 + 4) / 2 = 3
        assert_eq!(fill_text("2 0 4 \n"), "2 3 4 \n");
    }
}

// ============================================================================
// Round-trip - format fidelity
// ============================================================================

mod round_trip {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_grid_without_zeros_is_identity() {
        let input = "1 2,3 \n-4 5 \n6,7,8,\n";
        assert_eq!(fill_text(input), input);
    }

    #[test]
    fn test_parse_render_round_trip() {
        let input = "10 -20,30 \n40,\n";
        let grid = parse(input);
        assert_eq!(render_grid(&grid), input);
        assert_eq!(parse(&render_grid(&grid)), grid);
    }

    #[test]
    fn test_delimiters_survive_value_changes() {
        let input = "0,5 \n5 9,\n";
        let output = fill_text(input);

        let before = parse(input);
        let after = parse(&output);
        assert_eq!(before.row_count(), after.row_count());
        for (row_in, row_out) in before.rows().iter().zip(after.rows()) {
            for (cell_in, cell_out) in row_in.iter().zip(row_out) {
                assert_eq!(cell_in.delimiter, cell_out.delimiter);
            }
        }
        // The filled cell kept its comma
        assert_eq!(after.get(0, 0).map(|c| c.delimiter), Some(Delimiter::Comma));
    }

    #[test]
    fn test_only_zero_cells_change() {
        let input = "7 0 7 \n8 9 8 \n";
        let before = parse(input);
        let after = parse(&fill_text(input));
        for (i, row) in before.rows().iter().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                if cell.value != 0 {
                    assert_eq!(after.value_at(i, j), Some(cell.value));
                }
            }
        }
    }
}

// ============================================================================
// Unfillable Policies
// ============================================================================

mod policies {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keep_policy_records_each_cell() {
        let out = fill_text_with_diagnostics("0 0 \n", &FillOptions::default()).unwrap();
        assert_eq!(out.content, "0 0 \n");
        assert_eq!(out.warnings.len(), 2);
        assert_eq!(
            (out.warnings[0].row, out.warnings[0].col, out.warnings[1].col),
            (0, 0, 1)
        );
    }

    #[test]
    fn test_sentinel_policy_marks_cells() {
        let out = fill_text_with_options("0 0 \n", &FillOptions::sentinel(-999)).unwrap();
        // The first cell takes the sentinel; the second then averages it
        assert_eq!(out, "-999 -999 \n");
    }

    #[test]
    fn test_fail_policy_surfaces_coordinates() {
        let err = fill_text_with_options("1 1 \nzz\n0 0 \n", &FillOptions::strict()).unwrap_err();
        match err {
            FillError::Unfillable { row, col } => assert_eq!((row, col), (2, 0)),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_fillable_grid_ignores_policy() {
        let input = "1 0 3 \n4 5 6 \n";
        let strict = fill_text_with_options(input, &FillOptions::strict()).unwrap();
        assert_eq!(strict, fill_text(input));
    }
}

// ============================================================================
// Check Mode
// ============================================================================

mod check_mode {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_check_counts_match_fill_behavior() {
        let input = "1 0 \nbad line\n0 0 \n";
        let result = check_grid(input);

        assert_eq!(result.rows, 3);
        assert_eq!(result.missing, 3);

        // Every cell the probe calls unfillable stays 0 in the real fill
        let out = fill_text_with_diagnostics(input, &FillOptions::default()).unwrap();
        assert_eq!(result.unfillable, out.warnings.len());
    }

    #[test]
    fn test_check_does_not_flag_clean_grids() {
        let result = check_grid("1 2 \n3 4 \n");
        assert!(result.is_empty());
        assert!(!result.has_errors());
    }

    #[test]
    fn test_check_reports_malformed_line_location() {
        let result = check_grid("1 2 \nbad line\n3 4 \n");
        let malformed: Vec<_> = result
            .diagnostics
            .iter()
            .filter(|d| d.message.contains("no delimiter-terminated"))
            .collect();
        assert_eq!(malformed.len(), 1);
        assert_eq!(malformed[0].line, Some(2));
    }
}
