//! # gridfill
//!
//! Delimiter-preserving gap filling for text-encoded numeric grids.
//!
//! The input format is lines of integers separated by `\n`, each integer
//! immediately followed by a single space or comma. A value of `0` marks a
//! missing sample. Every missing sample is replaced by the rounded average
//! of its valid (non-zero) up/down/left/right neighbors, and the grid is
//! re-rendered with every original delimiter intact, so output and input
//! differ only in the filled values.
//!
//! ## Usage Examples
//!
//! ### Filling a grid
//!
//! ```rust
//! use gridfill::fill_text;
//!
//! let filled = fill_text("1 0 3 \n4 5 6 \n");
//! assert_eq!(filled, "1 3 3 \n4 5 6 \n");
//! ```
//!
//! ### Observing unfillable cells
//!
//! ```rust
//! use gridfill::{fill_text_with_diagnostics, FillOptions};
//!
//! let out = fill_text_with_diagnostics("0 0 \n", &FillOptions::default()).unwrap();
//! assert_eq!(out.content, "0 0 \n");
//! assert!(out.has_warnings());
//! ```
//!
//! ### Working with the pipeline directly
//!
//! ```rust
//! use gridfill::{fill_missing, parse, render_grid, FillOptions};
//!
//! let mut grid = parse("0 5,\n5 0,\n");
//! fill_missing(&mut grid, &FillOptions::default()).unwrap();
//! assert_eq!(render_grid(&grid), "5 5,\n5 5,\n");
//! ```

/// Core pipeline modules
pub mod core;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the pipeline surface
pub use core::grid::{Cell, Delimiter, Grid};
pub use core::interpolate::{fill_missing, neighbor_average, FillOptions, UnfillablePolicy};
pub use core::parse::parse;
pub use core::render::render_grid;

// Re-export utilities
pub use utils::diagnostics;
pub use utils::diagnostics::{check_grid, format_diagnostics, CheckResult, DiagnosticLevel};
pub use utils::error::{FillError, FillOutput, FillResult, FillWarning};

/// Fill every missing sample in `input` and return the re-rendered text.
///
/// Runs with default options: unfillable cells keep their original `0`.
/// Use [`fill_text_with_diagnostics`] to observe them.
pub fn fill_text(input: &str) -> String {
    let mut grid = parse(input);
    // The keep policy cannot fail
    let _ = fill_missing(&mut grid, &FillOptions::default());
    render_grid(&grid)
}

/// Fill every missing sample with explicit options.
///
/// # Arguments
/// * `input` - grid text
/// * `options` - interpolation options
///
/// # Returns
/// The re-rendered text, or [`FillError::Unfillable`] under the fail policy.
pub fn fill_text_with_options(input: &str, options: &FillOptions) -> FillResult<String> {
    let mut grid = parse(input);
    fill_missing(&mut grid, options)?;
    Ok(render_grid(&grid))
}

/// Fill every missing sample and return the output together with the
/// warnings the sweep produced.
pub fn fill_text_with_diagnostics(input: &str, options: &FillOptions) -> FillResult<FillOutput> {
    let mut grid = parse(input);
    let warnings = fill_missing(&mut grid, options)?;
    Ok(FillOutput::with_warnings(render_grid(&grid), warnings))
}
