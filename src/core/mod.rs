//! Core pipeline modules
//!
//! This module contains the parse → interpolate → render pipeline:
//! - `grid`: the data model (cells, delimiters, rows)
//! - `parse`: input text to grid
//! - `interpolate`: in-place filling of missing samples
//! - `render`: grid back to text

pub mod grid;
pub mod interpolate;
pub mod parse;
pub mod render;

// Re-export the pipeline surface
pub use grid::{Cell, Delimiter, Grid};
pub use interpolate::{fill_missing, neighbor_average, FillOptions, UnfillablePolicy};
pub use parse::parse;
pub use render::render_grid;
