//! Grid analysis and reporting
//!
//! The fill pipeline is deliberately lenient: malformed lines shrink to
//! empty rows and unfillable cells fall back to a policy instead of an
//! error. This module makes those conditions visible without running the
//! fill. It reports:
//!
//! - Lines that produce no cells (no delimiter-terminated token)
//! - Rows of unequal length
//! - Missing cells that a forward sweep cannot fill
//!
//! ## Example
//!
//! ```rust
//! use gridfill::diagnostics::check_grid;
//!
//! let result = check_grid("1 0 \nnot a row\n");
//! assert!(!result.is_empty());
//! assert_eq!(result.missing, 1);
//! ```

use std::fmt;

use crate::core::grid::Grid;
use crate::core::interpolate::{fill_missing, FillOptions};
use crate::core::parse::parse;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - the fill will run but the output may surprise
    Warning,
    /// Error - the input cannot be processed
    Error,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
            DiagnosticLevel::Error => write!(f, "error"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: DiagnosticLevel,
    /// Human-readable message
    pub message: String,
    /// Input line number (1-indexed)
    pub line: Option<usize>,
    /// Cell position within the row (1-indexed)
    pub column: Option<usize>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Add location information
    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Add a line number only
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)?;

        match (self.line, self.column) {
            (Some(line), Some(col)) => write!(f, "\n  --> line {}, cell {}", line, col)?,
            (Some(line), None) => write!(f, "\n  --> line {}", line)?,
            _ => {}
        }

        Ok(())
    }
}

/// Check result with summary counts
#[derive(Debug, Default)]
pub struct CheckResult {
    /// All diagnostics
    pub diagnostics: Vec<Diagnostic>,
    /// Number of errors
    pub errors: usize,
    /// Number of warnings
    pub warnings: usize,
    /// Number of info messages
    pub infos: usize,
    /// Rows parsed from the input
    pub rows: usize,
    /// Cells parsed from the input
    pub cells: usize,
    /// Cells whose value is `0`
    pub missing: usize,
    /// Missing cells a forward sweep cannot fill
    pub unfillable: usize,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Error => self.errors += 1,
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    /// Check if there are any issues at all
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.errors > 0 {
            parts.push(format!(
                "{} error{}",
                self.errors,
                if self.errors == 1 { "" } else { "s" }
            ));
        }
        if self.warnings > 0 {
            parts.push(format!(
                "{} warning{}",
                self.warnings,
                if self.warnings == 1 { "" } else { "s" }
            ));
        }
        if self.infos > 0 {
            parts.push(format!(
                "{} note{}",
                self.infos,
                if self.infos == 1 { "" } else { "s" }
            ));
        }

        let issues = if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        };

        format!(
            "{} ({} rows, {} cells, {} missing, {} unfillable)",
            issues, self.rows, self.cells, self.missing, self.unfillable
        )
    }
}

/// Analyze grid input without filling it.
///
/// The unfillable report is computed by probing a clone of the grid with
/// the default keep policy, so it reflects the forward sweep's order
/// dependence exactly: a zero reachable from an earlier-filled cell does
/// not show up here.
pub fn check_grid(input: &str) -> CheckResult {
    let mut result = CheckResult::new();
    let grid = parse(input);

    // Input line behind each row: rows come from non-empty lines, in order
    let line_of_row: Vec<usize> = input
        .split('\n')
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(idx, _)| idx + 1)
        .collect();

    result.rows = grid.row_count();
    result.cells = grid.cell_count();
    result.missing = grid.missing_count();

    for (row_idx, row) in grid.rows().iter().enumerate() {
        if row.is_empty() {
            let mut diag = Diagnostic::new(
                DiagnosticLevel::Warning,
                "line contains no delimiter-terminated values",
            );
            if let Some(&line) = line_of_row.get(row_idx) {
                diag = diag.with_line(line);
            }
            result.add(diag);
        }
    }

    if let Some((min, max)) = grid.width_range() {
        if min != max {
            result.add(Diagnostic::new(
                DiagnosticLevel::Info,
                format!("row lengths vary between {} and {}", min, max),
            ));
        }
    }

    for (row, col) in probe_unfillable(&grid) {
        let mut diag = Diagnostic::new(
            DiagnosticLevel::Warning,
            "missing cell has no valid neighbor and will not be filled",
        );
        if let Some(&line) = line_of_row.get(row) {
            diag = diag.with_location(line, col + 1);
        }
        result.add(diag);
        result.unfillable += 1;
    }

    result
}

/// Coordinates the forward sweep leaves unfilled, found on a throwaway copy
fn probe_unfillable(grid: &Grid) -> Vec<(usize, usize)> {
    let mut probe = grid.clone();
    fill_missing(&mut probe, &FillOptions::default())
        .unwrap_or_default()
        .into_iter()
        .map(|w| (w.row, w.col))
        .collect()
}

/// Format diagnostics with optional ANSI color
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut output = String::new();

    for diag in &result.diagnostics {
        if use_color {
            let color = match diag.level {
                DiagnosticLevel::Error => "\x1b[31m",   // Red
                DiagnosticLevel::Warning => "\x1b[33m", // Yellow
                DiagnosticLevel::Info => "\x1b[34m",    // Blue
            };
            output.push_str(color);
            output.push_str(&format!("{}", diag));
            output.push_str("\x1b[0m\n\n");
        } else {
            output.push_str(&format!("{}\n\n", diag));
        }
    }

    // Summary
    if use_color {
        if result.has_errors() {
            output.push_str("\x1b[31m");
        } else if result.warnings > 0 {
            output.push_str("\x1b[33m");
        } else {
            output.push_str("\x1b[32m");
        }
    }

    output.push_str(&format!("Summary: {}", result.summary()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}
