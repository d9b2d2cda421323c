//! Error handling for grid filling
//!
//! This module provides the unified error type, the warning type carried
//! through the pipeline, and the output wrapper that pairs rendered text
//! with its warnings.

use std::fmt;

/// Fill error type
#[derive(Debug, Clone)]
pub enum FillError {
    /// Input could not be interpreted at the boundary (e.g. non-text bytes)
    InvalidInput { message: String },
    /// Parse failure reported by an outer layer. The grid parser itself is
    /// lenient and never raises; this variant exists for callers that put
    /// their own validation in front of it.
    Parse {
        message: String,
        line: Option<usize>,
    },
    /// IO error (for file operations)
    Io { message: String },
    /// A missing cell had no valid neighbor and the policy was to fail
    Unfillable { row: usize, col: usize },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            FillError::Parse { message, line } => {
                if let Some(l) = line {
                    write!(f, "Parse error at line {}: {}", l, message)
                } else {
                    write!(f, "Parse error: {}", message)
                }
            }
            FillError::Io { message } => {
                write!(f, "IO error: {}", message)
            }
            FillError::Unfillable { row, col } => {
                write!(
                    f,
                    "Cell ({}, {}) is missing and has no valid neighbor to average",
                    row, col
                )
            }
        }
    }
}

impl std::error::Error for FillError {}

impl From<std::io::Error> for FillError {
    fn from(err: std::io::Error) -> Self {
        FillError::Io {
            message: err.to_string(),
        }
    }
}

// Convenience constructors
impl FillError {
    pub fn invalid(message: impl Into<String>) -> Self {
        FillError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        FillError::Parse {
            message: message.into(),
            line: None,
        }
    }

    pub fn parse_at(message: impl Into<String>, line: usize) -> Self {
        FillError::Parse {
            message: message.into(),
            line: Some(line),
        }
    }
}

/// Result type for fill operations
pub type FillResult<T> = Result<T, FillError>;

/// A non-fatal condition found while filling, tied to a grid coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillWarning {
    pub row: usize,
    pub col: usize,
    pub message: String,
}

impl FillWarning {
    /// Warning for a missing cell left unfilled (or sentinel-filled)
    pub fn unfillable(row: usize, col: usize) -> Self {
        FillWarning {
            row,
            col,
            message: "no valid neighbor to average".to_string(),
        }
    }
}

impl fmt::Display for FillWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell ({}, {}): {}", self.row, self.col, self.message)
    }
}

/// Fill output with any warnings produced along the way
#[derive(Debug, Clone)]
pub struct FillOutput {
    /// The rendered grid text
    pub content: String,
    /// Warnings generated during the sweep
    pub warnings: Vec<FillWarning>,
}

impl FillOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<FillWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = FillError::invalid("binary data");
        assert!(err.to_string().contains("Invalid input"));
        assert!(err.to_string().contains("binary data"));
    }

    #[test]
    fn test_parse_error_with_line() {
        let err = FillError::parse_at("unexpected token", 10);
        assert!(err.to_string().contains("line 10"));
    }

    #[test]
    fn test_unfillable_display_carries_coordinates() {
        let err = FillError::Unfillable { row: 3, col: 1 };
        let msg = err.to_string();
        assert!(msg.contains("(3, 1)"));
        assert!(msg.contains("no valid neighbor"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FillError = io.into();
        assert!(matches!(err, FillError::Io { .. }));
    }

    #[test]
    fn test_fill_output() {
        let output = FillOutput::new("1 2 \n".to_string());
        assert!(!output.has_warnings());

        let output = FillOutput::with_warnings(
            "0 \n".to_string(),
            vec![FillWarning::unfillable(0, 0)],
        );
        assert!(output.has_warnings());
        assert_eq!(output.warnings[0].to_string(), "cell (0, 0): no valid neighbor to average");
    }
}
