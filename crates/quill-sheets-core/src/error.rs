//! Error types for quill-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building column-width and view metadata
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Outline level outside 1..=7
    #[error("Outline level must be between 1 and 7, got {0}")]
    InvalidOutlineLevel(u8),

    /// Column range with a zero start or an end before its start
    #[error("Invalid column range {start}..={end} (columns are 1-based, end >= start)")]
    InvalidColumnRange { start: u32, end: u32 },

    /// Width that is not a positive finite number
    #[error("Invalid column width: {0}")]
    InvalidColumnWidth(f64),

    /// Width requested for no columns at all
    #[error("At least one column is required")]
    EmptyColumnList,

    /// Auto filter with reversed or zero bounds
    #[error("Invalid auto filter: {0}")]
    InvalidAutoFilter(String),
}
