//! Writer error types

use thiserror::Error;

/// Result type for writer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a sheet name was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetNameViolation {
    /// Empty name
    #[error("name cannot be empty")]
    Empty,

    /// Longer than the limit; carries the length in characters
    #[error("name is {0} characters long (max {})", quill_sheets_core::MAX_SHEET_NAME_LEN)]
    TooLong(usize),

    /// Contains one of `\ / ? * : [ ]`
    #[error("name cannot contain '{0}'")]
    ForbiddenCharacter(char),

    /// Starts or ends with `'`
    #[error("name cannot start or end with an apostrophe")]
    ApostropheAtBoundary,

    /// Taken by another sheet of the workbook; carries its index
    #[error("name is already used by sheet {0} of this workbook")]
    Duplicate(usize),
}

/// Errors that can occur while building workbook metadata
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Sheet name refused by the naming registry
    #[error("Invalid sheet name '{name}': {reason}")]
    InvalidSheetName {
        name: String,
        reason: SheetNameViolation,
    },

    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// Core error
    #[error(transparent)]
    Core(#[from] quill_sheets_core::Error),
}

impl Error {
    pub(crate) fn invalid_name(name: &str, reason: SheetNameViolation) -> Self {
        Error::InvalidSheetName {
            name: name.to_string(),
            reason,
        }
    }
}
