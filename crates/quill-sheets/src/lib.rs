//! # quill-sheets
//!
//! The metadata a spreadsheet writer needs before it emits any bytes: sheet
//! identity and names, visibility, written-row counts, and column widths
//! compacted into contiguous ranges.
//!
//! ## Example
//!
//! ```rust
//! use quill_sheets::prelude::*;
//!
//! let options = WorkbookDefaultOptions::new().default_column_width(10.0);
//! let mut session = WorkbookSession::new(options).unwrap();
//!
//! let sheet = session.current_sheet_mut();
//! sheet.set_name("Sales").unwrap();
//! sheet
//!     .set_column_width(ColumnFormat::new(24.0).outline_level(1), &[2, 3, 4, 9])
//!     .unwrap();
//!
//! let spans: Vec<_> = sheet
//!     .column_widths()
//!     .iter()
//!     .map(|r| (r.start(), r.end()))
//!     .collect();
//! assert_eq!(spans, vec![(2, 4), (9, 9)]);
//! ```

pub mod prelude;

pub use quill_sheets_core::{
    column_letters, compact, AutoFilter, Color, ColumnFormat, ColumnWidthRange, ColumnWidths,
    SheetView, Style, MAX_COLUMNS, MAX_OUTLINE_LEVEL, MAX_ROWS, MAX_SHEET_NAME_LEN,
};
pub use quill_sheets_writer::{
    Error, Result, SharedRegistrar, Sheet, SheetIdentity, SheetNameRegistrar, SheetNameRegistry,
    SheetNameViolation, TempFolder, WorkbookDefaultOptions, WorkbookSession,
    DEFAULT_SHEET_NAME_PREFIX,
};

/// Errors from the value types, wrapped by [`Error::Core`]
pub use quill_sheets_core::Error as CoreError;
