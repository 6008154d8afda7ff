//! # quill-sheets-core
//!
//! Value types shared by the quill-sheets writer:
//! - [`ColumnWidthRange`] and [`compact`] - column widths grouped into contiguous ranges
//! - [`Style`] - the style applied to rows by default
//! - [`SheetView`] and [`AutoFilter`] - attachments a sheet hands to the serializer
//!
//! ## Example
//!
//! ```rust
//! use quill_sheets_core::{compact, ColumnFormat};
//!
//! let ranges = compact(&ColumnFormat::new(12.0), &[1, 2, 3, 7]).unwrap();
//! assert_eq!(ranges.len(), 2);
//! assert_eq!((ranges[0].start(), ranges[0].end()), (1, 3));
//! assert_eq!((ranges[1].start(), ranges[1].end()), (7, 7));
//! ```

pub mod column;
pub mod error;
pub mod style;
pub mod view;

pub use column::{compact, ColumnFormat, ColumnWidthRange, ColumnWidths, MAX_OUTLINE_LEVEL};
pub use error::{Error, Result};
pub use style::{Color, Style};
pub use view::{column_letters, AutoFilter, SheetView};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLUMNS: u32 = 16_384;

/// Maximum length of a sheet name, in characters
pub const MAX_SHEET_NAME_LEN: usize = 31;
