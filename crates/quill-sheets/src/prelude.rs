//! Prelude module - common imports for quill-sheets users
//!
//! ```rust
//! use quill_sheets::prelude::*;
//! ```

pub use crate::{
    AutoFilter,
    Color,
    // Column widths
    ColumnFormat,
    ColumnWidthRange,
    // Error types
    Error,
    Result,
    // Main types
    Sheet,
    SheetNameRegistry,
    SheetView,
    Style,
    WorkbookDefaultOptions,
    WorkbookSession,
};
