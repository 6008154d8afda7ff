//! # quill-sheets-writer
//!
//! Write-session metadata for spreadsheet writers: the [`Sheet`] entity, the
//! workbook-wide [`WorkbookDefaultOptions`], and the naming registry that keeps
//! sheet names valid and unique per workbook.
//!
//! ## Example
//!
//! ```rust
//! use quill_sheets_writer::{WorkbookDefaultOptions, WorkbookSession};
//!
//! let mut session = WorkbookSession::new(WorkbookDefaultOptions::new()).unwrap();
//! let sheet = session.current_sheet_mut();
//! sheet.set_name("Report").unwrap();
//! sheet.set_column_width(18.0, &[1, 2, 3]).unwrap();
//!
//! let sheet = session.add_new_sheet_and_make_it_current().unwrap();
//! assert_eq!(sheet.name(), "Sheet2");
//! assert!(sheet.set_name("report").is_err());
//! ```

pub mod error;
pub mod naming;
pub mod options;
pub mod session;
pub mod sheet;

pub use error::{Error, Result, SheetNameViolation};
pub use naming::{SharedRegistrar, SheetIdentity, SheetNameRegistrar, SheetNameRegistry};
pub use options::{TempFolder, WorkbookDefaultOptions};
pub use session::WorkbookSession;
pub use sheet::{Sheet, DEFAULT_SHEET_NAME_PREFIX};
