//! One workbook's write session
//!
//! A [`WorkbookSession`] owns the sheets of a single workbook, the defaults they
//! share and the naming registry that keeps their names unique. Rows are
//! counted against the current sheet; once it is full the session either opens
//! a new sheet or drops the row, depending on the defaults.

use std::sync::atomic::{AtomicU64, Ordering};

use quill_sheets_core::MAX_ROWS;

use crate::error::{Error, Result};
use crate::naming::{SharedRegistrar, SheetNameRegistry};
use crate::options::WorkbookDefaultOptions;
use crate::sheet::Sheet;

static NEXT_WORKBOOK_ID: AtomicU64 = AtomicU64::new(1);

fn generate_workbook_id() -> String {
    let n = NEXT_WORKBOOK_ID.fetch_add(1, Ordering::Relaxed);
    format!("wb-{}-{}", std::process::id(), n)
}

/// Sheets, defaults and naming state of one workbook being written
#[derive(Debug)]
pub struct WorkbookSession {
    workbook_id: String,
    registrar: SharedRegistrar,
    options: WorkbookDefaultOptions,
    sheets: Vec<Sheet>,
    current: usize,
    max_rows_per_sheet: u32,
}

impl WorkbookSession {
    /// Start a session with a fresh workbook id and registry
    pub fn new(options: WorkbookDefaultOptions) -> Result<Self> {
        Self::with_workbook_id(generate_workbook_id(), options)
    }

    /// Start a session under a caller-chosen workbook id
    pub fn with_workbook_id<S: Into<String>>(
        workbook_id: S,
        options: WorkbookDefaultOptions,
    ) -> Result<Self> {
        Self::with_registry(workbook_id, options, SheetNameRegistry::shared())
    }

    /// Start a session whose sheet names are tracked by `registrar`
    ///
    /// Names stay unique per workbook id, so a registry may be shared by
    /// sessions with different ids.
    pub fn with_registry<S: Into<String>>(
        workbook_id: S,
        options: WorkbookDefaultOptions,
        registrar: SharedRegistrar,
    ) -> Result<Self> {
        let mut session = Self {
            workbook_id: workbook_id.into(),
            registrar,
            options,
            sheets: Vec::new(),
            current: 0,
            max_rows_per_sheet: MAX_ROWS,
        };
        session.add_new_sheet_and_make_it_current()?;
        Ok(session)
    }

    /// Limit rows per sheet (at least 1); the default is the XLSX limit
    pub fn with_max_rows_per_sheet(mut self, max_rows: u32) -> Self {
        self.max_rows_per_sheet = max_rows.max(1);
        self
    }

    /// Id scoping this workbook's sheet names
    pub fn workbook_id(&self) -> &str {
        &self.workbook_id
    }

    /// Rows a sheet can hold before it counts as full
    pub fn max_rows_per_sheet(&self) -> u32 {
        self.max_rows_per_sheet
    }

    /// Workbook defaults
    pub fn options(&self) -> &WorkbookDefaultOptions {
        &self.options
    }

    /// Mutable workbook defaults
    pub fn options_mut(&mut self) -> &mut WorkbookDefaultOptions {
        &mut self.options
    }

    /// Append a sheet with its default name and make it current
    pub fn add_new_sheet_and_make_it_current(&mut self) -> Result<&mut Sheet> {
        let index = self.sheets.len();
        let sheet = Sheet::new(index, self.workbook_id.as_str(), self.registrar.clone())?;
        log::debug!(
            "workbook {}: opened sheet {} ('{}')",
            self.workbook_id,
            index,
            sheet.name()
        );
        self.sheets.push(sheet);
        self.current = index;
        Ok(&mut self.sheets[index])
    }

    /// Make sheet `index` current
    pub fn set_current_sheet(&mut self, index: usize) -> Result<()> {
        if index >= self.sheets.len() {
            return Err(Error::SheetOutOfBounds(index, self.sheets.len()));
        }
        self.current = index;
        Ok(())
    }

    /// Index of the current sheet
    pub fn current_sheet_index(&self) -> usize {
        self.current
    }

    /// The sheet rows are written to
    pub fn current_sheet(&self) -> &Sheet {
        &self.sheets[self.current]
    }

    /// Mutable current sheet
    pub fn current_sheet_mut(&mut self) -> &mut Sheet {
        &mut self.sheets[self.current]
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a mutable sheet by index
    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    /// All sheets in workbook order
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Count a row against the current sheet
    ///
    /// Returns the index of the sheet that took the row, or `None` when the
    /// current sheet is full and automatic sheet creation is off.
    pub fn record_row_written(&mut self) -> Result<Option<usize>> {
        let limit = u64::from(self.max_rows_per_sheet);
        if self.current_sheet().written_row_count() >= limit {
            if !self.options.should_create_new_sheets_automatically {
                log::warn!(
                    "workbook {}: sheet '{}' is full ({} rows), row dropped",
                    self.workbook_id,
                    self.current_sheet().name(),
                    limit
                );
                return Ok(None);
            }
            self.add_new_sheet_and_make_it_current()?;
        }

        self.current_sheet_mut().increment_written_row_count();
        Ok(Some(self.current))
    }
}
