//! Worksheet metadata for one write session

use std::fmt;

use quill_sheets_core::{AutoFilter, ColumnFormat, ColumnWidthRange, ColumnWidths, SheetView};

use crate::error::Result;
use crate::naming::{SharedRegistrar, SheetIdentity};

/// Prefix of the name a sheet gets before anyone renames it
pub const DEFAULT_SHEET_NAME_PREFIX: &str = "Sheet";

/// A worksheet being written
///
/// `index` and `workbook_id` are fixed at construction. The name goes through
/// the sheet's registrar on every change, so it is always valid and unique
/// within its workbook.
pub struct Sheet {
    /// Position in the workbook (0-based)
    index: usize,
    /// Workbook scoping name uniqueness
    workbook_id: String,
    /// Sheet name
    name: String,
    /// Sheet is visible
    visible: bool,
    /// Rows emitted so far
    written_row_count: u64,
    /// Column widths, in the order they were set
    column_widths: ColumnWidths,
    sheet_view: Option<SheetView>,
    auto_filter: Option<AutoFilter>,
    /// Rows repeated at the top of each printed page (e.g. "1:2")
    print_title_rows: Option<String>,
    registrar: SharedRegistrar,
}

impl Sheet {
    /// Create sheet `index` of `workbook_id`, named `Sheet<index + 1>`
    pub fn new<S: Into<String>>(
        index: usize,
        workbook_id: S,
        registrar: SharedRegistrar,
    ) -> Result<Self> {
        let workbook_id = workbook_id.into();
        registrar.borrow_mut().mark_workbook_id_as_used(&workbook_id);

        let mut sheet = Self {
            index,
            workbook_id,
            name: String::new(),
            visible: true,
            written_row_count: 0,
            column_widths: ColumnWidths::new(),
            sheet_view: None,
            auto_filter: None,
            print_title_rows: None,
            registrar,
        };
        let ordinal = index as u128 + 1;
        sheet.set_name(format!("{}{}", DEFAULT_SHEET_NAME_PREFIX, ordinal))?;
        Ok(sheet)
    }

    /// Position in the workbook (0-based)
    pub fn index(&self) -> usize {
        self.index
    }

    /// Id of the workbook this sheet belongs to
    pub fn workbook_id(&self) -> &str {
        &self.workbook_id
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the sheet
    ///
    /// Excel restricts sheet names: not blank, at most 31 characters, none of
    /// `\ / ? * : [ ]`, and unique within the workbook. On failure the current
    /// name is kept.
    pub fn set_name<S: Into<String>>(&mut self, name: S) -> Result<()> {
        let name = name.into();
        let key = SheetIdentity {
            workbook_id: &self.workbook_id,
            index: self.index,
        };

        self.registrar.borrow().validate(&name, key)?;
        self.registrar.borrow_mut().register(&name, key);

        log::debug!(
            "sheet {} of workbook {} named '{}'",
            self.index,
            self.workbook_id,
            name
        );
        self.name = name;
        Ok(())
    }

    /// Check if the sheet is visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set sheet visibility
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Number of rows written so far
    pub fn written_row_count(&self) -> u64 {
        self.written_row_count
    }

    /// Count one more written row
    pub fn increment_written_row_count(&mut self) {
        self.written_row_count += 1;
    }

    /// Get the sheet view
    pub fn sheet_view(&self) -> Option<&SheetView> {
        self.sheet_view.as_ref()
    }

    /// Set the sheet view
    pub fn set_sheet_view(&mut self, view: SheetView) {
        self.sheet_view = Some(view);
    }

    /// Get the auto filter
    pub fn auto_filter(&self) -> Option<&AutoFilter> {
        self.auto_filter.as_ref()
    }

    /// Set or clear the auto filter
    pub fn set_auto_filter(&mut self, filter: Option<AutoFilter>) {
        self.auto_filter = filter;
    }

    /// Rows repeated at the top of printed pages
    pub fn print_title_rows(&self) -> Option<&str> {
        self.print_title_rows.as_deref()
    }

    /// Set rows repeated at the top of printed pages, e.g. `"1:2"`
    pub fn set_print_title_rows<S: Into<String>>(&mut self, rows: S) {
        self.print_title_rows = Some(rows.into());
    }

    /// Apply a width to columns, one range per run of consecutive indices
    ///
    /// ```
    /// use quill_sheets_core::ColumnFormat;
    /// use quill_sheets_writer::{Sheet, SheetNameRegistry};
    ///
    /// let mut sheet = Sheet::new(0, "wb", SheetNameRegistry::shared()).unwrap();
    /// sheet.set_column_width(12.0, &[1, 2, 3, 8]).unwrap();
    /// sheet
    ///     .set_column_width(ColumnFormat::new(4.0).outline_level(1).hidden(true), &[9])
    ///     .unwrap();
    /// assert_eq!(sheet.column_widths().len(), 3);
    /// ```
    pub fn set_column_width<F: Into<ColumnFormat>>(
        &mut self,
        format: F,
        columns: &[u32],
    ) -> Result<()> {
        let added = self.column_widths.set_column_width(&format.into(), columns)?;
        log::debug!("sheet '{}': {} column width range(s) added", self.name, added);
        Ok(())
    }

    /// Apply a width to columns `start..=end` (1-based)
    pub fn set_column_width_for_range<F: Into<ColumnFormat>>(
        &mut self,
        format: F,
        start: u32,
        end: u32,
    ) -> Result<()> {
        self.column_widths
            .set_column_width_for_range(&format.into(), start, end)?;
        Ok(())
    }

    /// Column width ranges in the order they were set
    pub fn column_widths(&self) -> &[ColumnWidthRange] {
        self.column_widths.as_slice()
    }
}

impl fmt::Debug for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sheet")
            .field("index", &self.index)
            .field("workbook_id", &self.workbook_id)
            .field("name", &self.name)
            .field("visible", &self.visible)
            .field("written_row_count", &self.written_row_count)
            .field("column_widths", &self.column_widths)
            .field("sheet_view", &self.sheet_view)
            .field("auto_filter", &self.auto_filter)
            .field("print_title_rows", &self.print_title_rows)
            .finish_non_exhaustive()
    }
}
