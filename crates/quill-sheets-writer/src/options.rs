//! Workbook-wide defaults

use std::path::{Path, PathBuf};

use quill_sheets_core::{ColumnFormat, ColumnWidthRange, ColumnWidths, Style};

use crate::error::Result;

/// Folder a writer may use for scratch files
///
/// Only the location is kept here; creating and cleaning files is up to the
/// writer that owns the options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TempFolder(PathBuf);

impl TempFolder {
    /// Use `path` as the temp folder
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self(path.into())
    }

    /// Get the folder path
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Default for TempFolder {
    fn default() -> Self {
        Self(std::env::temp_dir())
    }
}

/// Defaults applied to every sheet of a workbook
///
/// Column widths set here are kept apart from any sheet's own widths; the
/// serializer decides how the two lists combine.
#[derive(Debug, Clone)]
pub struct WorkbookDefaultOptions {
    /// Style applied to rows written without one
    pub default_row_style: Style,
    /// Open a new sheet when the current one is full
    pub should_create_new_sheets_automatically: bool,
    /// Default column width (None = application default)
    pub default_column_width: Option<f64>,
    /// Default row height (None = application default)
    pub default_row_height: Option<f64>,
    column_widths: ColumnWidths,
    temp_folder: TempFolder,
}

impl Default for WorkbookDefaultOptions {
    fn default() -> Self {
        Self::with_row_style(Style::default())
    }
}

impl WorkbookDefaultOptions {
    /// Create options with a default row style
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options around an explicit default row style
    pub fn with_row_style(default_row_style: Style) -> Self {
        Self {
            default_row_style,
            should_create_new_sheets_automatically: true,
            default_column_width: None,
            default_row_height: None,
            column_widths: ColumnWidths::new(),
            temp_folder: TempFolder::default(),
        }
    }

    /// Set the default column width
    pub fn default_column_width(mut self, width: f64) -> Self {
        self.default_column_width = Some(width);
        self
    }

    /// Set the default row height
    pub fn default_row_height(mut self, height: f64) -> Self {
        self.default_row_height = Some(height);
        self
    }

    /// Toggle automatic sheet creation
    pub fn create_new_sheets_automatically(mut self, enabled: bool) -> Self {
        self.should_create_new_sheets_automatically = enabled;
        self
    }

    /// Set the temp folder
    pub fn temp_folder<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.temp_folder = TempFolder::new(path);
        self
    }

    /// Get the temp folder
    pub fn get_temp_folder(&self) -> &TempFolder {
        &self.temp_folder
    }

    /// Replace the temp folder
    pub fn set_temp_folder(&mut self, folder: TempFolder) {
        self.temp_folder = folder;
    }

    /// Apply a width to columns of every sheet, one range per consecutive run
    pub fn set_column_width<F: Into<ColumnFormat>>(
        &mut self,
        format: F,
        columns: &[u32],
    ) -> Result<()> {
        let added = self.column_widths.set_column_width(&format.into(), columns)?;
        log::debug!("workbook defaults: {} column width range(s) added", added);
        Ok(())
    }

    /// Apply a width to columns `start..=end` of every sheet
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

    /// Workbook-wide column width ranges in the order they were set
    pub fn column_widths(&self) -> &[ColumnWidthRange] {
        self.column_widths.as_slice()
    }
}
