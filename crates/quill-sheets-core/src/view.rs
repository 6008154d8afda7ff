//! Sheet view and auto filter attachments

use std::fmt;

use crate::error::{Error, Result};
use crate::{MAX_COLUMNS, MAX_ROWS};

/// Smallest zoom the view accepts, in percent
pub const MIN_ZOOM_SCALE: u16 = 10;

/// Largest zoom the view accepts, in percent
pub const MAX_ZOOM_SCALE: u16 = 400;

/// Convert a 1-based column number to letters (1 = A, 27 = AA)
///
/// Returns an empty string for 0.
pub fn column_letters(col: u32) -> String {
    let mut letters = Vec::new();
    let mut n = col;

    while n > 0 {
        n -= 1;
        letters.push((n % 26) as u8 + b'A');
        n /= 26;
    }

    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// How a worksheet is displayed when the file is opened
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetView {
    /// Show grid lines
    pub show_grid_lines: bool,
    /// Show row and column headers
    pub show_row_col_headers: bool,
    /// Show zero values (blank when false)
    pub show_zeros: bool,
    /// Show formulas instead of results
    pub show_formulas: bool,
    /// Lay out right to left
    pub right_to_left: bool,
    /// Sheet tab is selected
    pub tab_selected: bool,
    /// Zoom in percent
    pub zoom_scale: u16,
    /// First visible cell (e.g. "C5")
    pub top_left_cell: Option<String>,
    /// First unfrozen row (1-based)
    pub freeze_row: Option<u32>,
    /// First unfrozen column (1-based)
    pub freeze_column: Option<u32>,
}

impl Default for SheetView {
    fn default() -> Self {
        Self {
            show_grid_lines: true,
            show_row_col_headers: true,
            show_zeros: true,
            show_formulas: false,
            right_to_left: false,
            tab_selected: false,
            zoom_scale: 100,
            top_left_cell: None,
            freeze_row: None,
            freeze_column: None,
        }
    }
}

impl SheetView {
    /// Create a default view
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle grid lines
    pub fn with_grid_lines(mut self, show: bool) -> Self {
        self.show_grid_lines = show;
        self
    }

    /// Toggle row/column headers
    pub fn with_row_col_headers(mut self, show: bool) -> Self {
        self.show_row_col_headers = show;
        self
    }

    /// Toggle zero display
    pub fn with_zeros(mut self, show: bool) -> Self {
        self.show_zeros = show;
        self
    }

    /// Toggle formula display
    pub fn with_formulas(mut self, show: bool) -> Self {
        self.show_formulas = show;
        self
    }

    /// Toggle right-to-left layout
    pub fn with_right_to_left(mut self, rtl: bool) -> Self {
        self.right_to_left = rtl;
        self
    }

    /// Mark the tab as selected
    pub fn with_tab_selected(mut self, selected: bool) -> Self {
        self.tab_selected = selected;
        self
    }

    /// Set zoom, clamped to 10..=400
    pub fn with_zoom_scale(mut self, zoom: u16) -> Self {
        self.zoom_scale = zoom.clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE);
        self
    }

    /// Set the first visible cell
    pub fn with_top_left_cell<S: Into<String>>(mut self, cell: S) -> Self {
        self.top_left_cell = Some(cell.into());
        self
    }

    /// Freeze everything above `row` and left of `column` (both 1-based)
    ///
    /// A value of 1 (or 0) leaves that axis unfrozen.
    pub fn freeze_panes(mut self, row: u32, column: u32) -> Self {
        self.freeze_row = (row > 1).then_some(row);
        self.freeze_column = (column > 1).then_some(column);
        self
    }

    /// Check if any pane is frozen
    pub fn is_frozen(&self) -> bool {
        self.freeze_row.is_some() || self.freeze_column.is_some()
    }
}

/// Auto filter over a rectangular block (all bounds 1-based, inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawAutoFilter"))]
pub struct AutoFilter {
    first_column: u32,
    first_row: u32,
    last_column: u32,
    last_row: u32,
}

impl AutoFilter {
    /// Create a filter over the given block
    pub fn new(first_column: u32, first_row: u32, last_column: u32, last_row: u32) -> Result<Self> {
        if first_column == 0 || first_row == 0 {
            return Err(Error::InvalidAutoFilter("columns and rows are 1-based".into()));
        }
        if last_column < first_column || last_row < first_row {
            return Err(Error::InvalidAutoFilter(format!(
                "end ({}, {}) precedes start ({}, {})",
                last_column, last_row, first_column, first_row
            )));
        }
        if last_column > MAX_COLUMNS || last_row > MAX_ROWS {
            return Err(Error::InvalidAutoFilter(format!(
                "block exceeds sheet limits ({} columns, {} rows)",
                MAX_COLUMNS, MAX_ROWS
            )));
        }
        Ok(Self {
            first_column,
            first_row,
            last_column,
            last_row,
        })
    }

    /// First filtered column
    pub fn first_column(&self) -> u32 {
        self.first_column
    }

    /// Header row of the filter
    pub fn first_row(&self) -> u32 {
        self.first_row
    }

    /// Last filtered column
    pub fn last_column(&self) -> u32 {
        self.last_column
    }

    /// Last filtered row
    pub fn last_row(&self) -> u32 {
        self.last_row
    }

    /// A1-style reference, e.g. `A1:D10`
    pub fn reference(&self) -> String {
        format!(
            "{}{}:{}{}",
            column_letters(self.first_column),
            self.first_row,
            column_letters(self.last_column),
            self.last_row
        )
    }
}

/// Unchecked wire form of [`AutoFilter`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawAutoFilter {
    first_column: u32,
    first_row: u32,
    last_column: u32,
    last_row: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawAutoFilter> for AutoFilter {
    type Error = Error;

    fn try_from(raw: RawAutoFilter) -> Result<Self> {
        Self::new(raw.first_column, raw.first_row, raw.last_column, raw.last_row)
    }
}

impl fmt::Display for AutoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reference())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(1), "A");
        assert_eq!(column_letters(26), "Z");
        assert_eq!(column_letters(27), "AA");
        assert_eq!(column_letters(16_384), "XFD");
        assert_eq!(column_letters(0), "");
    }

    #[test]
    fn test_auto_filter_reference() {
        let filter = AutoFilter::new(1, 1, 4, 10).unwrap();
        assert_eq!(filter.reference(), "A1:D10");
        assert_eq!(filter.to_string(), "A1:D10");
    }

    #[test]
    fn test_auto_filter_rejects_bad_bounds() {
        assert!(AutoFilter::new(0, 1, 2, 2).is_err());
        assert!(AutoFilter::new(3, 1, 2, 2).is_err());
        assert!(AutoFilter::new(1, 5, 2, 4).is_err());
        assert!(AutoFilter::new(1, 1, MAX_COLUMNS + 1, 2).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_auto_filter_deserialize_validates() {
        let filter: AutoFilter = serde_json::from_str(
            r#"{"first_column":2,"first_row":1,"last_column":5,"last_row":40}"#,
        )
        .unwrap();
        assert_eq!(filter.reference(), "B1:E40");

        let reversed = r#"{"first_column":0,"first_row":5,"last_column":1,"last_row":1}"#;
        assert!(serde_json::from_str::<AutoFilter>(reversed).is_err());
    }

    #[test]
    fn test_sheet_view_freeze() {
        let view = SheetView::new().freeze_panes(2, 1);
        assert!(view.is_frozen());
        assert_eq!(view.freeze_row, Some(2));
        assert_eq!(view.freeze_column, None);
        assert!(!SheetView::new().is_frozen());
    }

    #[test]
    fn test_sheet_view_zoom_clamped() {
        assert_eq!(SheetView::new().with_zoom_scale(5).zoom_scale, 10);
        assert_eq!(SheetView::new().with_zoom_scale(1000).zoom_scale, 400);
        assert_eq!(SheetView::new().with_zoom_scale(150).zoom_scale, 150);
    }
}
