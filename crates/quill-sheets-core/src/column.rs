//! Column width ranges
//!
//! Widths are recorded as [`ColumnWidthRange`] values, each covering an inclusive,
//! 1-based span of columns. [`compact`] turns a caller-supplied list of column
//! indices into the fewest such ranges, and [`ColumnWidths`] is the append-only
//! list that sheets and workbook defaults keep for the serializer.

use crate::error::{Error, Result};

/// Deepest outline (grouping) level a column can carry
pub const MAX_OUTLINE_LEVEL: u8 = 7;

/// Formatting shared by every column named in one width call
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnFormat {
    /// Width in character units
    pub width: f64,
    /// Outline level (1-7), `None` for ungrouped columns
    pub outline_level: Option<u8>,
    /// Column group is collapsed
    pub collapsed: bool,
    /// Columns are hidden
    pub hidden: bool,
}

impl ColumnFormat {
    /// Plain width with no outline, collapsed or hidden flags
    pub fn new(width: f64) -> Self {
        Self {
            width,
            outline_level: None,
            collapsed: false,
            hidden: false,
        }
    }

    /// Set outline level
    pub fn outline_level(mut self, level: u8) -> Self {
        self.outline_level = Some(level);
        self
    }

    /// Set collapsed
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Set hidden
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Check width and outline level before any range is built
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.outline_level {
            if !(1..=MAX_OUTLINE_LEVEL).contains(&level) {
                return Err(Error::InvalidOutlineLevel(level));
            }
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(Error::InvalidColumnWidth(self.width));
        }
        Ok(())
    }
}

impl From<f64> for ColumnFormat {
    fn from(width: f64) -> Self {
        Self::new(width)
    }
}

/// A width applied to an inclusive range of columns
///
/// Values are immutable once built; the only way to obtain one is through
/// [`ColumnWidthRange::new`] or [`compact`], both of which validate.
/// Deserialization goes through [`ColumnWidthRange::new`] as well.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawColumnWidthRange"))]
pub struct ColumnWidthRange {
    start: u32,
    end: u32,
    width: f64,
    outline_level: Option<u8>,
    collapsed: bool,
    hidden: bool,
}

impl ColumnWidthRange {
    /// Build a range from `start` to `end` (1-based, inclusive)
    pub fn new(start: u32, end: u32, format: &ColumnFormat) -> Result<Self> {
        format.validate()?;
        Self::check_bounds(start, end)?;
        Ok(Self::from_parts(start, end, format))
    }

    fn check_bounds(start: u32, end: u32) -> Result<()> {
        if start == 0 || end < start {
            return Err(Error::InvalidColumnRange { start, end });
        }
        Ok(())
    }

    fn from_parts(start: u32, end: u32, format: &ColumnFormat) -> Self {
        Self {
            start,
            end,
            width: format.width,
            outline_level: format.outline_level,
            collapsed: format.collapsed,
            hidden: format.hidden,
        }
    }

    /// First column (1-based)
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last column (1-based, inclusive)
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Width in character units
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Outline level, if the columns are grouped
    pub fn outline_level(&self) -> Option<u8> {
        self.outline_level
    }

    /// Whether the column group is collapsed
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Whether the columns are hidden
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Number of columns covered
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Always false; a range covers at least one column
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check whether `col` falls inside this range
    pub fn contains(&self, col: u32) -> bool {
        (self.start..=self.end).contains(&col)
    }
}

/// Unchecked wire form of [`ColumnWidthRange`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawColumnWidthRange {
    start: u32,
    end: u32,
    width: f64,
    #[serde(default)]
    outline_level: Option<u8>,
    #[serde(default)]
    collapsed: bool,
    #[serde(default)]
    hidden: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RawColumnWidthRange> for ColumnWidthRange {
    type Error = Error;

    fn try_from(raw: RawColumnWidthRange) -> Result<Self> {
        let format = ColumnFormat {
            width: raw.width,
            outline_level: raw.outline_level,
            collapsed: raw.collapsed,
            hidden: raw.hidden,
        };
        Self::new(raw.start, raw.end, &format)
    }
}

/// Group `columns` into runs of consecutive indices, one range per run
///
/// Columns are taken in the order given and are not sorted: `[3, 4, 5, 8, 9, 1]`
/// yields `3..=5`, `8..=9` and `1..=1`, in that order. The whole call fails,
/// producing nothing, if the format or any column index is invalid.
pub fn compact(format: &ColumnFormat, columns: &[u32]) -> Result<Vec<ColumnWidthRange>> {
    format.validate()?;

    let (&first, rest) = columns.split_first().ok_or(Error::EmptyColumnList)?;
    ColumnWidthRange::check_bounds(first, first)?;

    let mut ranges = Vec::new();
    let mut run_start = first;
    let mut previous = first;

    for &col in rest {
        ColumnWidthRange::check_bounds(col, col)?;
        if previous.checked_add(1) == Some(col) {
            previous = col;
            continue;
        }
        log::trace!("column run {}..={} closed by {}", run_start, previous, col);
        ranges.push(ColumnWidthRange::from_parts(run_start, previous, format));
        run_start = col;
        previous = col;
    }

    ranges.push(ColumnWidthRange::from_parts(run_start, previous, format));
    Ok(ranges)
}

/// Append-only list of column width ranges
///
/// Overlapping ranges are kept as given; deciding which one wins for a column
/// is left to whoever serializes the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnWidths {
    ranges: Vec<ColumnWidthRange>,
}

impl ColumnWidths {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a width to the given columns, one range per consecutive run
    pub fn set_column_width(&mut self, format: &ColumnFormat, columns: &[u32]) -> Result<usize> {
        let ranges = compact(format, columns)?;
        let added = ranges.len();
        self.ranges.extend(ranges);
        Ok(added)
    }

    /// Apply a width to one explicit range
    pub fn set_column_width_for_range(
        &mut self,
        format: &ColumnFormat,
        start: u32,
        end: u32,
    ) -> Result<()> {
        self.ranges.push(ColumnWidthRange::new(start, end, format)?);
        Ok(())
    }

    /// Ranges in the order they were added
    pub fn as_slice(&self) -> &[ColumnWidthRange] {
        &self.ranges
    }

    /// Iterate over ranges in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, ColumnWidthRange> {
        self.ranges.iter()
    }

    /// Number of stored ranges
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if no range has been added
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl<'a> IntoIterator for &'a ColumnWidths {
    type Item = &'a ColumnWidthRange;
    type IntoIter = std::slice::Iter<'a, ColumnWidthRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn spans(ranges: &[ColumnWidthRange]) -> Vec<(u32, u32)> {
        ranges.iter().map(|r| (r.start(), r.end())).collect()
    }

    #[test]
    fn test_compact_keeps_input_order() {
        let ranges = compact(&ColumnFormat::new(12.0), &[3, 4, 5, 8, 9, 1]).unwrap();
        assert_eq!(spans(&ranges), vec![(3, 5), (8, 9), (1, 1)]);
        assert!(ranges.iter().all(|r| r.width() == 12.0));
    }

    #[test]
    fn test_compact_single_column() {
        let ranges = compact(&ColumnFormat::new(9.5), &[7]).unwrap();
        assert_eq!(spans(&ranges), vec![(7, 7)]);
        assert_eq!(ranges[0].len(), 1);
    }

    #[test]
    fn test_compact_descending_is_not_merged() {
        let ranges = compact(&ColumnFormat::new(10.0), &[5, 4, 3]).unwrap();
        assert_eq!(spans(&ranges), vec![(5, 5), (4, 4), (3, 3)]);
    }

    #[test]
    fn test_compact_repeated_column_starts_new_run() {
        let ranges = compact(&ColumnFormat::new(10.0), &[2, 2, 3]).unwrap();
        assert_eq!(spans(&ranges), vec![(2, 2), (2, 3)]);
    }

    #[test]
    fn test_compact_carries_format() {
        let format = ColumnFormat::new(20.0)
            .outline_level(3)
            .collapsed(true)
            .hidden(true);
        let ranges = compact(&format, &[1, 2]).unwrap();

        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].outline_level(), Some(3));
        assert!(ranges[0].is_collapsed());
        assert!(ranges[0].is_hidden());
    }

    #[test]
    fn test_compact_rejects_outline_level() {
        for level in [0, 8] {
            let format = ColumnFormat::new(10.0).outline_level(level);
            assert_eq!(
                compact(&format, &[1, 2]),
                Err(Error::InvalidOutlineLevel(level))
            );
        }
        assert!(compact(&ColumnFormat::new(10.0).outline_level(1), &[1]).is_ok());
        assert!(compact(&ColumnFormat::new(10.0).outline_level(7), &[1]).is_ok());
    }

    #[test]
    fn test_compact_rejects_bad_input() {
        assert_eq!(
            compact(&ColumnFormat::new(10.0), &[]),
            Err(Error::EmptyColumnList)
        );
        assert_eq!(
            compact(&ColumnFormat::new(10.0), &[1, 0]),
            Err(Error::InvalidColumnRange { start: 0, end: 0 })
        );
        assert!(matches!(
            compact(&ColumnFormat::new(0.0), &[1]),
            Err(Error::InvalidColumnWidth(_))
        ));
        assert!(compact(&ColumnFormat::new(f64::NAN), &[1]).is_err());
    }

    #[test]
    fn test_compact_does_not_overflow() {
        let ranges = compact(&ColumnFormat::new(1.0), &[u32::MAX, 1]).unwrap();
        assert_eq!(spans(&ranges), vec![(u32::MAX, u32::MAX), (1, 1)]);
    }

    #[test]
    fn test_range_bounds() {
        let format = ColumnFormat::new(8.0);
        assert!(ColumnWidthRange::new(2, 5, &format).unwrap().contains(4));
        assert_eq!(
            ColumnWidthRange::new(5, 2, &format),
            Err(Error::InvalidColumnRange { start: 5, end: 2 })
        );
        assert!(ColumnWidthRange::new(0, 2, &format).is_err());
    }

    #[test]
    fn test_widths_accumulate_without_merging() {
        let mut widths = ColumnWidths::new();
        widths
            .set_column_width(&ColumnFormat::new(10.0), &[1, 2, 3])
            .unwrap();
        widths
            .set_column_width(&ColumnFormat::new(15.0), &[2, 3, 4])
            .unwrap();

        assert_eq!(widths.len(), 2);
        assert_eq!(spans(widths.as_slice()), vec![(1, 3), (2, 4)]);
    }

    #[test]
    fn test_widths_failed_call_appends_nothing() {
        let mut widths = ColumnWidths::new();
        widths
            .set_column_width_for_range(&ColumnFormat::new(10.0), 1, 4)
            .unwrap();

        let bad = ColumnFormat::new(10.0).outline_level(8);
        assert!(widths.set_column_width(&bad, &[6, 7, 9]).is_err());
        assert!(widths.set_column_width_for_range(&bad, 6, 9).is_err());
        assert_eq!(widths.len(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let range: ColumnWidthRange =
            serde_json::from_str(r#"{"start":2,"end":4,"width":9.5,"outline_level":1}"#).unwrap();
        assert_eq!((range.start(), range.end()), (2, 4));
        assert_eq!(range.outline_level(), Some(1));
        assert!(!range.is_hidden());

        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(serde_json::from_str::<ColumnWidthRange>(&json).unwrap(), range);

        for bad in [
            r#"{"start":9,"end":2,"width":10.0}"#,
            r#"{"start":0,"end":2,"width":10.0}"#,
            r#"{"start":1,"end":2,"width":-1.0}"#,
            r#"{"start":1,"end":2,"width":10.0,"outline_level":42}"#,
        ] {
            assert!(
                serde_json::from_str::<ColumnWidthRange>(bad).is_err(),
                "{} should be refused",
                bad
            );
        }
    }

    proptest! {
        #[test]
        fn prop_compact_covers_runs(columns in prop::collection::vec(1u32..200, 1..60)) {
            let ranges = compact(&ColumnFormat::new(11.0), &columns).unwrap();

            // Expanding the ranges reproduces the input sequence exactly
            let expanded: Vec<u32> = ranges.iter().flat_map(|r| r.start()..=r.end()).collect();
            prop_assert_eq!(&expanded, &columns);

            // Adjacent ranges never continue each other
            for pair in ranges.windows(2) {
                prop_assert_ne!(pair[0].end().checked_add(1), Some(pair[1].start()));
            }
        }
    }
}
