//! Row bookkeeping across a workbook's sheets

use pretty_assertions::assert_eq;
use quill_sheets::prelude::*;

#[test]
fn test_written_row_count_tracks_rows() {
    let mut session = WorkbookSession::new(WorkbookDefaultOptions::new()).unwrap();
    let mut last = 0;
    for _ in 0..250 {
        assert_eq!(session.record_row_written().unwrap(), Some(0));
        let count = session.current_sheet().written_row_count();
        assert!(count > last);
        last = count;
    }
    assert_eq!(last, 250);
}

#[test]
fn test_rows_roll_over_to_new_sheets() {
    let mut session = WorkbookSession::with_workbook_id("rows", WorkbookDefaultOptions::new())
        .unwrap()
        .with_max_rows_per_sheet(3);

    for _ in 0..7 {
        session.record_row_written().unwrap();
    }

    let counts: Vec<_> = session
        .sheets()
        .iter()
        .map(|s| (s.name().to_string(), s.written_row_count()))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("Sheet1".to_string(), 3),
            ("Sheet2".to_string(), 3),
            ("Sheet3".to_string(), 1),
        ]
    );
}

#[test]
fn test_rows_dropped_when_auto_creation_disabled() {
    let options = WorkbookDefaultOptions::new().create_new_sheets_automatically(false);
    let mut session = WorkbookSession::new(options)
        .unwrap()
        .with_max_rows_per_sheet(2);

    let placed: Vec<_> = (0..4)
        .map(|_| session.record_row_written().unwrap())
        .collect();
    assert_eq!(placed, vec![Some(0), Some(0), None, None]);
    assert_eq!(session.sheet_count(), 1);
}

#[test]
fn test_writing_to_an_earlier_sheet() {
    let mut session = WorkbookSession::new(WorkbookDefaultOptions::new()).unwrap();
    session.add_new_sheet_and_make_it_current().unwrap();
    session.record_row_written().unwrap();

    session.set_current_sheet(0).unwrap();
    session.record_row_written().unwrap();
    session.record_row_written().unwrap();

    assert_eq!(session.sheet(0).unwrap().written_row_count(), 2);
    assert_eq!(session.sheet(1).unwrap().written_row_count(), 1);
}

#[test]
fn test_default_row_style_travels_with_options() {
    let style = Style::new().bold(true).background(Color::rgb(0xDD, 0xEB, 0xF7));
    let options = WorkbookDefaultOptions::with_row_style(style.clone()).default_row_height(20.0);
    let session = WorkbookSession::new(options).unwrap();

    assert_eq!(session.options().default_row_style, style);
    assert_eq!(session.options().default_row_height, Some(20.0));
}
