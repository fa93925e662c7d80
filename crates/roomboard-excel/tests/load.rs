//! Loader tests against workbooks built with `rust_xlsxwriter`.
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use std::io::Cursor;
use std::path::PathBuf;

use roomboard_core::{Cell, ColumnLayout};
use roomboard_excel::{LoadError, load_first_sheet, load_first_sheet_from};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

/// Writes `rows` into `ws` starting at `(0, first_col)`. Cells that parse as
/// numbers are written as numbers, empty strings are skipped.
fn fill(ws: &mut Worksheet, first_col: u16, rows: &[&[&str]]) -> Result<(), XlsxError> {
    for (r, cells) in rows.iter().enumerate() {
        let r = u32::try_from(r).expect("row index");
        for (c, value) in cells.iter().enumerate() {
            let c = first_col + u16::try_from(c).expect("col index");
            if value.is_empty() {
                continue;
            }
            match value.parse::<f64>() {
                Ok(n) => ws.write_number(r, c, n)?,
                Err(_) => ws.write_string(r, c, *value)?,
            };
        }
    }
    Ok(())
}

fn reservations_workbook(first_col: u16) -> Workbook {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.set_name("Reservations").expect("sheet name");
    fill(
        ws,
        first_col,
        &[
            &["Room", "", "Month", "Date"],
            &["Room: A101", "", "June", "5"],
            &["Room: B202", "", "May", "20th"],
        ],
    )
    .expect("write cells");

    let other = workbook.add_worksheet();
    other.set_name("Ignored").expect("sheet name");
    fill(other, 0, &[&["not", "read"]]).expect("write cells");
    workbook
}

fn save(mut workbook: Workbook, dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("Output.xlsx");
    workbook.save(&path).expect("save workbook");
    path
}

#[test]
fn loads_first_sheet_from_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = save(reservations_workbook(0), &dir);

    let sheet = load_first_sheet(&path).expect("load");
    assert_eq!(sheet.name, "Reservations");
    assert_eq!(
        sheet.header,
        vec![
            Cell::from("Room"),
            Cell::Empty,
            Cell::from("Month"),
            Cell::from("Date")
        ]
    );
    assert_eq!(sheet.rows.len(), 2);
    assert_eq!(sheet.rows[0][0], Cell::from("Room: A101"));
    assert_eq!(sheet.rows[0][3].to_text(), "5");
    assert_eq!(sheet.rows[1][3], Cell::from("20th"));
}

#[test]
fn loads_from_in_memory_buffer() {
    let mut workbook = reservations_workbook(0);
    let bytes = workbook.save_to_buffer().expect("save to buffer");

    let sheet = load_first_sheet_from(Cursor::new(bytes)).expect("load");
    assert_eq!(sheet.name, "Reservations");
    assert_eq!(sheet.rows.len(), 2);
}

#[test]
fn column_indices_are_relative_when_data_starts_in_column_b() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = save(reservations_workbook(1), &dir);

    let sheet = load_first_sheet(&path).expect("load");
    assert_eq!(sheet.width(), 4);
    assert_eq!(sheet.header[0], Cell::from("Room"));
    assert_eq!(sheet.rows[0][0], Cell::from("Room: A101"));
    assert_eq!(sheet.rows[0][2], Cell::from("June"));
    ColumnLayout::default()
        .validate(sheet.width())
        .expect("default layout fits a sheet starting in column B");
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("does-not-exist.xlsx");

    match load_first_sheet(&path) {
        Err(LoadError::NotFound { path: reported }) => assert_eq!(reported, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn directory_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_first_sheet(dir.path()).expect_err("directory");
    assert!(matches!(err, LoadError::Io { .. }), "got {err:?}");
}

#[test]
fn garbage_bytes_are_a_workbook_error() {
    let err = load_first_sheet_from(Cursor::new(b"definitely not a spreadsheet".to_vec()))
        .expect_err("garbage");
    assert!(matches!(err, LoadError::Workbook { .. }), "got {err:?}");
}

#[test]
fn empty_first_sheet_is_rejected() {
    let mut workbook = Workbook::new();
    workbook
        .add_worksheet()
        .set_name("Blank")
        .expect("sheet name");
    let bytes = workbook.save_to_buffer().expect("save to buffer");

    let err = load_first_sheet_from(Cursor::new(bytes)).expect_err("empty sheet");
    match err {
        LoadError::EmptySheet { sheet } => assert_eq!(sheet, "Blank"),
        other => panic!("expected EmptySheet, got {other:?}"),
    }
}
