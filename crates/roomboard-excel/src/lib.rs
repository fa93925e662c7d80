#![deny(clippy::print_stdout, clippy::print_stderr)]
//! Spreadsheet loading for the room board.
//!
//! Reads the first sheet of a workbook into a [`roomboard_core::Sheet`]. The
//! `calamine` dependency is confined to this crate. The workbook format is
//! detected by calamine, so `.xlsx`, `.xlsm`, `.xlsb`, `.xls` and `.ods` all
//! work. The sheet name is discovered, never configured; any further sheets
//! are ignored.
use std::io::{Read, Seek};
use std::path::Path;

use calamine::{Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};
use roomboard_core::Sheet;

pub mod error;
mod sheet;

pub use error::LoadError;
pub use sheet::{data_to_cell, range_to_sheet};

/// Loads the first sheet of the workbook at `path`.
///
/// # Errors
///
/// Returns [`LoadError`] when the file is missing or unreadable, is not a
/// workbook calamine understands, has no sheets, or its first sheet is empty.
pub fn load_first_sheet(path: &Path) -> Result<Sheet, LoadError> {
    check_readable(path)?;
    let workbook = open_workbook_auto(path).map_err(|e| LoadError::Workbook {
        detail: e.to_string(),
    })?;
    log::debug!("opened workbook {}", path.display());
    read_first_sheet(workbook)
}

/// Loads the first sheet of a workbook held in `reader`.
///
/// The format is sniffed from the content.
///
/// # Errors
///
/// Returns [`LoadError`] when the bytes are not a workbook, it has no sheets,
/// or its first sheet is empty.
pub fn load_first_sheet_from<RS: Read + Seek + Clone>(reader: RS) -> Result<Sheet, LoadError> {
    let workbook = open_workbook_auto_from_rs(reader).map_err(|e| LoadError::Workbook {
        detail: e.to_string(),
    })?;
    read_first_sheet(workbook)
}

fn check_readable(path: &Path) -> Result<(), LoadError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Err(LoadError::Io {
            path: path.to_path_buf(),
            detail: "is a directory".to_owned(),
        }),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(LoadError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(LoadError::Io {
            path: path.to_path_buf(),
            detail: e.to_string(),
        }),
    }
}

fn read_first_sheet<RS: Read + Seek>(mut workbook: Sheets<RS>) -> Result<Sheet, LoadError> {
    let names = workbook.sheet_names();
    let Some(name) = names.first() else {
        return Err(LoadError::NoSheets);
    };
    if names.len() > 1 {
        log::debug!(
            "workbook has {} sheets; reading only {name:?}",
            names.len()
        );
    }

    let range = workbook
        .worksheet_range(name)
        .map_err(|e| LoadError::Workbook {
            detail: format!("failed to read sheet {name:?}: {e}"),
        })?;

    let sheet = range_to_sheet(name, &range)?;
    log::info!(
        "loaded sheet {:?}: {} column(s), {} data row(s)",
        sheet.name,
        sheet.width(),
        sheet.rows.len()
    );
    Ok(sheet)
}
