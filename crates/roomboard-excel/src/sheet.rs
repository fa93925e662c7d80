/// Conversion from calamine ranges to [`roomboard_core::Sheet`].
///
/// calamine trims a worksheet to its used area. Column indices are relative
/// to that area: when the data starts in column C, column C is index 0 and
/// the first non-empty row is the header.
use calamine::{Data, Range};
use roomboard_core::{Cell, Row, Sheet};

use crate::error::LoadError;

/// Converts one calamine cell.
///
/// Date cells become their serial number; error cells read as empty.
pub fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) | Data::Empty => Cell::Empty,
    }
}

/// Splits `range` into a header row and data rows.
///
/// # Errors
///
/// Returns [`LoadError::EmptySheet`] when the range has no rows.
pub fn range_to_sheet(name: &str, range: &Range<Data>) -> Result<Sheet, LoadError> {
    let mut rows = range
        .rows()
        .map(|cells| cells.iter().map(data_to_cell).collect::<Row>());

    let header = rows.next().ok_or_else(|| LoadError::EmptySheet {
        sheet: name.to_owned(),
    })?;

    Ok(Sheet {
        name: name.to_owned(),
        header,
        rows: rows.collect(),
    })
}
