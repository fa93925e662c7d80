/// Filter and sort stage.
///
/// Every data row is paired with its derived date once ([`derive_rows`]).
/// [`upcoming`] then keeps the rows dated today or later and orders them by
/// date. Sorting is stable, so bookings on the same day keep sheet order.
/// Rows without a valid date are dropped silently; they are a normal part of
/// the export (blank spacer rows, notes), not failures.
use chrono::NaiveDate;

use crate::cell::{Row, Sheet};
use crate::dates::derive_date;
use crate::layout::ColumnLayout;

/// A raw row with the date derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRow {
    /// The row as loaded.
    pub row: Row,
    /// The derived reservation date; `None` if the row has no valid date.
    pub date: Option<NaiveDate>,
}

/// The rows that made it through the filter, ready to render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schedule {
    /// Header row, rendered first and never filtered.
    pub header: Row,
    /// Upcoming rows in ascending date order. Every `date` is `Some`.
    pub rows: Vec<DerivedRow>,
    /// Rows dropped because no valid date could be derived.
    pub dropped_invalid: usize,
    /// Rows dropped because their date is before today.
    pub dropped_past: usize,
}

impl Schedule {
    /// Number of rows that passed the filter.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when no row passed the filter.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Earliest and latest reservation dates, if any row passed the filter.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.rows.first()?.date?;
        let last = self.rows.last()?.date?;
        Some((first, last))
    }
}

/// Pairs each data row with its derived date, preserving order.
pub fn derive_rows(rows: Vec<Row>, layout: &ColumnLayout, today: NaiveDate) -> Vec<DerivedRow> {
    rows.into_iter()
        .map(|row| {
            let date = derive_date(&row, layout, today);
            DerivedRow { row, date }
        })
        .collect()
}

/// Keeps rows dated on or after `today` and sorts them by date (stable).
pub fn upcoming(derived: Vec<DerivedRow>, today: NaiveDate) -> Vec<DerivedRow> {
    let mut kept: Vec<DerivedRow> = derived
        .into_iter()
        .filter(|d| d.date.is_some_and(|date| date >= today))
        .collect();
    kept.sort_by_key(|d| d.date);
    kept
}

/// Runs derivation, filtering and sorting over a loaded sheet.
pub fn plan(sheet: Sheet, layout: &ColumnLayout, today: NaiveDate) -> Schedule {
    let Sheet { name, header, rows } = sheet;
    let total = rows.len();
    let derived = derive_rows(rows, layout, today);

    let dropped_invalid = derived.iter().filter(|d| d.date.is_none()).count();
    let dropped_past = derived
        .iter()
        .filter(|d| d.date.is_some_and(|date| date < today))
        .count();

    let rows = upcoming(derived, today);
    log::debug!(
        "sheet {name:?}: {total} data row(s), {} upcoming, {dropped_past} past, {dropped_invalid} without a valid date",
        rows.len()
    );

    Schedule {
        header,
        rows,
        dropped_invalid,
        dropped_past,
    }
}
