/// Reservation date derivation.
///
/// A reservation row carries only a month name and a day number. The year is
/// taken from the reference "today", with one rollover rule for bookings made
/// near year end:
///
/// - month index is below today's month index, and
/// - today's month index (0-based) is above [`ROLLOVER_AFTER_MONTH0`],
///
/// then the normalized month and day are moved into the year after today's. Outside November and December
/// an earlier month stays in the current year and is later filtered as past.
///
/// Day numbers are normalized like a calendar constructor would: day 0 is the
/// last day of the previous month and days past the month's end roll forward.
/// Anything that cannot become a date (unknown month, overflowing day) yields
/// `None` instead of an error.
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, TimeDelta};
use regex::Regex;

use crate::cell::{Cell, cell_at};
use crate::layout::ColumnLayout;

/// Lower-case English month names, index 0 = January.
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Rollover only applies when today's 0-based month index exceeds this.
pub const ROLLOVER_AFTER_MONTH0: u32 = 9;

static NON_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9]").unwrap_or_else(|_| unreachable!("static pattern is valid"))
});

/// Parses a month-name cell into a 0-based month index.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Returns
/// `None` for anything that is not one of the twelve full month names.
pub fn parse_month(cell: &Cell) -> Option<u32> {
    let text = cell.to_text().to_lowercase();
    let text = text.trim();
    let index = MONTH_NAMES.iter().position(|name| *name == text)?;
    u32::try_from(index).ok()
}

/// Parses a day cell by keeping only its ASCII digits.
///
/// `"5th"` reads as 5, `"Mon 12"` as 12. A cell without digits reads as day 0.
/// Returns `None` only when the digit run does not fit in an `i64`.
pub fn parse_day(cell: &Cell) -> Option<i64> {
    let text = cell.to_text();
    let digits = NON_DIGIT_RE.replace_all(&text, "");
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse::<i64>().ok()
}

/// Builds the date `day` days into `month0` of `year`, counting from day 1.
///
/// Out-of-range days are carried into neighbouring months, so
/// `normalized_date(2024, 5, 0)` is 2024-05-31 and
/// `normalized_date(2024, 1, 30)` is 2024-03-01.
pub fn normalized_date(year: i32, month0: u32, day: i64) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, 1)?;
    let offset = TimeDelta::try_days(day.checked_sub(1)?)?;
    first.checked_add_signed(offset)
}

/// Returns true when a reservation in `month0` belongs to next year.
pub fn rolls_over(month0: u32, today: NaiveDate) -> bool {
    month0 < today.month0() && today.month0() > ROLLOVER_AFTER_MONTH0
}

/// Derives the reservation date of `row`, relative to `today`.
///
/// Returns `None` when the month cell is not a month name or the day cell
/// cannot be turned into a date.
pub fn derive_date(row: &[Cell], layout: &ColumnLayout, today: NaiveDate) -> Option<NaiveDate> {
    let month0 = parse_month(cell_at(row, layout.month))?;
    let day = parse_day(cell_at(row, layout.day))?;
    let candidate = normalized_date(today.year(), month0, day)?;
    if !rolls_over(month0, today) {
        return Some(candidate);
    }
    normalized_date(
        today.year().checked_add(1)?,
        candidate.month0(),
        i64::from(candidate.day()),
    )
}
