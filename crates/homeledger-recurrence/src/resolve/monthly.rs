//! Monthly resolution: fixed day or last day of the month.

use chrono::{Datelike, NaiveDate};

use crate::calendar::{clamped_date, end_of_month, shift_month};
use crate::error::RecurrenceResult;

/// First date strictly after `from` falling on `day` (clamped to the month's length).
pub(super) fn next_on_day(day: u8, from: NaiveDate) -> RecurrenceResult<NaiveDate> {
    let candidate = clamped_date(from.year(), from.month(), u32::from(day))?;
    if candidate > from {
        return Ok(candidate);
    }

    let (year, month) = shift_month(from.year(), from.month(), 1)?;
    clamped_date(year, month, u32::from(day))
}

/// Last day of `from`'s month, or of the next month when `from` is already on it.
pub(super) fn next_end_of_month(from: NaiveDate) -> RecurrenceResult<NaiveDate> {
    let end = end_of_month(from.year(), from.month())?;
    if from < end {
        return Ok(end);
    }

    let (year, month) = shift_month(from.year(), from.month(), 1)?;
    end_of_month(year, month)
}
