//! Yearly resolution.

use chrono::{Datelike, NaiveDate};

use crate::calendar::clamped_date;
use crate::error::RecurrenceResult;

/// `month`/`day` of `from`'s year unless that date is before `from`, otherwise
/// the following year. A date equal to `from` is returned as-is.
pub(super) fn next(month: u8, day: u8, from: NaiveDate) -> RecurrenceResult<NaiveDate> {
    let this_year = clamped_date(from.year(), u32::from(month), u32::from(day))?;
    if this_year >= from {
        return Ok(this_year);
    }
    clamped_date(from.year() + 1, u32::from(month), u32::from(day))
}
