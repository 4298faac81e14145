//! Semi-monthly resolution: two dates per month.

use chrono::{Datelike, NaiveDate};

use crate::calendar::{clamped_date, end_of_month, shift_month};
use crate::error::RecurrenceResult;
use crate::rule::SecondDay;

/// Both dates of the given month, in declaration order.
fn month_candidates(
    first_day: u8,
    second: SecondDay,
    year: i32,
    month: u32,
) -> RecurrenceResult<[NaiveDate; 2]> {
    let first = clamped_date(year, month, u32::from(first_day))?;
    let second = match second {
        SecondDay::Day(day) => clamped_date(year, month, u32::from(day))?,
        SecondDay::EndOfMonth => end_of_month(year, month)?,
    };
    Ok([first, second])
}

pub(super) fn next(
    first_day: u8,
    second: SecondDay,
    from: NaiveDate,
) -> RecurrenceResult<NaiveDate> {
    let this_month = month_candidates(first_day, second, from.year(), from.month())?;
    if let Some(candidate) = this_month.into_iter().find(|candidate| *candidate > from) {
        return Ok(candidate);
    }

    let (year, month) = shift_month(from.year(), from.month(), 1)?;
    clamped_date(year, month, u32::from(first_day))
}
