//! Quarterly resolution: regular day-of-quarter or four custom dates.

use chrono::{Datelike, NaiveDate};

use crate::calendar::{clamped_date, shift_month};
use crate::error::RecurrenceResult;
use crate::rule::MonthDay;

/// `day` in the first month of the quarter following `from`'s quarter.
///
/// Quarters start in January, April, July and October; the quarter after
/// October-December is January of the following year.
pub(super) fn next_regular(day: u8, from: NaiveDate) -> RecurrenceResult<NaiveDate> {
    let months_ahead = match from.month0() / 3 {
        0 => 3,
        1 => 6,
        2 => 9,
        _ => 12,
    };
    let (year, month) = shift_month(from.year(), 1, months_ahead)?;
    clamped_date(year, month, u32::from(day))
}

/// First configured date in `year` that falls after `from`, scanning in
/// declaration order.
fn first_after_in_order(
    dates: &[MonthDay; 4],
    year: i32,
    from: NaiveDate,
) -> RecurrenceResult<Option<NaiveDate>> {
    for month_day in dates {
        let candidate = clamped_date(year, u32::from(month_day.month), u32::from(month_day.day))?;
        if candidate > from {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

pub(super) fn next_custom(dates: &[MonthDay; 4], from: NaiveDate) -> RecurrenceResult<NaiveDate> {
    if let Some(candidate) = first_after_in_order(dates, from.year(), from)? {
        return Ok(candidate);
    }
    if let Some(candidate) = first_after_in_order(dates, from.year() + 1, from)? {
        return Ok(candidate);
    }

    // Only reachable if every date of next year were on or before `from`
    let first = dates[0];
    clamped_date(from.year() + 1, u32::from(first.month), u32::from(first.day))
}
