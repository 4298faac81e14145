//! Calendar arithmetic shared by the per-kind resolvers.
//!
//! Configured days are clamped to the length of the target month: day 31 in
//! April resolves to April 30, and February 29 in a common year resolves to
//! February 28. Nothing rolls over into the following month.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{RecurrenceError, RecurrenceResult};

/// Returns true for Gregorian leap years.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// ## Summary
/// Builds a date, clamping `day` into `1..=days_in_month(year, month)`.
///
/// ## Errors
/// Returns `DateOutOfRange` if the month is not 1-12 or the year is outside
/// chrono's supported range.
pub fn clamped_date(year: i32, month: u32, day: u32) -> RecurrenceResult<NaiveDate> {
    let day = day.clamp(1, days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        RecurrenceError::DateOutOfRange(format!("{year:04}-{month:02}-{day:02}"))
    })
}

/// ## Summary
/// Last calendar day of `month` in `year`.
///
/// ## Errors
/// Returns `DateOutOfRange` if the date cannot be represented.
pub fn end_of_month(year: i32, month: u32) -> RecurrenceResult<NaiveDate> {
    clamped_date(year, month, days_in_month(year, month))
}

/// ## Summary
/// Moves a (year, month) pair by `delta` months.
///
/// ## Errors
/// Returns `DateOutOfRange` if the resulting year does not fit in an `i32`.
pub fn shift_month(year: i32, month: u32, delta: i32) -> RecurrenceResult<(i32, u32)> {
    // month is 1-based; work in a 0-based month index
    let index = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(delta);
    i32::try_from(index.div_euclid(12))
        .ok()
        .zip(u32::try_from(index.rem_euclid(12) + 1).ok())
        .ok_or_else(|| {
            RecurrenceError::DateOutOfRange(format!("{year:04}-{month:02} shifted by {delta}"))
        })
}

/// ## Summary
/// Sunday on or before `date`.
///
/// ## Errors
/// Returns `DateOutOfRange` near the lower bound of the calendar.
pub fn start_of_week(date: NaiveDate) -> RecurrenceResult<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(
        date.weekday().num_days_from_sunday(),
    )))
    .ok_or_else(|| RecurrenceError::DateOutOfRange(format!("start of week for {date}")))
}

/// ## Summary
/// Adds `days` to `date`.
///
/// ## Errors
/// Returns `DateOutOfRange` near the upper bound of the calendar.
pub fn add_days(date: NaiveDate, days: u64) -> RecurrenceResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| RecurrenceError::DateOutOfRange(format!("{date} + {days} days")))
}

/// ## Summary
/// The day after `date`.
///
/// ## Errors
/// Returns `DateOutOfRange` at the upper bound of the calendar.
pub fn next_day(date: NaiveDate) -> RecurrenceResult<NaiveDate> {
    date.succ_opt()
        .ok_or_else(|| RecurrenceError::DateOutOfRange(format!("day after {date}")))
}

/// ## Summary
/// The day before `date`.
///
/// ## Errors
/// Returns `DateOutOfRange` at the lower bound of the calendar.
pub fn previous_day(date: NaiveDate) -> RecurrenceResult<NaiveDate> {
    date.pred_opt()
        .ok_or_else(|| RecurrenceError::DateOutOfRange(format!("day before {date}")))
}
