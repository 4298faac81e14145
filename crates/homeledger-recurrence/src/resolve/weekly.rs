//! Weekly and biweekly resolution.

use chrono::NaiveDate;

use crate::calendar::{add_days, start_of_week};
use crate::error::RecurrenceResult;
use crate::rule::Weekday;

/// First `day` strictly after `from`.
pub(super) fn next_weekly(day: Weekday, from: NaiveDate) -> RecurrenceResult<NaiveDate> {
    let candidate = add_days(start_of_week(from)?, u64::from(day.num_days_from_sunday()))?;
    if candidate > from {
        Ok(candidate)
    } else {
        add_days(candidate, 7)
    }
}

/// First `day` strictly after `from` that is an even number of whole weeks from `anchor`.
pub(super) fn next_biweekly(
    day: Weekday,
    anchor: NaiveDate,
    from: NaiveDate,
) -> RecurrenceResult<NaiveDate> {
    let candidate = next_weekly(day, from)?;
    let weeks = candidate
        .signed_duration_since(anchor)
        .num_days()
        .div_euclid(7);

    if weeks.rem_euclid(2) == 0 {
        Ok(candidate)
    } else {
        tracing::trace!(%candidate, %anchor, weeks, "Shifting biweekly candidate onto phase");
        add_days(candidate, 7)
    }
}
