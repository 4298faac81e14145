//! ## Summary
//! Export of recurrence rules as RFC 5545 recurrence sets.
//!
//! The exported set starts (DTSTART) at the rule's first occurrence on or
//! after a given date and expands to the same dates as
//! [`crate::range::occurrences_in_range`]. Days that the engine clamps to
//! the end of short months are written as `BYMONTHDAY=28,...,d;BYSETPOS=-1`.

use chrono::NaiveDate;
use rrule::RRuleSet;

use crate::error::{RecurrenceError, RecurrenceResult};
use crate::range::first_on_or_after;
use crate::rule::{MonthlyRule, QuarterlyRule, RecurrenceRule, SecondDay, Weekday};

const fn ical_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Sunday => "SU",
        Weekday::Monday => "MO",
        Weekday::Tuesday => "TU",
        Weekday::Wednesday => "WE",
        Weekday::Thursday => "TH",
        Weekday::Friday => "FR",
        Weekday::Saturday => "SA",
    }
}

/// `BYMONTHDAY` part selecting `day`, or the month's last day when shorter.
fn clamped_month_day(day: u8) -> String {
    if day <= 28 {
        return format!("BYMONTHDAY={day}");
    }
    let days = (28..=day)
        .map(|d: u8| d.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("BYMONTHDAY={days};BYSETPOS=-1")
}

fn unclamped_semi_monthly_day(day: u8) -> RecurrenceResult<u8> {
    if day <= 28 {
        Ok(day)
    } else {
        Err(RecurrenceError::NotRepresentable(format!(
            "semi-monthly day {day} needs clamping in short months"
        )))
    }
}

fn rrule_lines(rule: &RecurrenceRule) -> RecurrenceResult<Vec<String>> {
    let lines = match *rule {
        RecurrenceRule::Monthly(MonthlyRule::DayOfMonth(day)) => {
            vec![format!("FREQ=MONTHLY;{}", clamped_month_day(day))]
        }
        RecurrenceRule::Monthly(MonthlyRule::EndOfMonth) => {
            vec!["FREQ=MONTHLY;BYMONTHDAY=-1".to_string()]
        }
        RecurrenceRule::Weekly { day_of_week } => {
            vec![format!("FREQ=WEEKLY;BYDAY={}", ical_weekday(day_of_week))]
        }
        RecurrenceRule::Biweekly { day_of_week } => {
            vec![format!(
                "FREQ=WEEKLY;INTERVAL=2;BYDAY={}",
                ical_weekday(day_of_week)
            )]
        }
        RecurrenceRule::SemiMonthly { first_day, second } => {
            let first = unclamped_semi_monthly_day(first_day)?;
            let second = match second {
                SecondDay::Day(day) if day < first => {
                    return Err(RecurrenceError::NotRepresentable(format!(
                        "semi-monthly days {first} and {day} are declared out of order"
                    )));
                }
                SecondDay::Day(day) => i16::from(unclamped_semi_monthly_day(day)?),
                SecondDay::EndOfMonth => -1,
            };
            vec![format!("FREQ=MONTHLY;BYMONTHDAY={first},{second}")]
        }
        RecurrenceRule::Quarterly(QuarterlyRule::Regular { day_of_month }) => {
            vec![format!(
                "FREQ=MONTHLY;INTERVAL=3;{}",
                clamped_month_day(day_of_month)
            )]
        }
        RecurrenceRule::Quarterly(QuarterlyRule::Custom { dates }) => {
            if !dates.windows(2).all(|pair| pair[0] < pair[1]) {
                return Err(RecurrenceError::NotRepresentable(
                    "custom quarterly dates are not in calendar order".to_string(),
                ));
            }
            dates
                .iter()
                .map(|date| {
                    format!(
                        "FREQ=YEARLY;BYMONTH={};{}",
                        date.month,
                        clamped_month_day(date.day)
                    )
                })
                .collect()
        }
        RecurrenceRule::Yearly { month, day } => {
            vec![format!(
                "FREQ=YEARLY;BYMONTH={month};{}",
                clamped_month_day(day)
            )]
        }
        RecurrenceRule::PerPaycheck { .. } => {
            return Err(RecurrenceError::UnsupportedKind("per_paycheck"));
        }
    };
    Ok(lines)
}

/// ## Summary
/// Renders `rule` as iCalendar `DTSTART` and `RRULE` lines.
///
/// DTSTART is the first occurrence on or after `start`, as a UTC midnight.
///
/// ## Errors
/// - `UnsupportedKind` for per-paycheck rules.
/// - `NotRepresentable` for semi-monthly days above 28 (other than end of month).
/// - Any resolver error, e.g. `InvalidRule` for a biweekly rule without anchor.
pub fn to_rruleset_string(
    rule: &RecurrenceRule,
    anchor: Option<NaiveDate>,
    start: NaiveDate,
) -> RecurrenceResult<String> {
    rule.check_structure()?;
    let lines = rrule_lines(rule)?;
    let first = first_on_or_after(rule, anchor, start)?;

    let mut out = format!("DTSTART:{}T000000Z", first.format("%Y%m%d"));
    for line in lines {
        out.push_str("\nRRULE:");
        out.push_str(&line);
    }
    tracing::trace!(kind = %rule.kind(), rruleset = %out, "Exported recurrence rule");
    Ok(out)
}

/// ## Summary
/// Builds an [`RRuleSet`] equivalent to `rule` from its first occurrence on
/// or after `start`.
///
/// ## Errors
/// Everything [`to_rruleset_string`] returns, plus `RRule` if the `rrule`
/// crate rejects the rendered set.
pub fn to_rrule_set(
    rule: &RecurrenceRule,
    anchor: Option<NaiveDate>,
    start: NaiveDate,
) -> RecurrenceResult<RRuleSet> {
    Ok(to_rruleset_string(rule, anchor, start)?.parse::<RRuleSet>()?)
}
