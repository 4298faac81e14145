//! Recurrence resolver: the next date a rule fires on.
//!
//! Each rule kind has its own strategy module. All strategies return a date
//! strictly after `from`, except yearly rules, which return `from` itself when
//! it is the configured month and day.

mod monthly;
mod quarterly;
mod semi_monthly;
mod weekly;
mod yearly;

use chrono::NaiveDate;

use crate::calendar::next_day;
use crate::error::{RecurrenceError, RecurrenceResult};
use crate::range::RangeLimits;
use crate::rule::{MonthlyRule, QuarterlyRule, RecurrenceRule};

/// ## Summary
/// Computes the next occurrence of `rule` searching from `from`.
///
/// `anchor` fixes the phase of biweekly rules and is ignored by every other
/// kind.
///
/// ## Errors
/// - `InvalidRule` if the rule is out of range or a biweekly rule has no anchor.
/// - `UnsupportedKind` for per-paycheck rules, which need period boundaries
///   (see [`crate::range::occurrences_in_range`]).
/// - `DateOutOfRange` if the result cannot be represented.
pub fn next_occurrence(
    rule: &RecurrenceRule,
    anchor: Option<NaiveDate>,
    from: NaiveDate,
) -> RecurrenceResult<NaiveDate> {
    rule.check_structure()?;

    let next = match *rule {
        RecurrenceRule::Monthly(MonthlyRule::DayOfMonth(day)) => monthly::next_on_day(day, from)?,
        RecurrenceRule::Monthly(MonthlyRule::EndOfMonth) => monthly::next_end_of_month(from)?,
        RecurrenceRule::Weekly { day_of_week } => weekly::next_weekly(day_of_week, from)?,
        RecurrenceRule::Biweekly { day_of_week } => {
            let anchor = anchor.ok_or_else(|| {
                RecurrenceError::InvalidRule("biweekly rules require an anchor date".to_string())
            })?;
            weekly::next_biweekly(day_of_week, anchor, from)?
        }
        RecurrenceRule::SemiMonthly { first_day, second } => {
            semi_monthly::next(first_day, second, from)?
        }
        RecurrenceRule::Quarterly(QuarterlyRule::Regular { day_of_month }) => {
            quarterly::next_regular(day_of_month, from)?
        }
        RecurrenceRule::Quarterly(QuarterlyRule::Custom { ref dates }) => {
            quarterly::next_custom(dates, from)?
        }
        RecurrenceRule::Yearly { month, day } => yearly::next(month, day, from)?,
        RecurrenceRule::PerPaycheck { .. } => {
            return Err(RecurrenceError::UnsupportedKind("per_paycheck"));
        }
    };

    tracing::trace!(kind = %rule.kind(), %from, %next, "Resolved next occurrence");
    Ok(next)
}

/// ## Summary
/// Returns up to `count` occurrences strictly after `from`, in order.
///
/// Uses the default iteration cap; see [`upcoming_occurrences_with_limits`].
///
/// ## Errors
/// Same as [`next_occurrence`].
pub fn upcoming_occurrences(
    rule: &RecurrenceRule,
    anchor: Option<NaiveDate>,
    from: NaiveDate,
    count: usize,
) -> RecurrenceResult<Vec<NaiveDate>> {
    upcoming_occurrences_with_limits(rule, anchor, from, count, RangeLimits::default())
}

/// ## Summary
/// Returns up to `count` occurrences strictly after `from`, making at most
/// `limits.max_iterations` resolver calls.
///
/// ## Errors
/// Same as [`next_occurrence`].
pub fn upcoming_occurrences_with_limits(
    rule: &RecurrenceRule,
    anchor: Option<NaiveDate>,
    from: NaiveDate,
    count: usize,
    limits: RangeLimits,
) -> RecurrenceResult<Vec<NaiveDate>> {
    let mut occurrences = Vec::with_capacity(count.min(usize::from(limits.max_iterations)));
    let mut cursor = from;

    for _ in 0..limits.max_iterations {
        if occurrences.len() >= count {
            return Ok(occurrences);
        }
        let next = next_occurrence(rule, anchor, cursor)?;
        let floor = occurrences.last().copied().unwrap_or(from);
        if next > floor {
            occurrences.push(next);
        }
        // Yearly rules may hand back the cursor itself
        cursor = if next > cursor { next } else { next_day(cursor)? };
    }

    if occurrences.len() < count {
        tracing::debug!(
            kind = %rule.kind(),
            requested = count,
            found = occurrences.len(),
            max_iterations = limits.max_iterations,
            "Upcoming occurrence search stopped at iteration cap"
        );
    }
    Ok(occurrences)
}


#[cfg(test)]
mod properties {
    use super::*;
    use crate::calendar::add_days;
    use crate::rule::{MonthDay, Weekday};
    use chrono::Datelike;

    const SAMPLE_DAYS: u64 = 1000;

    fn sample_dates() -> impl Iterator<Item = NaiveDate> {
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        (0..SAMPLE_DAYS).map(move |offset| add_days(start, offset).unwrap())
    }

    #[test]
    fn test_weekly_and_biweekly_land_on_weekday() {
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        for day in Weekday::all() {
            let weekly = RecurrenceRule::weekly(day);
            let biweekly = RecurrenceRule::biweekly(day);
            for from in sample_dates() {
                let next = next_occurrence(&weekly, None, from).unwrap();
                assert_eq!(next.weekday(), chrono::Weekday::from(day), "weekly from {from}");
                let next = next_occurrence(&biweekly, Some(anchor), from).unwrap();
                assert_eq!(next.weekday(), chrono::Weekday::from(day), "biweekly from {from}");
            }
        }
    }

    #[test]
    fn test_biweekly_parity() {
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let rule = RecurrenceRule::biweekly(Weekday::Friday);
        for from in sample_dates() {
            let next = next_occurrence(&rule, Some(anchor), from).unwrap();
            let days = next.signed_duration_since(anchor).num_days();
            assert_eq!(days.rem_euclid(14), 0, "{next} is off phase (from {from})");
        }
    }

    #[test]
    fn test_biweekly_parity_with_anchor_on_other_weekday() {
        let rule = RecurrenceRule::biweekly(Weekday::Friday);
        // A Monday in the past and a Wednesday after every sampled date
        let anchors = [
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
        ];
        for anchor in anchors {
            for from in sample_dates() {
                let next = next_occurrence(&rule, Some(anchor), from).unwrap();
                assert_eq!(next.weekday(), chrono::Weekday::Fri);
                let weeks = next.signed_duration_since(anchor).num_days().div_euclid(7);
                assert_eq!(weeks.rem_euclid(2), 0, "{next} is off phase for {anchor}");

                let after = next_occurrence(&rule, Some(anchor), next).unwrap();
                assert_eq!(after.signed_duration_since(next).num_days(), 14);
            }
        }
    }

    #[test]
    fn test_next_is_strictly_after_from() {
        let rules = [
            RecurrenceRule::monthly_on_day(31).unwrap(),
            RecurrenceRule::monthly_end_of_month(),
            RecurrenceRule::weekly(Weekday::Sunday),
            RecurrenceRule::biweekly(Weekday::Tuesday),
            RecurrenceRule::semi_monthly(15, 30).unwrap(),
            RecurrenceRule::semi_monthly_end_of_month(1).unwrap(),
            RecurrenceRule::quarterly_regular(31).unwrap(),
            RecurrenceRule::quarterly_custom(
                ["03-15", "06-18", "09-19", "12-09"].map(|s| MonthDay::parse(s).unwrap()),
            ),
        ];
        let anchor = Some(NaiveDate::from_ymd_opt(2022, 6, 7).unwrap());
        for rule in &rules {
            for from in sample_dates() {
                let next = next_occurrence(rule, anchor, from).unwrap();
                assert!(next > from, "{rule} from {from} gave {next}");
            }
        }
    }

    #[test]
    fn test_yearly_never_goes_backwards() {
        let rule = RecurrenceRule::yearly(2, 29).unwrap();
        for from in sample_dates() {
            let next = next_occurrence(&rule, None, from).unwrap();
            assert!(next >= from, "{rule} from {from} gave {next}");
            assert!(next.signed_duration_since(from).num_days() < 366);
        }
    }
}
