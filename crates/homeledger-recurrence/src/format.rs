//! English descriptions of recurrence rules.

use std::fmt;

use crate::rule::{
    FrequencyConfig, FrequencyKind, MonthDay, MonthlyRule, PaycheckTrigger, QuarterlyRule,
    RecurrenceRule, SecondDay,
};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English ordinal suffix for `n` ("st", "nd", "rd" or "th").
#[must_use]
pub const fn ordinal_suffix(n: u32) -> &'static str {
    if matches!(n % 100, 11..=13) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

fn ordinal(n: u8) -> String {
    format!("{n}{}", ordinal_suffix(u32::from(n)))
}

fn month_name(month: u8) -> &'static str {
    usize::from(month)
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index))
        .copied()
        .unwrap_or("?")
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly(MonthlyRule::DayOfMonth(day)) => {
                write!(f, "Monthly on the {}", ordinal(*day))
            }
            Self::Monthly(MonthlyRule::EndOfMonth) => f.write_str("Monthly on the last day"),
            Self::Weekly { day_of_week } => write!(f, "Weekly on {day_of_week}"),
            Self::Biweekly { day_of_week } => write!(f, "Every other {day_of_week}"),
            Self::SemiMonthly { first_day, second } => {
                write!(f, "Twice monthly on the {} and ", ordinal(*first_day))?;
                match second {
                    SecondDay::Day(day) => f.write_str(&ordinal(*day)),
                    SecondDay::EndOfMonth => f.write_str("last day"),
                }
            }
            Self::Quarterly(QuarterlyRule::Regular { day_of_month }) => {
                write!(f, "Quarterly on the {}", ordinal(*day_of_month))
            }
            Self::Quarterly(QuarterlyRule::Custom { dates }) => {
                let labels = dates.map(MonthDay::label);
                write!(f, "Quarterly on {}", labels.join(", "))
            }
            Self::Yearly { month, day } => write!(f, "Yearly on {} {day}", month_name(*month)),
            Self::PerPaycheck { trigger } => match trigger {
                PaycheckTrigger::PeriodStart => f.write_str("Every paycheck (period start)"),
                PaycheckTrigger::PayDate => f.write_str("Every paycheck (pay date)"),
            },
        }
    }
}

/// ## Summary
/// Describes a stored frequency for display.
///
/// Falls back to the kind's generic label when the config does not form a
/// valid rule, so half-filled forms still render something sensible.
#[must_use]
pub fn describe_frequency(kind: FrequencyKind, config: &FrequencyConfig) -> String {
    RecurrenceRule::from_config(kind, config)
        .map_or_else(|_| kind.label().to_string(), |rule| rule.to_string())
}
