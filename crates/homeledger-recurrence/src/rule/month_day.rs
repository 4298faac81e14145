//! `MM-DD` month/day pairs used by custom quarterly schedules.

use std::fmt;
use std::str::FromStr;

use crate::error::RecurrenceError;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A month and day without a year.
///
/// The day is range-checked (1-31) but not checked against the month; it is
/// clamped to the month's length when a concrete date is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthDay {
    pub month: u8,
    pub day: u8,
}

impl MonthDay {
    /// Creates a month/day pair if both parts are in range.
    #[must_use]
    pub fn new(month: u8, day: u8) -> Option<Self> {
        ((1..=12).contains(&month) && (1..=31).contains(&day)).then_some(Self { month, day })
    }

    /// Parses the `MM-DD` form (exactly two digits each).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (month, day) = s.split_once('-')?;
        if month.len() != 2 || day.len() != 2 {
            return None;
        }
        if !month.bytes().chain(day.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        Self::new(month.parse().ok()?, day.parse().ok()?)
    }

    /// Short label such as `Mar 15`.
    #[must_use]
    pub fn label(self) -> String {
        let month = usize::from(self.month)
            .checked_sub(1)
            .and_then(|index| MONTH_ABBREVIATIONS.get(index))
            .copied()
            .unwrap_or("?");
        format!("{month} {}", self.day)
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| RecurrenceError::InvalidRule(format!("invalid MM-DD date: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(MonthDay::parse("03-15"), Some(MonthDay { month: 3, day: 15 }));
        assert_eq!(MonthDay::parse("12-31"), Some(MonthDay { month: 12, day: 31 }));
        // Calendar legality is not checked here
        assert_eq!(MonthDay::parse("02-30"), Some(MonthDay { month: 2, day: 30 }));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["3-15", "03-5", "13-01", "00-10", "01-00", "01-32", "0a-10", "0315", ""] {
            assert_eq!(MonthDay::parse(input), None, "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_display_and_label() {
        let md = MonthDay { month: 9, day: 5 };
        assert_eq!(md.to_string(), "09-05");
        assert_eq!(md.label(), "Sep 5");
    }

    #[test]
    fn test_from_str_error() {
        let err = "june".parse::<MonthDay>().unwrap_err();
        assert!(matches!(err, RecurrenceError::InvalidRule(_)));
    }
}
