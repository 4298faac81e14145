//! Recurrence rule model.
//!
//! [`RecurrenceRule`] is the strongly-typed form the resolver works with.
//! [`FrequencyConfig`] is the loosely-typed shape stored alongside income and
//! expense records; [`RecurrenceRule::from_config`] converts between the two.

mod config;
mod month_day;
mod weekday;

pub use config::{FrequencyConfig, FrequencyKind};
pub use month_day::MonthDay;
pub use weekday::Weekday;

use crate::error::{RecurrenceError, RecurrenceResult};

/// How a monthly rule picks its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthlyRule {
    /// Fixed day of month (1-31, clamped to the month's length).
    DayOfMonth(u8),
    /// Last calendar day of every month.
    EndOfMonth,
}

/// Second date of a semi-monthly rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondDay {
    Day(u8),
    EndOfMonth,
}

/// Quarterly schedule mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuarterlyRule {
    /// Same day in the first month of each quarter (Jan, Apr, Jul, Oct).
    Regular { day_of_month: u8 },
    /// Four explicit month/day pairs, one per quarter, in declaration order.
    Custom { dates: [MonthDay; 4] },
}

/// Which date of a paycheck period a per-paycheck rule fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaycheckTrigger {
    #[default]
    PeriodStart,
    PayDate,
}

impl PaycheckTrigger {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PeriodStart => "period_start",
            Self::PayDate => "pay_date",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "period_start" => Some(Self::PeriodStart),
            "pay_date" => Some(Self::PayDate),
            _ => None,
        }
    }
}

/// Description of how an income deposit or fixed expense repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceRule {
    Monthly(MonthlyRule),
    Weekly {
        day_of_week: Weekday,
    },
    /// Every second week, phase-locked to an anchor date supplied at resolve time.
    Biweekly {
        day_of_week: Weekday,
    },
    SemiMonthly {
        first_day: u8,
        second: SecondDay,
    },
    Quarterly(QuarterlyRule),
    Yearly {
        month: u8,
        day: u8,
    },
    /// Once per externally supplied paycheck period; only the range API can
    /// resolve it.
    PerPaycheck {
        trigger: PaycheckTrigger,
    },
}

pub(crate) fn check_day(field: &str, day: u8) -> RecurrenceResult<u8> {
    if (1..=31).contains(&day) {
        Ok(day)
    } else {
        Err(RecurrenceError::InvalidRule(format!(
            "{field} must be between 1 and 31, got {day}"
        )))
    }
}

pub(crate) fn check_month(field: &str, month: u8) -> RecurrenceResult<u8> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(RecurrenceError::InvalidRule(format!(
            "{field} must be between 1 and 12, got {month}"
        )))
    }
}

impl RecurrenceRule {
    /// ## Summary
    /// Monthly on a fixed day.
    ///
    /// ## Errors
    /// Returns `InvalidRule` if `day` is outside 1-31.
    pub fn monthly_on_day(day: u8) -> RecurrenceResult<Self> {
        Ok(Self::Monthly(MonthlyRule::DayOfMonth(check_day(
            "day_of_month",
            day,
        )?)))
    }

    #[must_use]
    pub const fn monthly_end_of_month() -> Self {
        Self::Monthly(MonthlyRule::EndOfMonth)
    }

    #[must_use]
    pub const fn weekly(day_of_week: Weekday) -> Self {
        Self::Weekly { day_of_week }
    }

    /// Biweekly rules need an anchor date when resolved.
    #[must_use]
    pub const fn biweekly(day_of_week: Weekday) -> Self {
        Self::Biweekly { day_of_week }
    }

    /// ## Summary
    /// Twice monthly on two fixed days.
    ///
    /// ## Errors
    /// Returns `InvalidRule` if either day is outside 1-31.
    pub fn semi_monthly(first_day: u8, second_day: u8) -> RecurrenceResult<Self> {
        Ok(Self::SemiMonthly {
            first_day: check_day("first_day", first_day)?,
            second: SecondDay::Day(check_day("second_day", second_day)?),
        })
    }

    /// ## Summary
    /// Twice monthly on a fixed day and the last day of the month.
    ///
    /// ## Errors
    /// Returns `InvalidRule` if `first_day` is outside 1-31.
    pub fn semi_monthly_end_of_month(first_day: u8) -> RecurrenceResult<Self> {
        Ok(Self::SemiMonthly {
            first_day: check_day("first_day", first_day)?,
            second: SecondDay::EndOfMonth,
        })
    }

    /// ## Summary
    /// Quarterly on a fixed day of the first month of each quarter.
    ///
    /// ## Errors
    /// Returns `InvalidRule` if `day_of_month` is outside 1-31.
    pub fn quarterly_regular(day_of_month: u8) -> RecurrenceResult<Self> {
        Ok(Self::Quarterly(QuarterlyRule::Regular {
            day_of_month: check_day("day_of_month", day_of_month)?,
        }))
    }

    #[must_use]
    pub const fn quarterly_custom(dates: [MonthDay; 4]) -> Self {
        Self::Quarterly(QuarterlyRule::Custom { dates })
    }

    /// ## Summary
    /// Once a year on `month`/`day`.
    ///
    /// ## Errors
    /// Returns `InvalidRule` if `month` is outside 1-12 or `day` outside 1-31.
    pub fn yearly(month: u8, day: u8) -> RecurrenceResult<Self> {
        Ok(Self::Yearly {
            month: check_month("month", month)?,
            day: check_day("day", day)?,
        })
    }

    #[must_use]
    pub const fn per_paycheck(trigger: PaycheckTrigger) -> Self {
        Self::PerPaycheck { trigger }
    }

    /// Stored discriminator for this rule.
    #[must_use]
    pub const fn kind(&self) -> FrequencyKind {
        match self {
            Self::Monthly(_) => FrequencyKind::Monthly,
            Self::Weekly { .. } => FrequencyKind::Weekly,
            Self::Biweekly { .. } => FrequencyKind::Biweekly,
            Self::SemiMonthly { .. } => FrequencyKind::SemiMonthly,
            Self::Quarterly(_) => FrequencyKind::Quarterly,
            Self::Yearly { .. } => FrequencyKind::Yearly,
            Self::PerPaycheck { .. } => FrequencyKind::PerPaycheck,
        }
    }

    /// Returns true if resolving this rule needs an anchor date.
    #[must_use]
    pub const fn requires_anchor(&self) -> bool {
        matches!(self, Self::Biweekly { .. })
    }

    /// ## Summary
    /// Re-checks numeric ranges on a rule that may have been built without the
    /// checked constructors.
    ///
    /// ## Errors
    /// Returns `InvalidRule` for a day outside 1-31 or a month outside 1-12.
    pub fn check_structure(&self) -> RecurrenceResult<()> {
        match *self {
            Self::Monthly(MonthlyRule::DayOfMonth(day))
            | Self::Quarterly(QuarterlyRule::Regular { day_of_month: day }) => {
                check_day("day_of_month", day)?;
            }
            Self::SemiMonthly { first_day, second } => {
                check_day("first_day", first_day)?;
                if let SecondDay::Day(day) = second {
                    check_day("second_day", day)?;
                }
            }
            Self::Quarterly(QuarterlyRule::Custom { dates }) => {
                for date in dates {
                    check_month("custom_dates month", date.month)?;
                    check_day("custom_dates day", date.day)?;
                }
            }
            Self::Yearly { month, day } => {
                check_month("month", month)?;
                check_day("day", day)?;
            }
            Self::Monthly(MonthlyRule::EndOfMonth)
            | Self::Weekly { .. }
            | Self::Biweekly { .. }
            | Self::PerPaycheck { .. } => {}
        }
        Ok(())
    }
}
