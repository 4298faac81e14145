//! Stored frequency shape: a kind discriminator plus a loosely-typed config.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    MonthDay, MonthlyRule, PaycheckTrigger, QuarterlyRule, RecurrenceRule, SecondDay, Weekday,
};
use crate::error::{RecurrenceError, RecurrenceResult};

/// Frequency discriminator as stored with income and expense records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyKind {
    Monthly,
    Weekly,
    Biweekly,
    SemiMonthly,
    Quarterly,
    Yearly,
    PerPaycheck,
}

impl FrequencyKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::SemiMonthly => "semi_monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
            Self::PerPaycheck => "per_paycheck",
        }
    }

    /// Human-readable label, used when a config is too incomplete to describe.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Weekly => "Weekly",
            Self::Biweekly => "Every other week",
            Self::SemiMonthly => "Twice monthly",
            Self::Quarterly => "Quarterly",
            Self::Yearly => "Yearly",
            Self::PerPaycheck => "Every paycheck",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "monthly" => Self::Monthly,
            "weekly" => Self::Weekly,
            "biweekly" => Self::Biweekly,
            "semi_monthly" => Self::SemiMonthly,
            "quarterly" => Self::Quarterly,
            "yearly" => Self::Yearly,
            "per_paycheck" => Self::PerPaycheck,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Monthly,
            Self::Weekly,
            Self::Biweekly,
            Self::SemiMonthly,
            Self::Quarterly,
            Self::Yearly,
            Self::PerPaycheck,
        ]
    }
}

impl fmt::Display for FrequencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frequency configuration as persisted in JSON.
///
/// Every field is optional and numbers are kept wide so that out-of-range
/// values survive deserialization and can be reported by the validator.
/// Which fields matter depends on the [`FrequencyKind`] stored next to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_end_of_month: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_day: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_day: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_second_end_of_month: Option<bool>,
    /// `regular` (default) or `custom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarterly_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_dates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,
    /// `period_start` (default) or `pay_date`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paycheck_trigger: Option<String>,
}

fn missing(field: &str) -> RecurrenceError {
    RecurrenceError::InvalidRule(format!("{field} is required"))
}

fn ranged_field(field: &str, value: Option<i64>, max: u8) -> RecurrenceResult<u8> {
    let value = value.ok_or_else(|| missing(field))?;
    u8::try_from(value)
        .ok()
        .filter(|v| (1..=max).contains(v))
        .ok_or_else(|| {
            RecurrenceError::InvalidRule(format!(
                "{field} must be between 1 and {max}, got {value}"
            ))
        })
}

fn day_field(field: &str, value: Option<i64>) -> RecurrenceResult<u8> {
    ranged_field(field, value, 31)
}

fn weekday_field(value: Option<&str>) -> RecurrenceResult<Weekday> {
    let value = value.ok_or_else(|| missing("day_of_week"))?;
    Weekday::parse(value)
        .ok_or_else(|| RecurrenceError::InvalidRule(format!("unknown day_of_week: {value:?}")))
}

fn custom_dates_field(value: Option<&[String]>) -> RecurrenceResult<[MonthDay; 4]> {
    let values = value.ok_or_else(|| missing("custom_dates"))?;
    let parsed = values
        .iter()
        .map(|s| s.parse::<MonthDay>())
        .collect::<RecurrenceResult<Vec<_>>>()?;
    <[MonthDay; 4]>::try_from(parsed).map_err(|dates| {
        RecurrenceError::InvalidRule(format!(
            "custom_dates must contain exactly 4 dates, got {}",
            dates.len()
        ))
    })
}

impl RecurrenceRule {
    /// ## Summary
    /// Builds a typed rule from a stored kind and config.
    ///
    /// Fields that do not belong to `kind` are ignored.
    ///
    /// ## Errors
    /// Returns `InvalidRule` naming the first missing or out-of-range field.
    pub fn from_config(kind: FrequencyKind, config: &FrequencyConfig) -> RecurrenceResult<Self> {
        let rule = match kind {
            FrequencyKind::Monthly => {
                if config.is_end_of_month == Some(true) {
                    Self::Monthly(MonthlyRule::EndOfMonth)
                } else {
                    Self::Monthly(MonthlyRule::DayOfMonth(day_field(
                        "day_of_month",
                        config.day_of_month,
                    )?))
                }
            }
            FrequencyKind::Weekly => Self::Weekly {
                day_of_week: weekday_field(config.day_of_week.as_deref())?,
            },
            FrequencyKind::Biweekly => Self::Biweekly {
                day_of_week: weekday_field(config.day_of_week.as_deref())?,
            },
            FrequencyKind::SemiMonthly => {
                let first_day = day_field("first_day", config.first_day)?;
                let second = if config.is_second_end_of_month == Some(true) {
                    SecondDay::EndOfMonth
                } else {
                    SecondDay::Day(day_field("second_day", config.second_day)?)
                };
                Self::SemiMonthly { first_day, second }
            }
            FrequencyKind::Quarterly => match config.quarterly_type.as_deref() {
                None | Some("regular") => Self::Quarterly(QuarterlyRule::Regular {
                    day_of_month: day_field("day_of_month", config.day_of_month)?,
                }),
                Some("custom") => Self::Quarterly(QuarterlyRule::Custom {
                    dates: custom_dates_field(config.custom_dates.as_deref())?,
                }),
                Some(other) => {
                    return Err(RecurrenceError::InvalidRule(format!(
                        "unknown quarterly_type: {other:?}"
                    )));
                }
            },
            FrequencyKind::Yearly => Self::Yearly {
                month: ranged_field("month", config.month, 12)?,
                day: day_field("day", config.day)?,
            },
            FrequencyKind::PerPaycheck => {
                let trigger = match config.paycheck_trigger.as_deref() {
                    None => PaycheckTrigger::default(),
                    Some(value) => PaycheckTrigger::parse(value).ok_or_else(|| {
                        RecurrenceError::InvalidRule(format!(
                            "unknown paycheck_trigger: {value:?}"
                        ))
                    })?,
                };
                Self::PerPaycheck { trigger }
            }
        };

        tracing::trace!(kind = %kind, ?rule, "Built recurrence rule from config");
        Ok(rule)
    }

    /// Converts this rule back into its stored kind and config.
    #[must_use]
    pub fn to_config(&self) -> (FrequencyKind, FrequencyConfig) {
        let mut config = FrequencyConfig::default();
        match *self {
            Self::Monthly(MonthlyRule::DayOfMonth(day)) => {
                config.day_of_month = Some(i64::from(day));
                config.is_end_of_month = Some(false);
            }
            Self::Monthly(MonthlyRule::EndOfMonth) => {
                config.is_end_of_month = Some(true);
            }
            Self::Weekly { day_of_week } | Self::Biweekly { day_of_week } => {
                config.day_of_week = Some(day_of_week.as_str().to_string());
            }
            Self::SemiMonthly { first_day, second } => {
                config.first_day = Some(i64::from(first_day));
                match second {
                    SecondDay::Day(day) => {
                        config.second_day = Some(i64::from(day));
                        config.is_second_end_of_month = Some(false);
                    }
                    SecondDay::EndOfMonth => config.is_second_end_of_month = Some(true),
                }
            }
            Self::Quarterly(QuarterlyRule::Regular { day_of_month }) => {
                config.quarterly_type = Some("regular".to_string());
                config.day_of_month = Some(i64::from(day_of_month));
            }
            Self::Quarterly(QuarterlyRule::Custom { dates }) => {
                config.quarterly_type = Some("custom".to_string());
                config.custom_dates = Some(dates.iter().map(ToString::to_string).collect());
            }
            Self::Yearly { month, day } => {
                config.month = Some(i64::from(month));
                config.day = Some(i64::from(day));
            }
            Self::PerPaycheck { trigger } => {
                config.paycheck_trigger = Some(trigger.as_str().to_string());
            }
        }
        (self.kind(), config)
    }
}
