//! Calendar recurrence engine for household income and expense schedules.
//!
//! A [`RecurrenceRule`] describes how often an event repeats. The
//! [`resolve`] module finds the next date a rule fires on, [`range`]
//! enumerates every occurrence inside a window, [`validation`] checks stored
//! configurations before they reach the resolver, and [`format`] renders a
//! rule for display. Everything here is pure calendar math.

// Lets shared test data name this crate the way integration tests do
#[cfg(test)]
extern crate self as homeledger_recurrence;

pub mod calendar;
pub mod error;
pub mod format;
pub mod ical;
pub mod range;
pub mod resolve;
pub mod rule;
pub mod validation;

pub use error::{RecurrenceError, RecurrenceResult};
pub use format::{describe_frequency, ordinal_suffix};
pub use range::{
    PaycheckPeriod, RangeLimits, occurrences_in_range, occurrences_in_range_with_limits,
};
pub use resolve::{next_occurrence, upcoming_occurrences};
pub use rule::{
    FrequencyConfig, FrequencyKind, MonthDay, MonthlyRule, PaycheckTrigger, QuarterlyRule,
    RecurrenceRule, SecondDay, Weekday,
};
pub use validation::{
    FrequencyValidationResult, is_valid_frequency, is_valid_frequency_json, validate_frequency,
};
