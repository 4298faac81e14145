//! Range enumeration: every occurrence of a rule inside a date window.

use chrono::NaiveDate;
use homeledger_core::config::RecurrenceConfig;
use homeledger_core::constants::MAX_RANGE_ITERATIONS;
use serde::{Deserialize, Serialize};

use crate::calendar::{next_day, previous_day};
use crate::error::{RecurrenceError, RecurrenceResult};
use crate::resolve::next_occurrence;
use crate::rule::{PaycheckTrigger, RecurrenceRule};

/// Bounds on the work a single enumeration may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeLimits {
    /// Maximum number of resolver calls; enumeration stops silently when reached.
    pub max_iterations: u16,
}

impl Default for RangeLimits {
    fn default() -> Self {
        Self {
            max_iterations: MAX_RANGE_ITERATIONS,
        }
    }
}

impl TryFrom<&RecurrenceConfig> for RangeLimits {
    type Error = RecurrenceError;

    fn try_from(config: &RecurrenceConfig) -> RecurrenceResult<Self> {
        config.validate()?;
        Ok(Self {
            max_iterations: config.max_range_iterations,
        })
    }
}

/// One paycheck period as supplied by period management.
///
/// Periods are expected pre-sorted and non-overlapping; this is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Date the paycheck lands, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_date: Option<NaiveDate>,
}

impl PaycheckPeriod {
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            pay_date: None,
        }
    }

    #[must_use]
    pub const fn with_pay_date(mut self, pay_date: NaiveDate) -> Self {
        self.pay_date = Some(pay_date);
        self
    }

    /// Date a per-paycheck rule with `trigger` fires on in this period.
    ///
    /// Periods without a pay date fall back to their start.
    #[must_use]
    pub fn trigger_date(&self, trigger: PaycheckTrigger) -> NaiveDate {
        match trigger {
            PaycheckTrigger::PeriodStart => self.start,
            PaycheckTrigger::PayDate => self.pay_date.unwrap_or(self.start),
        }
    }
}

/// ## Summary
/// Enumerates occurrences of `rule` in `[window_start, window_end]` with the
/// default iteration cap.
///
/// ## Errors
/// See [`occurrences_in_range_with_limits`].
pub fn occurrences_in_range(
    rule: &RecurrenceRule,
    anchor: Option<NaiveDate>,
    window_start: NaiveDate,
    window_end: NaiveDate,
    periods: Option<&[PaycheckPeriod]>,
) -> RecurrenceResult<Vec<NaiveDate>> {
    occurrences_in_range_with_limits(
        rule,
        anchor,
        window_start,
        window_end,
        periods,
        RangeLimits::default(),
    )
}

/// ## Summary
/// Enumerates occurrences of `rule` in `[window_start, window_end]`, both ends
/// inclusive, in ascending order.
///
/// Per-paycheck rules are answered from `periods` directly; every other kind
/// walks the resolver forward from `window_start`. At most
/// `limits.max_iterations` resolver calls are made, so very long windows on
/// frequent rules may come back truncated. Each call recomputes from scratch.
///
/// ## Errors
/// - `InvalidRule` for a per-paycheck rule without `periods`, or any resolver
///   `InvalidRule` (e.g. biweekly without an anchor).
/// - `DateOutOfRange` near the ends of the representable calendar.
pub fn occurrences_in_range_with_limits(
    rule: &RecurrenceRule,
    anchor: Option<NaiveDate>,
    window_start: NaiveDate,
    window_end: NaiveDate,
    periods: Option<&[PaycheckPeriod]>,
    limits: RangeLimits,
) -> RecurrenceResult<Vec<NaiveDate>> {
    if let RecurrenceRule::PerPaycheck { trigger } = *rule {
        let periods = periods.ok_or_else(|| {
            RecurrenceError::InvalidRule("per-paycheck rules require paycheck periods".to_string())
        })?;
        return Ok(paycheck_occurrences(trigger, periods, window_start, window_end));
    }

    let mut occurrences = Vec::new();
    if window_end < window_start {
        return Ok(occurrences);
    }

    let mut cursor = window_start;
    for _ in 0..limits.max_iterations {
        let next = first_on_or_after(rule, anchor, cursor)?;
        if next > window_end {
            return Ok(occurrences);
        }
        if next >= window_start {
            occurrences.push(next);
        }
        cursor = next_day(next)?;
    }

    tracing::debug!(
        kind = %rule.kind(),
        %window_start,
        %window_end,
        found = occurrences.len(),
        max_iterations = limits.max_iterations,
        "Range enumeration stopped at iteration cap"
    );
    Ok(occurrences)
}

/// First occurrence on or after `cursor`.
pub(crate) fn first_on_or_after(
    rule: &RecurrenceRule,
    anchor: Option<NaiveDate>,
    cursor: NaiveDate,
) -> RecurrenceResult<NaiveDate> {
    let next = next_occurrence(rule, anchor, previous_day(cursor)?)?;
    if next >= cursor {
        return Ok(next);
    }
    // Yearly rules may return the search date itself
    next_occurrence(rule, anchor, cursor)
}

fn paycheck_occurrences(
    trigger: PaycheckTrigger,
    periods: &[PaycheckPeriod],
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> Vec<NaiveDate> {
    periods
        .iter()
        .map(|period| period.trigger_date(trigger))
        .filter(|date| (window_start..=window_end).contains(date))
        .collect()
}
