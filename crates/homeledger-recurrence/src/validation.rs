//! ## Summary
//! Structural validation of stored frequency configurations.
//!
//! Checks that the fields a kind needs are present and in range (day of month
//! 1-31, month 1-12, a known weekday, exactly four custom quarterly dates).
//! Calendar legality is not checked: day 31 is accepted for every month and
//! is clamped when resolved.

use crate::rule::{FrequencyConfig, FrequencyKind, RecurrenceRule};

/// ## Summary
/// Result of frequency validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencyValidationResult {
    /// Config forms a well-formed rule for its kind
    Valid,
    /// Config is rejected, with the reason
    Invalid(String),
}

impl FrequencyValidationResult {
    /// Returns true if the config is valid
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns error message if invalid
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(format!("Invalid frequency configuration: {reason}")),
        }
    }
}

/// ## Summary
/// Validates `config` against the shape required by `kind`.
#[must_use]
pub fn validate_frequency(
    kind: FrequencyKind,
    config: &FrequencyConfig,
) -> FrequencyValidationResult {
    match RecurrenceRule::from_config(kind, config) {
        Ok(_) => FrequencyValidationResult::Valid,
        Err(err) => {
            tracing::debug!(%kind, error = %err, "Rejected frequency configuration");
            FrequencyValidationResult::Invalid(err.to_string())
        }
    }
}

/// Returns true if `config` is well-formed for `kind`.
#[must_use]
pub fn is_valid_frequency(kind: FrequencyKind, config: &FrequencyConfig) -> bool {
    validate_frequency(kind, config).is_valid()
}

/// ## Summary
/// Validates a raw stored kind string and JSON config.
///
/// Unknown kinds and configs whose fields have the wrong JSON type are
/// invalid rather than errors.
#[must_use]
pub fn is_valid_frequency_json(kind: &str, config: &serde_json::Value) -> bool {
    let Some(kind) = FrequencyKind::parse(kind) else {
        tracing::debug!(kind, "Unknown frequency kind");
        return false;
    };
    match serde_json::from_value::<FrequencyConfig>(config.clone()) {
        Ok(config) => is_valid_frequency(kind, &config),
        Err(err) => {
            tracing::debug!(%kind, error = %err, "Frequency config has wrong shape");
            false
        }
    }
}
