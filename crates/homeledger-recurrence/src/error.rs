use thiserror::Error;

/// Recurrence resolution and export errors
#[derive(Error, Debug)]
pub enum RecurrenceError {
    #[error("Invalid recurrence rule: {0}")]
    InvalidRule(String),

    #[error("Unsupported recurrence kind: {0}")]
    UnsupportedKind(&'static str),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Rule cannot be represented as an iCalendar recurrence: {0}")]
    NotRepresentable(String),

    #[error("RRule error: {0}")]
    RRule(#[from] rrule::RRuleError),

    #[error(transparent)]
    Core(#[from] homeledger_core::error::CoreError),
}

pub type RecurrenceResult<T> = std::result::Result<T, RecurrenceError>;
