use thiserror::Error;

/// Errors raised while assembling shared settings.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid setting `{key}`: {reason}")]
    InvalidSetting { key: &'static str, reason: String },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
