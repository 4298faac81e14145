use anyhow::Result;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::constants::{DEFAULT_LOG_LEVEL, ENV_PREFIX, MAX_RANGE_ITERATIONS};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub recurrence: RecurrenceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecurrenceConfig {
    /// Maximum resolver calls per range enumeration.
    pub max_range_iterations: u16,
}

impl RecurrenceConfig {
    /// ## Summary
    /// Checks that the configured limits can make progress.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidSetting` if `max_range_iterations` is zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_range_iterations == 0 {
            return Err(CoreError::InvalidSetting {
                key: "recurrence.max_range_iterations",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            max_range_iterations: MAX_RANGE_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default(
            "recurrence.max_range_iterations",
            i64::from(MAX_RANGE_ITERATIONS),
        )?
        .set_default("logging.level", DEFAULT_LOG_LEVEL)?)
}

impl Settings {
    /// ## Summary
    /// Loads settings from environment variables and an optional `config.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// Variables use the `HOMELEDGER_` prefix and `__` between sections, e.g.
    /// `HOMELEDGER_RECURRENCE__MAX_RANGE_ITERATIONS=250`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating the recurrence limits fails.
    pub fn load() -> Result<Self> {
        let settings = builder_with_defaults()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        settings.recurrence.validate()?;
        tracing::debug!(
            max_range_iterations = settings.recurrence.max_range_iterations,
            "Recurrence settings loaded"
        );
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from a TOML document layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is malformed or fails validation.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let settings = builder_with_defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?;

        settings.recurrence.validate()?;
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
