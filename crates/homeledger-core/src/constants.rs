/// Upper bound on resolver calls made by a single range enumeration.
pub const MAX_RANGE_ITERATIONS: u16 = 100;

/// Default log filter for binaries that do not configure one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Prefix of environment variables read by [`crate::config::load_config`].
pub const ENV_PREFIX: &str = "HOMELEDGER";
