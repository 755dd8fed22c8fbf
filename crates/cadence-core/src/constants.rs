/// Version tag carried by every serialized schedule IR.
pub const IR_VERSION: &str = "1";

/// Zone applied when a schedule carries no trailing `in <zone>` suffix.
pub const DEFAULT_TIMEZONE: &str = "Europe/Paris";

/// Forward search window, in days, for `next_occurrence` and `validate`.
///
/// Four years keeps a `02-29` yearly rule satisfiable.
pub const DEFAULT_HORIZON_DAYS: u32 = 1461;

/// Prefix for environment variables read by [`crate::config::load_config`].
pub const ENV_PREFIX: &str = "CADENCE";

/// Base name of the optional configuration file (`cadence.toml`, `cadence.json`, ...).
pub const CONFIG_FILE_NAME: &str = "cadence";
