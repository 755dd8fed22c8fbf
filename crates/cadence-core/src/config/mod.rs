use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_HORIZON_DAYS, DEFAULT_TIMEZONE, ENV_PREFIX};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub schedule: ScheduleConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// IANA zone used when a schedule has no `in <zone>` suffix.
    pub default_timezone: String,
    /// Forward search window for occurrence lookup and validation.
    pub horizon_days: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schedule: ScheduleConfig {
                default_timezone: DEFAULT_TIMEZONE.to_string(),
                horizon_days: DEFAULT_HORIZON_DAYS,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional `cadence.toml`, and
    /// `CADENCE__*` environment variables, in increasing order of precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Config::builder()
            .set_default("schedule.default_timezone", DEFAULT_TIMEZONE)?
            .set_default("schedule.horizon_days", i64::from(DEFAULT_HORIZON_DAYS))?
            .set_default("logging.level", "info")?
            // TOML/JSON/YAML file
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            // Env vars, e.g. CADENCE__SCHEDULE__DEFAULT_TIMEZONE
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(err) = dotenvy::dotenv() {
        tracing::trace!(error = %err, "No .env file loaded");
    }

    let settings = Settings::load()?;
    tracing::debug!(
        default_timezone = %settings.schedule.default_timezone,
        horizon_days = settings.schedule.horizon_days,
        "Settings loaded"
    );
    Ok(settings)
}
