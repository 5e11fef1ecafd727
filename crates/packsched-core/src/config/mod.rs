//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod logging;
pub mod roster;
pub mod schedule;

use serde::{Deserialize, Serialize};

pub use self::logging::LoggingConfig;
pub use self::roster::RosterConfig;
pub use self::schedule::ScheduleConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Enrollment and waitlist bounds for every course roll.
    #[serde(default)]
    pub roster: RosterConfig,
    /// Student schedule settings.
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `PACKSCHED__`. Missing files
    /// are not an error; every section falls back to its defaults.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("PACKSCHED")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.roster.min_enrollment > self.roster.max_enrollment {
            return Err(AppError::configuration(format!(
                "roster.min_enrollment ({}) exceeds roster.max_enrollment ({})",
                self.roster.min_enrollment, self.roster.max_enrollment
            )));
        }
        if self.schedule.min_credits > self.schedule.max_credits {
            return Err(AppError::configuration(format!(
                "schedule.min_credits ({}) exceeds schedule.max_credits ({})",
                self.schedule.min_credits, self.schedule.max_credits
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.roster.min_enrollment, 10);
        assert_eq!(config.roster.max_enrollment, 250);
        assert_eq!(config.roster.waitlist_capacity, 10);
        assert_eq!(config.schedule.default_title, "My Schedule");
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let mut config = AppConfig::default();
        config.roster.min_enrollment = 300;
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let config = AppConfig::load("packsched-test-missing").unwrap();
        assert_eq!(config.schedule.max_credits, 18);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[roster]\nwaitlist_capacity = 3\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.roster.waitlist_capacity, 3);
        assert_eq!(config.roster.max_enrollment, 250);
        assert_eq!(config.schedule.min_credits, 3);
    }
}
