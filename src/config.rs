//! Configuration management for the contact assistant.
//!
//! Settings are operational knobs loaded from environment variables; the
//! command interface itself takes no flags or options. A `.env` file is
//! honored when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Runtime configuration for the assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upcoming-birthday window in days (default: 7)
    pub birthday_window_days: i64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: upcoming-birthday window in days (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if it exists, without failing when it doesn't.
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_i64("BIRTHDAY_WINDOW_DAYS", 7)?;
        if birthday_window_days < 0 {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be a non-negative number".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_defaults() {
        env::remove_var("BIRTHDAY_WINDOW_DAYS");
        env::remove_var("LOG_LEVEL");
        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_reads_window_override() {
        env::set_var("BIRTHDAY_WINDOW_DAYS", "14");
        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_window_days, 14);
        env::remove_var("BIRTHDAY_WINDOW_DAYS");
    }

    #[test]
    #[serial]
    fn test_config_rejects_bad_window() {
        env::set_var("BIRTHDAY_WINDOW_DAYS", "soon");
        assert!(Config::from_env().is_err());
        env::set_var("BIRTHDAY_WINDOW_DAYS", "-1");
        assert!(Config::from_env().is_err());
        env::remove_var("BIRTHDAY_WINDOW_DAYS");
    }
}
