//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MUSCLE_` prefix and nested values use double underscores as separators.
//! Every value has a local-development default.
//!
//! # Example
//!
//! ```no_run
//! use muscle_management::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on port {}", config.server.port);
//! ```

mod database;
mod error;
mod exercises;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, SettingError};
pub use exercises::ExercisesConfig;
pub use server::{CorsPolicy, LogFormat, ServerConfig};

use serde::Deserialize;

/// Plain variables from earlier deployments, mapped onto config keys.
///
/// These are applied as defaults, so a `MUSCLE__...` variable for the same
/// key wins.
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_NAME", "database.name"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DATABASE_URL", "database.url"),
    ("PORT", "server.port"),
];

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// HTTP listener (address, logging, timeout, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Exercise behaviour
    #[serde(default)]
    pub exercises: ExercisesConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Applies legacy `DB_*` / `PORT` variables as defaults
    /// 3. Reads environment variables with `MUSCLE` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MUSCLE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MUSCLE__DATABASE__HOST=db` -> `database.host = db`
    /// - `MUSCLE__EXERCISES__DEFAULT_ORDER=append` -> `exercises.default_order = append`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        for (var, key) in LEGACY_ENV_KEYS {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_default(*key, value)?;
            }
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("MUSCLE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns the first `SettingError` found, naming the variable to fix.
    pub fn validate(&self) -> Result<(), SettingError> {
        self.server.validate()?;
        self.database.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exercise::ExerciseOrderPolicy;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const TOUCHED_VARS: &[&str] = &[
        "DB_HOST",
        "DB_PORT",
        "DB_NAME",
        "DB_USER",
        "DB_PASSWORD",
        "DATABASE_URL",
        "PORT",
        "MUSCLE__SERVER__PORT",
        "MUSCLE__SERVER__LOG_FORMAT",
        "MUSCLE__SERVER__REQUEST_TIMEOUT_SECS",
        "MUSCLE__DATABASE__HOST",
        "MUSCLE__EXERCISES__DEFAULT_ORDER",
    ];

    /// Helper to clear environment variables before and after testing
    fn clear_env() {
        for var in TOUCHED_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.database.host, "localhost");
        assert_eq!(config.database.name, "muscle_management_dev");
        assert_eq!(config.exercises.default_order, ExerciseOrderPolicy::First);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_legacy_variables_are_honoured() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DB_HOST", "db.internal");
        env::set_var("DB_PORT", "6543");
        env::set_var("DB_PASSWORD", "hunter2");
        env::set_var("PORT", "4100");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 6543);
        assert_eq!(config.database.password.expose_secret(), "hunter2");
        assert_eq!(config.server.port, 4100);
    }

    #[test]
    fn test_prefixed_variables_win_over_legacy() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DB_HOST", "legacy-host");
        env::set_var("MUSCLE__DATABASE__HOST", "prefixed-host");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().database.host, "prefixed-host");
    }

    #[test]
    fn test_json_log_format() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("MUSCLE__SERVER__LOG_FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_setting_names_its_variable() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("MUSCLE__SERVER__REQUEST_TIMEOUT_SECS", "300");
        let result = AppConfig::load();
        clear_env();

        let err = result.unwrap().validate().unwrap_err();
        assert_eq!(err.key(), "MUSCLE__SERVER__REQUEST_TIMEOUT_SECS");
        assert_eq!(
            err.to_string(),
            "MUSCLE__SERVER__REQUEST_TIMEOUT_SECS must be between 1 and 60, got 300"
        );
    }

    #[test]
    fn test_exercise_order_policy() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("MUSCLE__EXERCISES__DEFAULT_ORDER", "append");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().exercises.default_order, ExerciseOrderPolicy::Append);
    }
}
