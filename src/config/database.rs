//! Database configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::SettingError;

/// Upper bound for `max_connections`.
const MAX_POOL_SIZE: u32 = 50;

/// Database configuration
///
/// Connection parameters default to a local development database. A full
/// `url` takes precedence over the individual parameters when set.
#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    /// Database server host
    #[serde(default = "default_host")]
    pub host: String,

    /// Database server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Database name
    #[serde(default = "default_name")]
    pub name: String,

    /// Login role
    #[serde(default = "default_user")]
    pub user: String,

    /// Login password
    #[serde(default = "default_password")]
    pub password: Secret<String>,

    /// PostgreSQL connection URL, overrides the individual parameters
    #[serde(default)]
    pub url: Option<Secret<String>>,

    /// Minimum connections to maintain
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Maximum connections allowed
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Idle connection timeout in seconds
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// Maximum connection lifetime in seconds
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,

    /// Run migrations on startup
    #[serde(default)]
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// Get acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Get idle timeout as Duration
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Get max lifetime as Duration
    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }

    /// Connection target for logs, without credentials.
    pub fn display_target(&self) -> String {
        match &self.url {
            Some(_) => "<url>".to_string(),
            None => format!("{}:{}/{}", self.host, self.port, self.name),
        }
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), SettingError> {
        match &self.url {
            Some(url) => {
                let url = url.expose_secret();
                if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
                    return Err(SettingError::invalid(
                        "MUSCLE__DATABASE__URL",
                        "must start with postgres:// or postgresql://",
                    ));
                }
            }
            None => {
                if self.host.is_empty() {
                    return Err(SettingError::invalid("MUSCLE__DATABASE__HOST", "must be set"));
                }
                if self.name.is_empty() {
                    return Err(SettingError::invalid("MUSCLE__DATABASE__NAME", "must be set"));
                }
                if self.port == 0 {
                    return Err(SettingError::invalid("MUSCLE__DATABASE__PORT", "must not be 0"));
                }
            }
        }
        if !(1..=MAX_POOL_SIZE).contains(&self.max_connections) {
            return Err(SettingError::out_of_range(
                "MUSCLE__DATABASE__MAX_CONNECTIONS",
                1,
                MAX_POOL_SIZE.into(),
                self.max_connections.into(),
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(SettingError::out_of_range(
                "MUSCLE__DATABASE__MIN_CONNECTIONS",
                0,
                self.max_connections.into(),
                self.min_connections.into(),
            ));
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            name: default_name(),
            user: default_user(),
            password: default_password(),
            url: None,
            min_connections: default_min_connections(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            run_migrations: false,
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_name() -> String {
    "muscle_management_dev".to_string()
}

fn default_user() -> String {
    "user".to_string()
}

fn default_password() -> Secret<String> {
    Secret::new("password".to_string())
}

fn default_min_connections() -> u32 {
    1
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    30
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_max_lifetime() -> u64 {
    1800
}
