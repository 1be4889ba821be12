//! HTTP listener settings.
//!
//! The API serves one user from one frontend, so the defaults bind to
//! loopback, answer only same-origin browser requests and give a GraphQL
//! operation ten seconds.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::SettingError;

/// Upper bound for `request_timeout_secs`.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Shape of log lines on stdout
    #[serde(default)]
    pub log_format: LogFormat,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated browser origins allowed to call `/graphql`.
    ///
    /// Unset means same-origin only; `*` allows any origin.
    pub cors_origins: Option<String>,
}

/// Log line format.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines for a terminal
    #[default]
    Pretty,
    /// One JSON object per line for log shipping
    Json,
}

/// Which cross-origin callers the router admits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    SameOrigin,
    AnyOrigin,
    Origins(Vec<String>),
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, SettingError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| SettingError::invalid("MUSCLE__SERVER__HOST", "must be an IP address"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn cors_policy(&self) -> CorsPolicy {
        let origins: Vec<String> = self
            .cors_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if origins.is_empty() {
            CorsPolicy::SameOrigin
        } else if origins.iter().any(|o| o == "*") {
            CorsPolicy::AnyOrigin
        } else {
            CorsPolicy::Origins(origins)
        }
    }

    pub fn validate(&self) -> Result<(), SettingError> {
        if self.port == 0 {
            return Err(SettingError::invalid("MUSCLE__SERVER__PORT", "must not be 0"));
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(SettingError::out_of_range(
                "MUSCLE__SERVER__REQUEST_TIMEOUT_SECS",
                1,
                MAX_REQUEST_TIMEOUT_SECS,
                self.request_timeout_secs,
            ));
        }
        self.socket_addr()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_log_level() -> String {
    "info,muscle_management=debug,sqlx=warn".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
