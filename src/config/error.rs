use thiserror::Error;

/// Failure to produce a usable `AppConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings: {0}")]
    Read(#[from] config::ConfigError),

    #[error(transparent)]
    Setting(#[from] SettingError),
}

/// A setting that was read but cannot be used.
///
/// `key` is the `MUSCLE__...` variable that sets the value.
#[derive(Debug, Error)]
pub enum SettingError {
    #[error("{key} {reason}")]
    Invalid { key: &'static str, reason: &'static str },

    #[error("{key} must be between {min} and {max}, got {actual}")]
    OutOfRange {
        key: &'static str,
        min: u64,
        max: u64,
        actual: u64,
    },
}

impl SettingError {
    pub fn invalid(key: &'static str, reason: &'static str) -> Self {
        SettingError::Invalid { key, reason }
    }

    pub fn out_of_range(key: &'static str, min: u64, max: u64, actual: u64) -> Self {
        SettingError::OutOfRange { key, min, max, actual }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SettingError::Invalid { key, .. } | SettingError::OutOfRange { key, .. } => key,
        }
    }
}
