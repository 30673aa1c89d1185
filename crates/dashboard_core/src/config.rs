//! Process configuration for hosts embedding the core.
//!
//! Values start from built-in defaults and are overridden by `DASHBOARD_*`
//! environment variables. An unset or empty variable keeps the default.

use crate::logging::{default_log_level, normalize_level, LoggingError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "DASHBOARD_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "DASHBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "DASHBOARD_LOG_DIR";
pub const ENV_STORAGE_QUOTA: &str = "DASHBOARD_STORAGE_QUOTA";

/// Capacity of a browser-local origin store.
pub const DEFAULT_STORAGE_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file backing the medium; `None` keeps everything in memory.
    pub db_path: Option<PathBuf>,
    pub log_level: &'static str,
    /// Absolute log directory; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// `None` lifts the medium's capacity limit.
    pub storage_quota_bytes: Option<u64>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level(),
            log_dir: None,
            storage_quota_bytes: Some(DEFAULT_STORAGE_QUOTA_BYTES),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidLogLevel(LoggingError),
    /// Quota is not a non-negative integer.
    InvalidQuota(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLogLevel(err) => write!(f, "{ENV_LOG_LEVEL}: {err}"),
            Self::InvalidQuota(value) => write!(
                f,
                "{ENV_STORAGE_QUOTA}: expected a byte count or `none`, got `{value}`"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLogLevel(err) => Some(err),
            Self::InvalidQuota(_) => None,
        }
    }
}

impl CoreConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads overrides through `lookup`, so callers and tests need not touch
    /// the real environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = read(ENV_DB_PATH) {
            config.db_path = Some(PathBuf::from(path));
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level).map_err(ConfigError::InvalidLogLevel)?;
        }
        if let Some(dir) = read(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(quota) = read(ENV_STORAGE_QUOTA) {
            config.storage_quota_bytes = parse_quota(&quota)?;
        }

        Ok(config)
    }
}

fn parse_quota(value: &str) -> Result<Option<u64>, ConfigError> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidQuota(value.to_string()))
}
