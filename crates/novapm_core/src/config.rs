//! Core runtime configuration.
//!
//! # Responsibility
//! - Declare tunables for the store (invite delay) and logging (level).
//! - Parse them from JSON with defaults for missing keys.
//!
//! # Invariants
//! - Unknown keys are rejected rather than silently ignored.
//! - A config returned by `from_json_str` has already passed `validate`.

use crate::logging::{default_log_level, normalize_level, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;

/// Delay between an invite and its automatic acceptance.
pub const DEFAULT_INVITE_ACCEPT_DELAY_MS: u64 = 600;

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Input is not valid JSON or does not match the config shape.
    Json(serde_json::Error),
    /// `log_level` is not one of `trace|debug|info|warn|error`.
    InvalidLogLevel(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid config json: {err}"),
            Self::InvalidLogLevel(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidLogLevel(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Store and logging tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// Milliseconds between an invite and its acceptance.
    pub invite_accept_delay_ms: u64,
    pub log_level: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            invite_accept_delay_ms: DEFAULT_INVITE_ACCEPT_DELAY_MS,
            log_level: default_log_level().to_string(),
        }
    }
}

impl CoreConfig {
    /// Parses and validates a JSON config document.
    ///
    /// # Errors
    /// - `ConfigError::Json` for malformed input or unknown keys.
    /// - `ConfigError::InvalidLogLevel` for an unsupported level.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level).map_err(ConfigError::InvalidLogLevel)?;
        Ok(())
    }

    pub fn invite_accept_delay(&self) -> Duration {
        Duration::from_millis(self.invite_accept_delay_ms)
    }

    /// Logging setup at this config's level. `None` logs to stderr.
    pub fn logging_config(&self, log_dir: Option<PathBuf>) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            log_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig, DEFAULT_INVITE_ACCEPT_DELAY_MS};
    use std::time::Duration;

    #[test]
    fn empty_document_uses_defaults() {
        let config = CoreConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CoreConfig::default());
        assert_eq!(
            config.invite_accept_delay(),
            Duration::from_millis(DEFAULT_INVITE_ACCEPT_DELAY_MS)
        );
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config =
            CoreConfig::from_json_str(r#"{"invite_accept_delay_ms": 50, "log_level": "WARN"}"#)
                .unwrap();
        assert_eq!(config.invite_accept_delay_ms, 50);
        assert_eq!(config.logging_config(None).level, "WARN");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = CoreConfig::from_json_str(r#"{"theme": "dark"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn invalid_level_is_rejected() {
        let err = CoreConfig::from_json_str(r#"{"log_level": "loud"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(_)));
        assert!(err.to_string().contains("loud"));
    }
}
